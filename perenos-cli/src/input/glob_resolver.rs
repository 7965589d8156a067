//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
///
/// Directories matched by a pattern are skipped. The result is sorted and
/// deduplicated so overlapping patterns process each file once.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No input files matched the given patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_overlapping_patterns_deduplicate() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sample.txt");
        fs::write(&file_path, "текст").unwrap();

        let star = format!("{}/*.txt", temp_dir.path().display());
        let exact = file_path.display().to_string();

        let files = resolve_patterns(&[star, exact]).unwrap();
        assert_eq!(files, vec![file_path]);
    }

    #[test]
    fn test_no_matches_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.missing", temp_dir.path().display());

        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(err.to_string().contains("No input files"));
    }

    #[test]
    fn test_directories_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub.txt")).unwrap();
        fs::write(temp_dir.path().join("real.txt"), "текст").unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let files = resolve_patterns(&[pattern]).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.txt"));
    }
}
