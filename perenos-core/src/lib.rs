//! Phonetic soft hyphenation for Cyrillic and Latin text
//!
//! Words are classified letter by letter, Latin digraphs and trigraphs are
//! collapsed by a fixed set of rewrite passes, the result is segmented into
//! phonemes and grouped into syllables, and the syllables are joined with a
//! configurable marker. A document scanner applies the same pipeline to
//! running text while leaving markup untouched.
//!
//! # Example
//!
//! ```rust
//! use perenos_core::{Hyphenator, HyphenatorConfig};
//!
//! let config = HyphenatorConfig::builder().marker("-").build();
//! let hyphenator = Hyphenator::with_config(config);
//!
//! assert_eq!(hyphenator.hyphenate_word("молоко").unwrap(), "мо-ло-ко");
//! assert_eq!(
//!     hyphenator.hyphenate_text("<b>пример</b> WI-FI"),
//!     "<b>при-мер</b> WI-FI"
//! );
//! ```

pub mod alphabet;
pub mod error;
pub mod hyphenator;
pub mod phoneme;
mod render;
mod rewrite;
mod scanner;
pub mod syllable;
pub mod word;

pub use alphabet::{Alphabet, SoundClass};
pub use error::{CoreError, Result};
pub use hyphenator::{Hyphenator, HyphenatorConfig, HyphenatorConfigBuilder, WordAnalysis};
pub use phoneme::Phoneme;
pub use syllable::Syllable;
pub use word::TypedWord;
