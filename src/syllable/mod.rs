//! Orthographic syllabification.
//!
//! [`Syllabifier`] splits a [`Word`](crate::word::Word) into contiguous
//! [`Syllable`] spans, one per vowel nucleus, using the maximal-onset
//! heuristic. All letter classes and clusters come from [`SyllableRules`],
//! which is plain data and can be replaced through configuration.
//!
//! # Example
//!
//! ```rust
//! use libsyllable::syllable::Syllabifier;
//! use libsyllable::word::Word;
//!
//! let syllabifier = Syllabifier::default();
//! let word = Word::parse("example").unwrap();
//! let parts: Vec<String> = syllabifier
//!     .split(&word)
//!     .iter()
//!     .map(|s| s.text().to_string())
//!     .collect();
//! assert_eq!(parts, vec!["ex", "am", "ple"]);
//! ```

pub mod rules;
pub mod splitter;

pub use rules::SyllableRules;
pub use splitter::{Syllabifier, Syllable};
