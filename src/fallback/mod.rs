//! Letter-to-sound fallback for words missing from the dictionary.
//!
//! [`FallbackTranscriber`] consumes a word left to right with an ordered
//! table of [`LetterRule`]s. At each position the longest pattern whose
//! [`Context`] holds wins; ties go to the rule listed first. Every letter has
//! a built-in single-letter default, so transcription is total.
//!
//! # Usage
//!
//! ```rust
//! use libsyllable::fallback::FallbackTranscriber;
//! use libsyllable::word::Word;
//!
//! let transcriber = FallbackTranscriber::default();
//! let seq = transcriber.transcribe(&Word::parse("shine").unwrap());
//! assert_eq!(seq.to_string(), "SH IH1 N");
//! ```
//!
//! # Rule tables
//!
//! [`default_letter_rules`] is a compact English table: bound suffixes
//! (`tion`, `cious`), consonant digraphs and trigraphs, vowel teams, r-colored
//! vowels, soft `c`/`g`, initial silent letters, syllabic `-le` and silent
//! final `e`. It is data, and can be replaced through configuration.

pub mod matching;
pub mod rules;
pub mod transcriber;
pub mod types;

pub use matching::{context_matches, pattern_matches_at, DEFAULT_VOWEL_LETTERS};
pub use rules::{default_letter_rules, default_phonemes};
pub use transcriber::FallbackTranscriber;
pub use types::{Context, LetterRule};
