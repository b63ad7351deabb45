//! # libsyllable
//!
//! Phonetic transcription and syllable breakdown of English words.
//!
//! Given a word, the library looks up its pronunciation in a CMU-format
//! pronouncing dictionary (or derives one from spelling with letter-to-sound
//! rules when the word is missing), splits the spelling into syllables, and
//! assigns each syllable its share of the phoneme sequence.
//!
//! ## Example
//!
//! ```rust
//! use libsyllable::prelude::*;
//!
//! let result = analyze("example").unwrap();
//! assert_eq!(result.phonemes().to_string(), "IH0 G Z AE1 M P AH0 L");
//!
//! for syllable in result.syllables() {
//!     println!("{:>4}  {}", syllable.text(), syllable.phonemes);
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`Word::parse`](word::Word::parse) normalizes and validates input
//! 2. a [`PhonemeDictionary`](dictionary::PhonemeDictionary) supplies the
//!    pronunciation, or the [`FallbackTranscriber`](fallback::FallbackTranscriber)
//!    derives one
//! 3. the [`Syllabifier`](syllable::Syllabifier) splits the spelling
//! 4. the [`Aligner`](align::Aligner) distributes the phonemes over syllables
//!
//! Every stage is deterministic and read-only after construction, so a
//! single [`Analyzer`](analysis::Analyzer) can serve any number of threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod align;
pub mod analysis;
pub mod dictionary;
pub mod error;
pub mod fallback;
pub mod phoneme;
pub mod syllable;
pub mod word;

/// JSON analyzer configuration
#[cfg(feature = "serialization")]
pub mod config;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use analysis::analyze;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::align::{AlignedSyllable, Aligner, AlignmentStrategy, SyllableAnalysis};
    pub use crate::analysis::{analyze, AnalysisResult, Analyzer, PronunciationSource};
    pub use crate::dictionary::{CmuDictionary, PhonemeDictionary};
    pub use crate::error::{DictionaryError, InvalidInput};
    pub use crate::fallback::{Context, FallbackTranscriber, LetterRule};
    pub use crate::phoneme::{Arpabet, Phoneme, PhonemeSequence, Stress};
    pub use crate::syllable::{Syllabifier, Syllable, SyllableRules};
    pub use crate::word::Word;

    #[cfg(feature = "serialization")]
    pub use crate::config::{AnalyzerConfig, ConfigError};
}
