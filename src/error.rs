//! Error types.

use thiserror::Error;

/// Raw input that cannot become a [`Word`](crate::word::Word).
///
/// This is the only failure visible to callers of
/// [`analyze`](crate::analysis::analyze); every well-formed word yields a
/// result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// The input was empty or whitespace-only.
    #[error("input is empty")]
    Empty,

    /// The input contains a character outside `A-Z`/`a-z`.
    ///
    /// `position` is the character offset within the trimmed input.
    #[error("input `{input}` contains non-alphabetic character {found:?} at position {position}")]
    NonAlphabetic {
        /// Trimmed input
        input: String,
        /// Character offset of the offending character
        position: usize,
        /// The offending character
        found: char,
    },
}

/// Errors raised while loading a pronunciation dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// I/O error reading the source
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// An entry line has a headword but no phonemes.
    #[error("line {line}: malformed entry `{content}`")]
    MalformedEntry {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// An entry uses a symbol outside the ARPABET set.
    #[error("line {line}: {source}")]
    UnknownSymbol {
        /// 1-based line number
        line: usize,
        /// Underlying parse error
        source: crate::phoneme::ParsePhonemeError,
    },
}

/// A specialized `Result` type for dictionary loading.
pub type Result<T> = std::result::Result<T, DictionaryError>;
