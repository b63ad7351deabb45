//! Normalized input words.

use std::fmt;

use crate::error::InvalidInput;

/// A normalized word: trimmed, lowercase, non-empty, ASCII letters only.
///
/// Every component downstream of [`Word::parse`] relies on this invariant,
/// so byte offsets and character offsets coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize),
    serde(transparent)
)]
pub struct Word(String);

impl Word {
    /// Normalize raw input into a word.
    ///
    /// # Errors
    ///
    /// - [`InvalidInput::Empty`] for empty or whitespace-only input
    /// - [`InvalidInput::NonAlphabetic`] if any character is not `A-Z`/`a-z`
    ///
    /// # Example
    ///
    /// ```rust
    /// use libsyllable::word::Word;
    ///
    /// let word = Word::parse("  Example \n").unwrap();
    /// assert_eq!(word.as_str(), "example");
    /// assert!(Word::parse("123").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, InvalidInput> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidInput::Empty);
        }
        if let Some((position, found)) = trimmed
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            return Err(InvalidInput::NonAlphabetic {
                input: trimmed.to_string(),
                position,
                found,
            });
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// The normalized text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The normalized text as bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
