//! Type definitions for letter-to-sound rules.

use crate::phoneme::Phoneme;

/// Where a rule's pattern may match.
///
/// Letter lists restrict the neighbouring letter; an empty list means any
/// vowel letter (`Before/AfterVowel`) or any consonant letter
/// (`Before/AfterConsonant`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Context {
    /// No restriction
    Anywhere,
    /// Pattern starts the word
    Initial,
    /// Pattern ends the word
    Final,
    /// Next letter is one of the listed letters
    BeforeVowel(Vec<char>),
    /// Next letter is one of the listed consonants
    BeforeConsonant(Vec<char>),
    /// Previous letter is one of the listed vowels
    AfterVowel(Vec<char>),
    /// Previous letter is one of the listed consonants
    AfterConsonant(Vec<char>),
    /// Some vowel letter occurs before the pattern
    VowelEarlier,
    /// Every listed context holds
    All(Vec<Context>),
}

/// A letter-sequence-to-phoneme rule.
///
/// An empty `phonemes` list marks the pattern as silent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterRule {
    /// Lowercase letters to match
    pub pattern: String,
    /// Context in which the rule applies
    #[cfg_attr(feature = "serialization", serde(default = "anywhere"))]
    pub context: Context,
    /// Phonemes emitted; vowels are stressed by the transcriber
    pub phonemes: Vec<Phoneme>,
}

#[cfg(feature = "serialization")]
fn anywhere() -> Context {
    Context::Anywhere
}

impl LetterRule {
    /// Create a rule.
    pub fn new(pattern: &str, context: Context, phonemes: &[Phoneme]) -> Self {
        Self {
            pattern: pattern.to_string(),
            context,
            phonemes: phonemes.to_vec(),
        }
    }

    /// Returns true if the rule consumes letters without emitting sound.
    pub fn is_silent(&self) -> bool {
        self.phonemes.is_empty()
    }
}
