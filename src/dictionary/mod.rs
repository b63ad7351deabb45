//! Pronunciation dictionaries.
//!
//! A dictionary maps a normalized [`Word`] to one or more pronunciations in
//! a fixed priority order. Dictionaries are built once and never mutated, so
//! a loaded dictionary can be shared across threads without locking.

pub mod bundled;
pub mod cmu;

pub use cmu::CmuDictionary;

use crate::phoneme::PhonemeSequence;
use crate::word::Word;

/// Read-only word-to-pronunciation lookup.
///
/// Implementations must return pronunciations in a deterministic priority
/// order; [`lookup`](PhonemeDictionary::lookup) selects the first one.
pub trait PhonemeDictionary: Send + Sync {
    /// All pronunciations of `word`, most common first. Empty if absent.
    fn pronunciations(&self, word: &Word) -> &[PhonemeSequence];

    /// The primary pronunciation of `word`, if the word is present.
    fn lookup(&self, word: &Word) -> Option<&PhonemeSequence> {
        self.pronunciations(word).first()
    }

    /// Check if the dictionary has an entry for `word`.
    fn contains(&self, word: &Word) -> bool {
        !self.pronunciations(word).is_empty()
    }

    /// Number of distinct headwords.
    fn len(&self) -> usize;

    /// Check if the dictionary has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D: PhonemeDictionary + ?Sized> PhonemeDictionary for &D {
    fn pronunciations(&self, word: &Word) -> &[PhonemeSequence] {
        (**self).pronunciations(word)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<D: PhonemeDictionary + ?Sized> PhonemeDictionary for std::sync::Arc<D> {
    fn pronunciations(&self, word: &Word) -> &[PhonemeSequence] {
        (**self).pronunciations(word)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
