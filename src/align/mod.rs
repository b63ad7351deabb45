//! Syllable/phoneme alignment.
//!
//! [`Aligner::align`] distributes a word's phoneme sequence over its
//! syllables. Two strategies exist:
//!
//! - [`AlignmentStrategy::Nucleus`]: when the number of vowel phonemes equals
//!   the number of syllables, the k-th vowel phoneme belongs to the k-th
//!   syllable and every consonant phoneme joins the syllable of its nearest
//!   vowel phoneme, the left one on ties.
//! - [`AlignmentStrategy::Proportional`]: otherwise the sequence is cut into
//!   as many contiguous blocks as there are syllables, each `len / n` long,
//!   with the remainder added to the final block.
//!
//! Either way the blocks concatenate back to the input sequence exactly.

use crate::phoneme::PhonemeSequence;
use crate::syllable::Syllable;

/// Which alignment strategy produced a [`SyllableAnalysis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum AlignmentStrategy {
    /// Vowel phonemes matched one-to-one with syllable nuclei
    Nucleus,
    /// Even contiguous slicing after a vowel/syllable count mismatch
    Proportional,
}

/// A syllable with its share of the word's phonemes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct AlignedSyllable {
    /// The orthographic span
    pub syllable: Syllable,
    /// The phonemes pronounced in this span
    pub phonemes: PhonemeSequence,
}

impl AlignedSyllable {
    /// The syllable's letters.
    pub fn text(&self) -> &str {
        self.syllable.text()
    }

    /// IPA rendering of this syllable's phonemes.
    pub fn ipa(&self) -> String {
        self.phonemes.ipa()
    }
}

/// Ordered syllable/phoneme pairs for one word.
///
/// The phoneme subsequences concatenate to the full pronunciation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct SyllableAnalysis {
    syllables: Vec<AlignedSyllable>,
    strategy: AlignmentStrategy,
}

impl SyllableAnalysis {
    /// The aligned syllables in order.
    pub fn syllables(&self) -> &[AlignedSyllable] {
        &self.syllables
    }

    /// Strategy used to produce this alignment.
    pub fn strategy(&self) -> AlignmentStrategy {
        self.strategy
    }

    /// Number of syllables.
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// True if there are no syllables.
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Concatenate the per-syllable phonemes.
    pub fn phonemes(&self) -> PhonemeSequence {
        self.syllables
            .iter()
            .flat_map(|s| s.phonemes.iter().copied())
            .collect()
    }

    /// Iterate over the aligned syllables.
    pub fn iter(&self) -> std::slice::Iter<'_, AlignedSyllable> {
        self.syllables.iter()
    }
}

impl<'a> IntoIterator for &'a SyllableAnalysis {
    type Item = &'a AlignedSyllable;
    type IntoIter = std::slice::Iter<'a, AlignedSyllable>;

    fn into_iter(self) -> Self::IntoIter {
        self.syllables.iter()
    }
}

/// Distributes phonemes across syllables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aligner;

impl Aligner {
    /// Create an aligner.
    pub fn new() -> Self {
        Self
    }

    /// Align `phonemes` to `syllables`.
    ///
    /// A vowel/syllable count mismatch is logged at `info` level and
    /// resolved with [`AlignmentStrategy::Proportional`].
    pub fn align(&self, syllables: Vec<Syllable>, phonemes: &PhonemeSequence) -> SyllableAnalysis {
        let vowels = phonemes.vowel_positions();

        let (cuts, strategy) = if !syllables.is_empty() && vowels.len() == syllables.len() {
            (nucleus_cuts(&vowels, phonemes.len()), AlignmentStrategy::Nucleus)
        } else {
            let text: String = syllables.iter().map(|s| s.text()).collect();
            tracing::info!(
                word = %text,
                syllables = syllables.len(),
                vowel_phonemes = vowels.len(),
                "alignment irregularity, slicing proportionally"
            );
            (
                proportional_cuts(syllables.len(), phonemes.len()),
                AlignmentStrategy::Proportional,
            )
        };

        let syllables = syllables
            .into_iter()
            .zip(cuts.windows(2))
            .map(|(syllable, w)| AlignedSyllable {
                syllable,
                phonemes: phonemes.slice(w[0]..w[1]),
            })
            .collect();

        SyllableAnalysis {
            syllables,
            strategy,
        }
    }
}

/// Block boundaries `[0, b1, ..., len]` for nucleus alignment.
///
/// Consonants between vowels `v` and `w` split at the midpoint; the middle
/// consonant of an odd gap goes left.
fn nucleus_cuts(vowels: &[usize], len: usize) -> Vec<usize> {
    let mut cuts = Vec::with_capacity(vowels.len() + 1);
    cuts.push(0);
    for pair in vowels.windows(2) {
        let gap = pair[1] - pair[0] - 1;
        cuts.push(pair[0] + 1 + (gap + 1) / 2);
    }
    cuts.push(len);
    cuts
}

/// Block boundaries for `n` equal blocks with the remainder on the last.
fn proportional_cuts(n: usize, len: usize) -> Vec<usize> {
    if n == 0 {
        return vec![0];
    }
    let base = len / n;
    let mut cuts: Vec<usize> = (0..n).map(|i| i * base).collect();
    cuts.push(len);
    cuts
}
