//! Left-to-right letter-to-sound transcription.

use rustc_hash::FxHashMap;

use super::matching::{context_matches, pattern_matches_at, DEFAULT_VOWEL_LETTERS};
use super::rules::{default_letter_rules, default_phonemes};
use super::types::LetterRule;
use crate::phoneme::{Phoneme, PhonemeSequence, Stress};
use crate::word::Word;

/// Derives an approximate pronunciation from spelling.
///
/// Rules are bucketed by their first letter and kept longest pattern first,
/// so each position is resolved by scanning one short bucket.
#[derive(Debug, Clone)]
pub struct FallbackTranscriber {
    by_first: FxHashMap<u8, Vec<LetterRule>>,
    rule_count: usize,
    vowels: Vec<u8>,
}

impl FallbackTranscriber {
    /// Build a transcriber from a rule table, with `a e i o u` as vowels.
    ///
    /// Patterns are lowercased. Rules with an empty or non-alphabetic
    /// pattern can never match a [`Word`] and are dropped with a warning.
    pub fn new(rules: Vec<LetterRule>) -> Self {
        Self::with_vowels(rules, DEFAULT_VOWEL_LETTERS)
    }

    /// Build a transcriber whose rule contexts classify `vowels` as vowel
    /// letters.
    pub fn with_vowels(rules: Vec<LetterRule>, vowels: &[u8]) -> Self {
        let mut by_first: FxHashMap<u8, Vec<LetterRule>> = FxHashMap::default();
        let mut rule_count = 0;

        for mut rule in rules {
            if rule.pattern.is_empty() || !rule.pattern.bytes().all(|b| b.is_ascii_alphabetic()) {
                tracing::warn!(pattern = %rule.pattern, "ignoring letter rule with unusable pattern");
                continue;
            }
            rule.pattern.make_ascii_lowercase();
            let first = rule.pattern.as_bytes()[0];
            by_first.entry(first).or_default().push(rule);
            rule_count += 1;
        }

        // Stable: equal lengths keep table order
        for bucket in by_first.values_mut() {
            bucket.sort_by(|a, b| b.pattern.len().cmp(&a.pattern.len()));
        }

        let mut vowels: Vec<u8> = vowels.iter().map(u8::to_ascii_lowercase).collect();
        vowels.sort_unstable();
        vowels.dedup();

        Self {
            by_first,
            rule_count,
            vowels,
        }
    }

    /// Number of usable rules.
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    /// Letters that rule contexts treat as vowels.
    pub fn vowels(&self) -> &[u8] {
        &self.vowels
    }

    /// Transcribe a word.
    ///
    /// Total: every letter has a default sound, and a word whose letters were
    /// all consumed silently is re-emitted with the single-letter defaults.
    /// The first vowel receives primary stress and later vowels none.
    pub fn transcribe(&self, word: &Word) -> PhonemeSequence {
        let bytes = word.as_bytes();
        let mut phonemes: Vec<Phoneme> = Vec::with_capacity(bytes.len());
        let mut pos = 0;

        while pos < bytes.len() {
            match self.find_rule(bytes, pos) {
                Some(rule) => {
                    phonemes.extend_from_slice(&rule.phonemes);
                    pos += rule.pattern.len();
                }
                None => {
                    phonemes.extend_from_slice(default_phonemes(bytes[pos]));
                    pos += 1;
                }
            }
        }

        if phonemes.is_empty() {
            tracing::debug!(word = %word, "all letters silent, using letter defaults");
            phonemes = bytes
                .iter()
                .flat_map(|&b| default_phonemes(b).iter().copied())
                .collect();
        }

        assign_stress(&mut phonemes);
        PhonemeSequence::new(phonemes)
    }

    /// First rule (longest pattern first) that matches at `pos`.
    fn find_rule(&self, word: &[u8], pos: usize) -> Option<&LetterRule> {
        self.by_first.get(&word[pos])?.iter().find(|rule| {
            let pattern = rule.pattern.as_bytes();
            pattern_matches_at(pattern, word, pos)
                && context_matches(&rule.context, word, pos, pattern.len(), &self.vowels)
        })
    }
}

impl Default for FallbackTranscriber {
    fn default() -> Self {
        Self::new(default_letter_rules())
    }
}

fn assign_stress(phonemes: &mut [Phoneme]) {
    let mut seen_vowel = false;
    for phoneme in phonemes.iter_mut().filter(|p| p.is_vowel()) {
        let stress = if seen_vowel {
            Stress::Unstressed
        } else {
            Stress::Primary
        };
        *phoneme = phoneme.with_stress(stress);
        seen_vowel = true;
    }
}
