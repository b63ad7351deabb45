//! Syllable boundary placement.
//!
//! # Algorithm
//!
//! 1. Classify every letter as vowel or consonant ([`SyllableRules::vowels`],
//!    semivowels, consonantal pairs).
//! 2. Group vowel runs into nuclei: a run inside a bound unit is one nucleus,
//!    otherwise vowel teams are matched longest-first from the left and any
//!    remaining vowel stands alone.
//! 3. Drop a silent final letter's nucleus when the word has more than one
//!    nucleus, unless the word ends in a consonant + syllabic ending (`-ble`).
//! 4. Between two nuclei, the following syllable takes the longest suffix of
//!    the consonant cluster that is a permitted onset; a syllabic ending always
//!    starts at the consonant before it.
//!
//! A word without any nucleus is a single syllable.

use std::ops::Range;

use rustc_hash::{FxHashMap, FxHashSet};

use super::rules::SyllableRules;
use crate::word::Word;

/// A contiguous span of a word.
///
/// Offsets are character offsets into the normalized word; the spans
/// returned by [`Syllabifier::split`] partition the word exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Syllable {
    text: String,
    start: usize,
    end: usize,
}

impl Syllable {
    fn from_span(word: &str, span: Range<usize>) -> Self {
        Self {
            text: word[span.clone()].to_string(),
            start: span.start,
            end: span.end,
        }
    }

    /// The syllable's letters.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Offset of the first character.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last character.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// `start..end`
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Splits words into syllables according to a [`SyllableRules`] table.
#[derive(Debug, Clone)]
pub struct Syllabifier {
    rules: SyllableRules,
    teams: Vec<Vec<u8>>,
    onsets: FxHashSet<Vec<u8>>,
    exceptions: FxHashMap<Box<str>, Vec<usize>>,
}

impl Default for Syllabifier {
    fn default() -> Self {
        Self::new(SyllableRules::default())
    }
}

impl Syllabifier {
    /// Build a syllabifier from rule tables.
    ///
    /// Exceptions whose parts do not spell the word are dropped with a warning.
    pub fn new(rules: SyllableRules) -> Self {
        let mut teams: Vec<Vec<u8>> = rules
            .vowel_teams
            .iter()
            .map(|t| t.to_ascii_lowercase().into_bytes())
            .filter(|t| !t.is_empty())
            .collect();
        teams.sort_by(|a, b| b.len().cmp(&a.len()));

        let onsets = rules
            .onsets
            .iter()
            .map(|o| o.to_ascii_lowercase().into_bytes())
            .collect();

        let mut exceptions = FxHashMap::default();
        for (word, parts) in &rules.exceptions {
            if parts.iter().any(String::is_empty) || parts.concat() != *word {
                tracing::warn!(word = %word, ?parts, "ignoring syllable exception that does not spell the word");
                continue;
            }
            let bounds = parts
                .iter()
                .scan(0, |acc, part| {
                    *acc += part.len();
                    Some(*acc)
                })
                .take(parts.len().saturating_sub(1))
                .collect();
            exceptions.insert(word.to_ascii_lowercase().into_boxed_str(), bounds);
        }

        Self {
            rules,
            teams,
            onsets,
            exceptions,
        }
    }

    /// The rule tables in use.
    pub fn rules(&self) -> &SyllableRules {
        &self.rules
    }

    /// Split `word` into syllables. Never empty.
    pub fn split(&self, word: &Word) -> Vec<Syllable> {
        let text = word.as_str();
        let bounds = match self.exceptions.get(text) {
            Some(bounds) => bounds.clone(),
            None => self.boundaries(text),
        };

        let mut syllables = Vec::with_capacity(bounds.len() + 1);
        let mut start = 0;
        for &end in bounds.iter().chain(std::iter::once(&text.len())) {
            syllables.push(Syllable::from_span(text, start..end));
            start = end;
        }
        syllables
    }

    /// Vowel nuclei of `word` after silent-letter merging, as letter spans.
    pub fn nuclei(&self, word: &Word) -> Vec<Range<usize>> {
        let bytes = word.as_bytes();
        let mask = self.vowel_mask(bytes);
        self.merge_silent_final(bytes, &mask, self.raw_nuclei(word.as_str(), &mask))
    }

    fn boundaries(&self, text: &str) -> Vec<usize> {
        let bytes = text.as_bytes();
        let mask = self.vowel_mask(bytes);
        let nuclei = self.merge_silent_final(bytes, &mask, self.raw_nuclei(text, &mask));
        if nuclei.len() < 2 {
            return Vec::new();
        }

        let syllabic_start = self.syllabic_ending_start(bytes, &mask);
        let last = nuclei.len() - 1;

        nuclei
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let (prev, next) = (&pair[0], &pair[1]);
                let cluster = &bytes[prev.end..next.start];
                let onset = (1..=cluster.len())
                    .rev()
                    .find(|&len| self.onsets.contains(&cluster[cluster.len() - len..]))
                    .unwrap_or(0);
                let boundary = next.start - onset;
                match syllabic_start {
                    Some(c) if i + 1 == last && c >= prev.end => boundary.min(c),
                    _ => boundary,
                }
            })
            .collect()
    }

    fn vowel_mask(&self, bytes: &[u8]) -> Vec<bool> {
        let is_plain_vowel = |b: u8| self.rules.vowels.contains(&(b as char));
        let mut mask: Vec<bool> = bytes
            .iter()
            .enumerate()
            .map(|(i, &b)| {
                if is_plain_vowel(b) {
                    true
                } else if self.rules.semivowels.contains(&(b as char)) {
                    i > 0 && !bytes.get(i + 1).copied().is_some_and(is_plain_vowel)
                } else {
                    false
                }
            })
            .collect();

        for seq in &self.rules.consonantal_pairs {
            let seq = seq.as_bytes();
            if seq.len() < 2 {
                continue;
            }
            for i in 1..bytes.len() {
                if bytes[i - 1..].starts_with(seq) {
                    mask[i] = false;
                }
            }
        }
        mask
    }

    fn raw_nuclei(&self, text: &str, mask: &[bool]) -> Vec<Range<usize>> {
        let bytes = text.as_bytes();
        let mut nuclei = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            if !mask[i] {
                i += 1;
                continue;
            }
            let mut j = i;
            while j < bytes.len() && mask[j] {
                j += 1;
            }

            if j - i > 1 && self.in_bound_unit(text, i..j) {
                nuclei.push(i..j);
            } else {
                let mut k = i;
                while k < j {
                    let len = self.team_len_at(bytes, k, j);
                    nuclei.push(k..k + len);
                    k += len;
                }
            }
            i = j;
        }
        nuclei
    }

    fn merge_silent_final(
        &self,
        bytes: &[u8],
        mask: &[bool],
        mut nuclei: Vec<Range<usize>>,
    ) -> Vec<Range<usize>> {
        let n = bytes.len();
        if nuclei.len() < 2 || n < 2 || self.syllabic_ending_start(bytes, mask).is_some() {
            return nuclei;
        }
        let silent = nuclei.last().is_some_and(|last| {
            last.start == n - 1
                && last.end == n
                && self.rules.silent_finals.contains(&(bytes[n - 1] as char))
                && !mask[n - 2]
        });
        if silent {
            nuclei.pop();
        }
        nuclei
    }

    /// Offset of the consonant that opens a final syllabic ending, if any.
    fn syllabic_ending_start(&self, bytes: &[u8], mask: &[bool]) -> Option<usize> {
        self.rules.syllabic_endings.iter().find_map(|ending| {
            let ending = ending.as_bytes();
            if ending.is_empty() || bytes.len() <= ending.len() || !bytes.ends_with(ending) {
                return None;
            }
            let c = bytes.len() - ending.len() - 1;
            (!mask[c]).then_some(c)
        })
    }

    fn in_bound_unit(&self, text: &str, run: Range<usize>) -> bool {
        self.rules.bound_units.iter().any(|unit| {
            !unit.is_empty()
                && text
                    .match_indices(unit.as_str())
                    .any(|(p, _)| p <= run.start && run.end <= p + unit.len())
        })
    }

    fn team_len_at(&self, bytes: &[u8], k: usize, run_end: usize) -> usize {
        self.teams
            .iter()
            .find(|team| k + team.len() <= run_end && bytes[k..k + team.len()] == team[..])
            .map_or(1, |team| team.len())
    }
}
