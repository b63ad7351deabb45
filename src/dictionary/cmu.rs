//! CMU Pronouncing Dictionary backend.
//!
//! Reads the plain-text CMU format, one pronunciation per line:
//!
//! ```text
//! ;;; comment
//! example IH0 G Z AE1 M P AH0 L
//! read R IY1 D
//! read(2) R EH1 D
//! ```
//!
//! Both published layouts are accepted: lowercase `cmudict.dict` with single
//! spaces and the older uppercase `cmudict-0.7b` with two-space separators.
//! A trailing `# comment` on an entry line is ignored.
//!
//! # Pronunciation priority
//!
//! The base entry comes first, then alternates in ascending variant number.
//! Lines with the same variant number keep file order.
//!
//! # Example
//!
//! ```rust
//! use libsyllable::dictionary::{CmuDictionary, PhonemeDictionary};
//! use libsyllable::word::Word;
//!
//! let dict: CmuDictionary = "read(2) R EH1 D\nread R IY1 D\n".parse().unwrap();
//! let read = Word::parse("read").unwrap();
//! assert_eq!(dict.lookup(&read).unwrap().to_string(), "R IY1 D");
//! assert_eq!(dict.pronunciations(&read).len(), 2);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::PhonemeDictionary;
use crate::error::{DictionaryError, Result};
use crate::phoneme::PhonemeSequence;
use crate::word::Word;

/// Most words have a single pronunciation.
type Pronunciations = SmallVec<[PhonemeSequence; 1]>;

/// Immutable hash-backed pronunciation dictionary.
#[derive(Debug, Clone, Default)]
pub struct CmuDictionary {
    entries: FxHashMap<Box<str>, Pronunciations>,
}

impl CmuDictionary {
    /// Parse a dictionary from any reader.
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::Io`] if reading fails
    /// - [`DictionaryError::MalformedEntry`] for a headword without phonemes
    /// - [`DictionaryError::UnknownSymbol`] for a symbol outside ARPABET
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let buf_reader = BufReader::new(reader);
        let mut staged: FxHashMap<Box<str>, Vec<(u32, PhonemeSequence)>> = FxHashMap::default();

        for (index, line) in buf_reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let Some((headword, variant, phonemes)) = parse_line(&line, line_no)? else {
                continue;
            };

            let word = match Word::parse(headword) {
                Ok(word) => word,
                Err(err) => {
                    tracing::debug!(line = line_no, headword, error = %err, "skipping entry");
                    continue;
                }
            };

            staged
                .entry(word.as_str().into())
                .or_default()
                .push((variant, phonemes));
        }

        let entries = staged
            .into_iter()
            .map(|(word, mut variants)| {
                variants.sort_by_key(|(variant, _)| *variant);
                let prons: Pronunciations = variants.into_iter().map(|(_, seq)| seq).collect();
                (word, prons)
            })
            .collect();

        Ok(Self { entries })
    }

    /// Load a dictionary file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Iterate over all headwords (unordered).
    pub fn headwords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_ref())
    }

    /// Total number of pronunciations across all headwords.
    pub fn pronunciation_count(&self) -> usize {
        self.entries.values().map(|p| p.len()).sum()
    }
}

/// Split one line into headword, variant number and phonemes.
///
/// Returns `Ok(None)` for blank and comment lines.
fn parse_line(line: &str, line_no: usize) -> Result<Option<(&str, u32, PhonemeSequence)>> {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let content = content.trim();
    if content.is_empty() || content.starts_with(";;;") {
        return Ok(None);
    }

    let mut tokens = content.split_whitespace();
    let Some(head) = tokens.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = tokens.collect();
    if rest.is_empty() {
        return Err(DictionaryError::MalformedEntry {
            line: line_no,
            content: line.to_string(),
        });
    }

    let (headword, variant) = split_variant(head);
    let phonemes = rest
        .join(" ")
        .parse::<PhonemeSequence>()
        .map_err(|source| DictionaryError::UnknownSymbol {
            line: line_no,
            source,
        })?;

    Ok(Some((headword, variant, phonemes)))
}

/// `read(2)` -> (`read`, 2); `read` -> (`read`, 1).
fn split_variant(head: &str) -> (&str, u32) {
    if let Some(stripped) = head.strip_suffix(')') {
        if let Some((base, num)) = stripped.rsplit_once('(') {
            if let Ok(n) = num.parse::<u32>() {
                return (base, n);
            }
        }
    }
    (head, 1)
}

impl FromStr for CmuDictionary {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

impl FromIterator<(Word, PhonemeSequence)> for CmuDictionary {
    /// Build from `(word, pronunciation)` pairs; repeated words append
    /// lower-priority alternates.
    fn from_iter<I: IntoIterator<Item = (Word, PhonemeSequence)>>(iter: I) -> Self {
        let mut entries: FxHashMap<Box<str>, Pronunciations> = FxHashMap::default();
        for (word, seq) in iter {
            entries.entry(word.as_str().into()).or_default().push(seq);
        }
        Self { entries }
    }
}

impl PhonemeDictionary for CmuDictionary {
    fn pronunciations(&self, word: &Word) -> &[PhonemeSequence] {
        self.entries
            .get(word.as_str())
            .map(|p| p.as_slice())
            .unwrap_or(&[])
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
