//! End-to-end word analysis.
//!
//! An [`Analyzer`] resolves a word's pronunciation (dictionary first, letter
//! rules on a miss), splits the spelling into syllables and aligns the two.
//!
//! # Example
//!
//! ```rust
//! use libsyllable::analysis::{analyze, PronunciationSource};
//!
//! let result = analyze("Example").unwrap();
//! assert_eq!(result.source(), PronunciationSource::Dictionary);
//!
//! let parts: Vec<(&str, String)> = result
//!     .syllables()
//!     .iter()
//!     .map(|s| (s.text(), s.phonemes.to_string()))
//!     .collect();
//! assert_eq!(
//!     parts,
//!     vec![
//!         ("ex", "IH0 G".to_string()),
//!         ("am", "Z AE1 M".to_string()),
//!         ("ple", "P AH0 L".to_string()),
//!     ]
//! );
//! ```

use std::sync::OnceLock;

use crate::align::{Aligner, SyllableAnalysis};
use crate::dictionary::bundled::bundled;
use crate::dictionary::{CmuDictionary, PhonemeDictionary};
use crate::error::InvalidInput;
use crate::fallback::{default_letter_rules, FallbackTranscriber, LetterRule};
use crate::phoneme::PhonemeSequence;
use crate::syllable::{Syllabifier, SyllableRules};
use crate::word::Word;

/// Where a word's pronunciation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum PronunciationSource {
    /// Found in the pronunciation dictionary
    Dictionary,
    /// Derived from spelling by letter rules
    Fallback,
}

/// Transcription and syllable breakdown of one word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct AnalysisResult {
    word: Word,
    phonemes: PhonemeSequence,
    syllables: SyllableAnalysis,
    source: PronunciationSource,
}

impl AnalysisResult {
    /// The normalized word.
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The full pronunciation.
    pub fn phonemes(&self) -> &PhonemeSequence {
        &self.phonemes
    }

    /// Syllables paired with their phonemes.
    pub fn syllables(&self) -> &SyllableAnalysis {
        &self.syllables
    }

    /// Whether the pronunciation is from the dictionary or the letter rules.
    pub fn source(&self) -> PronunciationSource {
        self.source
    }

    /// IPA rendering of the full pronunciation.
    pub fn ipa(&self) -> String {
        self.phonemes.ipa()
    }
}

/// Word analyzer over a pronunciation dictionary.
///
/// Immutable after construction; share it freely between threads.
#[derive(Debug, Clone)]
pub struct Analyzer<D: PhonemeDictionary> {
    dictionary: D,
    syllabifier: Syllabifier,
    aligner: Aligner,
    transcriber: FallbackTranscriber,
}

impl<D: PhonemeDictionary> Analyzer<D> {
    /// Create an analyzer with the default syllable and letter rules.
    pub fn new(dictionary: D) -> Self {
        Self::with_rules(dictionary, SyllableRules::default(), None)
    }

    /// Create an analyzer with custom rule tables.
    ///
    /// `letter_rules` replaces the default fallback table when given. The
    /// letter-rule contexts share the vowel letters of `syllable_rules`.
    pub fn with_rules(
        dictionary: D,
        syllable_rules: SyllableRules,
        letter_rules: Option<Vec<LetterRule>>,
    ) -> Self {
        let vowels: Vec<u8> = syllable_rules
            .vowels
            .iter()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|&c| c as u8)
            .collect();
        let transcriber = FallbackTranscriber::with_vowels(
            letter_rules.unwrap_or_else(default_letter_rules),
            &vowels,
        );
        Self {
            dictionary,
            syllabifier: Syllabifier::new(syllable_rules),
            aligner: Aligner::new(),
            transcriber,
        }
    }

    /// The dictionary consulted first.
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// The syllabifier in use.
    pub fn syllabifier(&self) -> &Syllabifier {
        &self.syllabifier
    }

    /// The fallback transcriber in use.
    pub fn transcriber(&self) -> &FallbackTranscriber {
        &self.transcriber
    }

    /// Analyze raw input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] when the input is empty or not purely
    /// alphabetic. Every valid word produces a result.
    pub fn analyze(&self, raw: &str) -> Result<AnalysisResult, InvalidInput> {
        let word = Word::parse(raw)?;
        Ok(self.analyze_word(word))
    }

    /// Analyze an already normalized word.
    pub fn analyze_word(&self, word: Word) -> AnalysisResult {
        let (phonemes, source) = self.pronounce(&word);
        let syllables = self
            .aligner
            .align(self.syllabifier.split(&word), &phonemes);

        AnalysisResult {
            word,
            phonemes,
            syllables,
            source,
        }
    }

    /// Resolve the pronunciation of `word`.
    pub fn pronounce(&self, word: &Word) -> (PhonemeSequence, PronunciationSource) {
        match self.dictionary.lookup(word) {
            Some(seq) => (seq.clone(), PronunciationSource::Dictionary),
            None => {
                tracing::debug!(word = %word, "dictionary miss, using letter rules");
                (self.transcriber.transcribe(word), PronunciationSource::Fallback)
            }
        }
    }
}

#[cfg(feature = "serialization")]
impl Analyzer<CmuDictionary> {
    /// Build an analyzer from configuration.
    ///
    /// Without a `dictionary` path the bundled dictionary is used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dictionary`](crate::config::ConfigError::Dictionary)
    /// if the configured dictionary file cannot be loaded.
    pub fn from_config(
        config: crate::config::AnalyzerConfig,
    ) -> Result<Self, crate::config::ConfigError> {
        let dictionary = match &config.dictionary {
            Some(path) => CmuDictionary::from_path(path).map_err(|source| {
                crate::config::ConfigError::Dictionary {
                    path: path.clone(),
                    source,
                }
            })?,
            None => bundled().clone(),
        };
        tracing::debug!(entries = dictionary.len(), "dictionary ready");

        Ok(Self::with_rules(
            dictionary,
            config.syllable_rules.unwrap_or_default(),
            config.letter_rules,
        ))
    }
}

/// The process-wide analyzer over the bundled dictionary.
pub fn default_analyzer() -> &'static Analyzer<&'static CmuDictionary> {
    static ANALYZER: OnceLock<Analyzer<&'static CmuDictionary>> = OnceLock::new();
    ANALYZER.get_or_init(|| Analyzer::new(bundled()))
}

/// Analyze raw input with the bundled dictionary and default rules.
///
/// # Errors
///
/// Returns [`InvalidInput`] when the input is empty or not purely alphabetic.
pub fn analyze(raw: &str) -> Result<AnalysisResult, InvalidInput> {
    default_analyzer().analyze(raw)
}
