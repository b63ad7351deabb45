//! Core phoneme types.
//!
//! - [`Arpabet`] - the 39 symbols of the CMU Pronouncing Dictionary
//! - [`Stress`] - lexical stress carried by vowel phonemes
//! - [`Phoneme`] - a symbol plus optional stress, written `AE1`, `K`
//! - [`PhonemeSequence`] - one pronunciation of a word

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

// ============================================================================
// Symbols
// ============================================================================

/// An ARPABET phoneme symbol as used by the CMU Pronouncing Dictionary.
///
/// The set is closed: 15 vowels and 24 consonants.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Arpabet {
    // Vowels
    AA,
    AE,
    AH,
    AO,
    AW,
    AY,
    EH,
    ER,
    EY,
    IH,
    IY,
    OW,
    OY,
    UH,
    UW,
    // Consonants
    B,
    CH,
    D,
    DH,
    F,
    G,
    HH,
    JH,
    K,
    L,
    M,
    N,
    NG,
    P,
    R,
    S,
    SH,
    T,
    TH,
    V,
    W,
    Y,
    Z,
    ZH,
}

impl Arpabet {
    /// Every symbol, vowels first.
    pub const ALL: [Arpabet; 39] = [
        Arpabet::AA,
        Arpabet::AE,
        Arpabet::AH,
        Arpabet::AO,
        Arpabet::AW,
        Arpabet::AY,
        Arpabet::EH,
        Arpabet::ER,
        Arpabet::EY,
        Arpabet::IH,
        Arpabet::IY,
        Arpabet::OW,
        Arpabet::OY,
        Arpabet::UH,
        Arpabet::UW,
        Arpabet::B,
        Arpabet::CH,
        Arpabet::D,
        Arpabet::DH,
        Arpabet::F,
        Arpabet::G,
        Arpabet::HH,
        Arpabet::JH,
        Arpabet::K,
        Arpabet::L,
        Arpabet::M,
        Arpabet::N,
        Arpabet::NG,
        Arpabet::P,
        Arpabet::R,
        Arpabet::S,
        Arpabet::SH,
        Arpabet::T,
        Arpabet::TH,
        Arpabet::V,
        Arpabet::W,
        Arpabet::Y,
        Arpabet::Z,
        Arpabet::ZH,
    ];

    /// The symbol text, e.g. `"AE"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Arpabet::AA => "AA",
            Arpabet::AE => "AE",
            Arpabet::AH => "AH",
            Arpabet::AO => "AO",
            Arpabet::AW => "AW",
            Arpabet::AY => "AY",
            Arpabet::EH => "EH",
            Arpabet::ER => "ER",
            Arpabet::EY => "EY",
            Arpabet::IH => "IH",
            Arpabet::IY => "IY",
            Arpabet::OW => "OW",
            Arpabet::OY => "OY",
            Arpabet::UH => "UH",
            Arpabet::UW => "UW",
            Arpabet::B => "B",
            Arpabet::CH => "CH",
            Arpabet::D => "D",
            Arpabet::DH => "DH",
            Arpabet::F => "F",
            Arpabet::G => "G",
            Arpabet::HH => "HH",
            Arpabet::JH => "JH",
            Arpabet::K => "K",
            Arpabet::L => "L",
            Arpabet::M => "M",
            Arpabet::N => "N",
            Arpabet::NG => "NG",
            Arpabet::P => "P",
            Arpabet::R => "R",
            Arpabet::S => "S",
            Arpabet::SH => "SH",
            Arpabet::T => "T",
            Arpabet::TH => "TH",
            Arpabet::V => "V",
            Arpabet::W => "W",
            Arpabet::Y => "Y",
            Arpabet::Z => "Z",
            Arpabet::ZH => "ZH",
        }
    }

    /// Returns true for the 15 vowel symbols.
    #[inline]
    pub fn is_vowel(self) -> bool {
        matches!(
            self,
            Arpabet::AA
                | Arpabet::AE
                | Arpabet::AH
                | Arpabet::AO
                | Arpabet::AW
                | Arpabet::AY
                | Arpabet::EH
                | Arpabet::ER
                | Arpabet::EY
                | Arpabet::IH
                | Arpabet::IY
                | Arpabet::OW
                | Arpabet::OY
                | Arpabet::UH
                | Arpabet::UW
        )
    }
}

impl fmt::Display for Arpabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arpabet {
    type Err = ParsePhonemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arpabet::ALL
            .iter()
            .copied()
            .find(|sym| sym.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParsePhonemeError::UnknownSymbol(s.to_string()))
    }
}

// ============================================================================
// Stress
// ============================================================================

/// Lexical stress level of a vowel phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stress {
    /// CMU digit `0`
    Unstressed,
    /// CMU digit `1`
    Primary,
    /// CMU digit `2`
    Secondary,
}

impl Stress {
    /// The CMU stress digit.
    pub fn digit(self) -> char {
        match self {
            Stress::Unstressed => '0',
            Stress::Primary => '1',
            Stress::Secondary => '2',
        }
    }

    /// Parse a CMU stress digit.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }
}

/// Errors produced when parsing phoneme text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePhonemeError {
    /// The symbol is not part of the ARPABET set.
    #[error("unknown phoneme symbol `{0}`")]
    UnknownSymbol(String),
    /// A consonant symbol carried a stress digit.
    #[error("consonant `{0}` cannot carry stress")]
    StressedConsonant(String),
    /// The sequence text contained no phonemes.
    #[error("empty phoneme sequence")]
    Empty,
}

// ============================================================================
// Phoneme
// ============================================================================

/// A single phoneme: an ARPABET symbol with optional stress.
///
/// Consonants never carry stress. Vowels read from the CMU dictionary always
/// do, but a bare vowel (`AE`) is accepted and kept without a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phoneme {
    symbol: Arpabet,
    stress: Option<Stress>,
}

impl Phoneme {
    /// A vowel phoneme with the given stress.
    pub const fn vowel(symbol: Arpabet, stress: Stress) -> Self {
        Self {
            symbol,
            stress: Some(stress),
        }
    }

    /// A phoneme without stress marker.
    pub const fn plain(symbol: Arpabet) -> Self {
        Self {
            symbol,
            stress: None,
        }
    }

    /// The ARPABET symbol.
    #[inline]
    pub fn symbol(&self) -> Arpabet {
        self.symbol
    }

    /// The stress marker, if any.
    #[inline]
    pub fn stress(&self) -> Option<Stress> {
        self.stress
    }

    /// Returns true if the symbol is a vowel.
    #[inline]
    pub fn is_vowel(&self) -> bool {
        self.symbol.is_vowel()
    }

    /// Same symbol with a different stress. Consonants are returned unchanged.
    pub fn with_stress(self, stress: Stress) -> Self {
        if self.symbol.is_vowel() {
            Self::vowel(self.symbol, stress)
        } else {
            self
        }
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol.as_str())?;
        if let Some(stress) = self.stress {
            write!(f, "{}", stress.digit())?;
        }
        Ok(())
    }
}

impl FromStr for Phoneme {
    type Err = ParsePhonemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, stress) = match s.chars().last().and_then(Stress::from_digit) {
            Some(stress) => (&s[..s.len() - 1], Some(stress)),
            None => (s, None),
        };
        let symbol: Arpabet = base.parse()?;
        if stress.is_some() && !symbol.is_vowel() {
            return Err(ParsePhonemeError::StressedConsonant(s.to_string()));
        }
        Ok(Self { symbol, stress })
    }
}

#[cfg(feature = "serialization")]
impl serde::Serialize for Phoneme {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serialization")]
impl<'de> serde::Deserialize<'de> for Phoneme {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Sequence
// ============================================================================

/// An ordered phoneme sequence: one pronunciation, or one syllable's share of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PhonemeSequence(Vec<Phoneme>);

impl PhonemeSequence {
    /// Create a sequence from phonemes.
    pub fn new(phonemes: Vec<Phoneme>) -> Self {
        Self(phonemes)
    }

    /// Number of vowel phonemes.
    pub fn vowel_count(&self) -> usize {
        self.0.iter().filter(|p| p.is_vowel()).count()
    }

    /// Positions of the vowel phonemes, in order.
    pub fn vowel_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_vowel())
            .map(|(i, _)| i)
            .collect()
    }

    /// Copy a contiguous range into a new sequence.
    pub fn slice(&self, range: std::ops::Range<usize>) -> Self {
        Self(self.0[range].to_vec())
    }

    /// Borrow the phonemes.
    pub fn as_slice(&self) -> &[Phoneme] {
        &self.0
    }
}

impl Deref for PhonemeSequence {
    type Target = [Phoneme];

    fn deref(&self) -> &[Phoneme] {
        &self.0
    }
}

impl FromIterator<Phoneme> for PhonemeSequence {
    fn from_iter<I: IntoIterator<Item = Phoneme>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PhonemeSequence {
    type Item = &'a Phoneme;
    type IntoIter = std::slice::Iter<'a, Phoneme>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PhonemeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, phoneme) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", phoneme)?;
        }
        Ok(())
    }
}

impl FromStr for PhonemeSequence {
    type Err = ParsePhonemeError;

    /// Parse whitespace-separated phonemes, e.g. `"IH0 G Z AE1 M P AH0 L"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let phonemes = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Phoneme>, _>>()?;
        if phonemes.is_empty() {
            return Err(ParsePhonemeError::Empty);
        }
        Ok(Self(phonemes))
    }
}
