//! Letter classes and cluster tables for syllabification.
//!
//! # Tables
//!
//! - `vowels` - letters that always form a nucleus
//! - `semivowels` - letters that are vowels unless word-initial or followed by a vowel (`y`)
//! - `consonantal_pairs` - sequences whose second letter is consonantal (`qu`, `gua`)
//! - `vowel_teams` - vowel digraphs/trigraphs that form a single nucleus
//! - `bound_units` - suffix units whose vowel run is a single nucleus (`tion`)
//! - `onsets` - consonant clusters permitted at the start of a syllable
//! - `syllabic_endings` - consonant + ending pairs that keep their own nucleus (`-ble`)
//! - `silent_finals` - final letters that merge into the preceding syllable (`e`)
//! - `exceptions` - whole-word overrides

use std::collections::BTreeMap;

/// Syllabification tables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SyllableRules {
    /// Letters that always form a nucleus
    pub vowels: Vec<char>,
    /// Vowels except word-initially or directly before a vowel letter
    pub semivowels: Vec<char>,
    /// Sequences whose second letter is consonantal (`qu` in `queen`, `gua` in `language`)
    pub consonantal_pairs: Vec<String>,
    /// Vowel sequences that form one nucleus
    pub vowel_teams: Vec<String>,
    /// Units whose interior vowel run forms one nucleus
    pub bound_units: Vec<String>,
    /// Consonant clusters that may open a syllable
    pub onsets: Vec<String>,
    /// Word endings that form their own syllable after a consonant
    pub syllabic_endings: Vec<String>,
    /// Final letters that do not form a syllable after a consonant
    pub silent_finals: Vec<char>,
    /// Word -> syllable overrides
    pub exceptions: BTreeMap<String, Vec<String>>,
}

impl Default for SyllableRules {
    fn default() -> Self {
        Self {
            vowels: vec!['a', 'e', 'i', 'o', 'u'],
            semivowels: vec!['y'],
            consonantal_pairs: strings(&["qu", "gua"]),
            vowel_teams: strings(VOWEL_TEAMS),
            bound_units: strings(BOUND_UNITS),
            onsets: default_onsets(),
            syllabic_endings: strings(&["le"]),
            silent_finals: vec!['e'],
            exceptions: default_exceptions(),
        }
    }
}

// ============================================================================
// Default tables
// ============================================================================

const VOWEL_TEAMS: &[&str] = &[
    "eau", "ai", "au", "ay", "ea", "ee", "ei", "eo", "eu", "ey", "ie", "oa", "oe", "oi", "oo",
    "ou", "oy", "ue", "ui",
];

const BOUND_UNITS: &[&str] = &[
    "tion", "sion", "cian", "tial", "cial", "cious", "tious", "geous",
];

/// Single consonants (all but `x`) plus the blend list.
const ONSET_CLUSTERS: &[&str] = &[
    "bl", "br", "ch", "cl", "cr", "dr", "dw", "fl", "fr", "gl", "gr", "gu", "kn", "ph", "pl", "pr", "qu",
    "sc", "sh", "sk", "sl", "sm", "sn", "sp", "st", "sw", "th", "tr", "tw", "wh", "wr", "chr",
    "phr", "sch", "scr", "shr", "spl", "spr", "squ", "str", "thr",
];

fn default_onsets() -> Vec<String> {
    "bcdfghjklmnpqrstvwyz"
        .chars()
        .map(String::from)
        .chain(ONSET_CLUSTERS.iter().map(|s| s.to_string()))
        .collect()
}

/// Words whose spelling groups vowels differently from their spoken syllables.
fn default_exceptions() -> BTreeMap<String, Vec<String>> {
    [
        ("business", &["busi", "ness"][..]),
        ("chocolate", &["choc", "olate"][..]),
        ("evening", &["eve", "ning"][..]),
        ("interesting", &["in", "teres", "ting"][..]),
        ("vegetable", &["vege", "ta", "ble"][..]),
        ("video", &["vi", "de", "o"][..]),
    ]
    .into_iter()
    .map(|(word, parts)| (word.to_string(), strings(parts)))
    .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_onsets_exclude_x() {
        let rules = SyllableRules::default();
        assert!(!rules.onsets.iter().any(|o| o == "x"));
        assert!(rules.onsets.iter().any(|o| o == "pl"));
        assert!(rules.onsets.iter().any(|o| o == "str"));
    }

    #[test]
    fn test_default_exceptions_concatenate() {
        for (word, parts) in SyllableRules::default().exceptions {
            assert_eq!(parts.concat(), word);
        }
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_partial_json_keeps_defaults() {
        let rules: SyllableRules = serde_json::from_str(r#"{"silent_finals": []}"#).unwrap();
        assert!(rules.silent_finals.is_empty());
        assert_eq!(rules.vowels, SyllableRules::default().vowels);
    }
}
