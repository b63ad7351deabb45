//! ARPABET to IPA rendering.
//!
//! Primary stress is written `ˈ` and secondary stress `ˌ`, prefixed to the
//! vowel itself rather than to the syllable. `AH` and `ER` have distinct
//! reduced forms when unstressed (`ə`, `ər`).

use super::types::{Arpabet, Phoneme, PhonemeSequence, Stress};

/// IPA for a bare symbol, in its stressed quality.
pub fn symbol_ipa(symbol: Arpabet) -> &'static str {
    match symbol {
        Arpabet::AA => "ɑ",
        Arpabet::AE => "æ",
        Arpabet::AH => "ʌ",
        Arpabet::AO => "ɔ",
        Arpabet::AW => "aʊ",
        Arpabet::AY => "aɪ",
        Arpabet::EH => "ɛ",
        Arpabet::ER => "ɜr",
        Arpabet::EY => "eɪ",
        Arpabet::IH => "ɪ",
        Arpabet::IY => "i",
        Arpabet::OW => "oʊ",
        Arpabet::OY => "ɔɪ",
        Arpabet::UH => "ʊ",
        Arpabet::UW => "u",
        Arpabet::B => "b",
        Arpabet::CH => "tʃ",
        Arpabet::D => "d",
        Arpabet::DH => "ð",
        Arpabet::F => "f",
        Arpabet::G => "g",
        Arpabet::HH => "h",
        Arpabet::JH => "dʒ",
        Arpabet::K => "k",
        Arpabet::L => "l",
        Arpabet::M => "m",
        Arpabet::N => "n",
        Arpabet::NG => "ŋ",
        Arpabet::P => "p",
        Arpabet::R => "r",
        Arpabet::S => "s",
        Arpabet::SH => "ʃ",
        Arpabet::T => "t",
        Arpabet::TH => "θ",
        Arpabet::V => "v",
        Arpabet::W => "w",
        Arpabet::Y => "j",
        Arpabet::Z => "z",
        Arpabet::ZH => "ʒ",
    }
}

impl Phoneme {
    /// Render this phoneme in IPA, including its stress mark.
    pub fn ipa(&self) -> String {
        let base = match (self.symbol(), self.stress()) {
            (Arpabet::AH, Some(Stress::Unstressed)) => "ə",
            (Arpabet::ER, Some(Stress::Unstressed)) => "ər",
            (symbol, _) => symbol_ipa(symbol),
        };
        match self.stress() {
            Some(Stress::Primary) => format!("ˈ{}", base),
            Some(Stress::Secondary) => format!("ˌ{}", base),
            _ => base.to_string(),
        }
    }
}

impl PhonemeSequence {
    /// Render the whole sequence in IPA.
    pub fn ipa(&self) -> String {
        self.iter().map(Phoneme::ipa).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_vowels() {
        let schwa: Phoneme = "AH0".parse().unwrap();
        let strut: Phoneme = "AH1".parse().unwrap();
        assert_eq!(schwa.ipa(), "ə");
        assert_eq!(strut.ipa(), "ˈʌ");

        let er0: Phoneme = "ER0".parse().unwrap();
        let er2: Phoneme = "ER2".parse().unwrap();
        assert_eq!(er0.ipa(), "ər");
        assert_eq!(er2.ipa(), "ˌɜr");
    }

    #[test]
    fn test_sequence_ipa() {
        let seq: PhonemeSequence = "IH0 G Z AE1 M P AH0 L".parse().unwrap();
        assert_eq!(seq.ipa(), "ɪgzˈæmpəl");

        let church: PhonemeSequence = "CH ER1 CH".parse().unwrap();
        assert_eq!(church.ipa(), "tʃˈɜrtʃ");
    }

    #[test]
    fn test_every_symbol_has_ipa() {
        for sym in Arpabet::ALL {
            assert!(!symbol_ipa(sym).is_empty(), "{} has no IPA", sym);
        }
    }
}
