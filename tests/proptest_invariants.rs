//! Property-based tests for analysis invariants using proptest
//!
//! Every alphabetic word must produce syllables that spell the word and
//! phoneme blocks that concatenate to its pronunciation, whichever path
//! (dictionary or letter rules) and alignment strategy was used.

use libsyllable::prelude::*;
use proptest::prelude::*;

// Strategy for generating lowercase ASCII words
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,15}"
}

// Strategy for words drawn from the bundled dictionary
fn known_word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "example", "hello", "water", "table", "paper", "business", "every", "rhythm", "syllable",
        "little", "nation", "people", "fire", "through", "the", "a", "tomato",
    ])
    .prop_map(String::from)
}

fn check_invariants(word: &str, result: &AnalysisResult) -> Result<(), TestCaseError> {
    let syllables = result.syllables();
    prop_assert!(!syllables.is_empty());

    let text: String = syllables.iter().map(|s| s.text()).collect();
    prop_assert_eq!(text.as_str(), word);

    let mut expected_start = 0;
    for syllable in syllables {
        prop_assert!(!syllable.text().is_empty());
        prop_assert_eq!(syllable.syllable.start(), expected_start);
        expected_start = syllable.syllable.end();
    }
    prop_assert_eq!(expected_start, word.len());

    prop_assert_eq!(&syllables.phonemes(), result.phonemes());

    if syllables.strategy() == AlignmentStrategy::Nucleus {
        for syllable in syllables {
            prop_assert_eq!(syllable.phonemes.vowel_count(), 1);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_any_word_satisfies_invariants(word in word_strategy()) {
        let result = analyze(&word).unwrap();
        check_invariants(&word, &result)?;
    }

    #[test]
    fn prop_dictionary_words_satisfy_invariants(word in known_word_strategy()) {
        let result = analyze(&word).unwrap();
        prop_assert_eq!(result.source(), PronunciationSource::Dictionary);
        check_invariants(&word, &result)?;
    }

    #[test]
    fn prop_fallback_words_satisfy_invariants(word in word_strategy()) {
        let analyzer = Analyzer::new(CmuDictionary::default());
        let result = analyzer.analyze(&word).unwrap();
        prop_assert_eq!(result.source(), PronunciationSource::Fallback);
        prop_assert!(!result.phonemes().is_empty());
        check_invariants(&word, &result)?;
    }

    #[test]
    fn prop_analysis_is_deterministic(word in word_strategy()) {
        prop_assert_eq!(analyze(&word).unwrap(), analyze(&word).unwrap());
    }

    #[test]
    fn prop_case_and_padding_ignored(word in word_strategy()) {
        let padded = format!("  {} ", word.to_uppercase());
        prop_assert_eq!(analyze(&padded).unwrap(), analyze(&word).unwrap());
    }

    #[test]
    fn prop_fallback_stresses_first_vowel_only(word in word_strategy()) {
        let seq = FallbackTranscriber::default().transcribe(&Word::parse(&word).unwrap());
        let stresses: Vec<Stress> = seq.iter().filter_map(|p| p.stress()).collect();
        if let Some((first, rest)) = stresses.split_first() {
            prop_assert_eq!(*first, Stress::Primary);
            prop_assert!(rest.iter().all(|s| *s == Stress::Unstressed));
        }
    }

    #[test]
    fn prop_non_alphabetic_rejected(
        prefix in "[a-z]{0,5}",
        bad in "[0-9_'!.-]",
        suffix in "[a-z]{0,5}",
    ) {
        let raw = format!("{}{}{}", prefix, bad, suffix);
        let is_non_alphabetic = matches!(
            analyze(&raw),
            Err(InvalidInput::NonAlphabetic { .. })
        );
        prop_assert!(is_non_alphabetic);
    }
}
