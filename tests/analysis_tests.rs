//! Integration tests for end-to-end word analysis

use std::sync::Arc;
use std::thread;

use libsyllable::prelude::*;

fn breakdown(result: &AnalysisResult) -> Vec<(String, String)> {
    result
        .syllables()
        .iter()
        .map(|s| (s.text().to_string(), s.phonemes.to_string()))
        .collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(t, p)| (t.to_string(), p.to_string()))
        .collect()
}

#[test]
fn test_example_word() {
    let result = analyze("example").unwrap();
    assert_eq!(result.word().as_str(), "example");
    assert_eq!(result.source(), PronunciationSource::Dictionary);
    assert_eq!(result.phonemes().to_string(), "IH0 G Z AE1 M P AH0 L");
    assert_eq!(
        breakdown(&result),
        pairs(&[("ex", "IH0 G"), ("am", "Z AE1 M"), ("ple", "P AH0 L")])
    );
    assert_eq!(result.ipa(), "ɪgzˈæmpəl");
}

#[test]
fn test_single_letter_word() {
    let result = analyze("a").unwrap();
    assert_eq!(breakdown(&result), pairs(&[("a", "AH0")]));
    assert_eq!(result.syllables().strategy(), AlignmentStrategy::Nucleus);
}

#[test]
fn test_common_words() {
    let cases: &[(&str, &[(&str, &str)])] = &[
        ("hello", &[("hel", "HH AH0 L"), ("lo", "OW1")]),
        ("water", &[("wa", "W AO1 T"), ("ter", "ER0")]),
        ("little", &[("lit", "L IH1 T"), ("tle", "AH0 L")]),
        ("business", &[("busi", "B IH1 Z"), ("ness", "N AH0 S")]),
        (
            "syllable",
            &[("syl", "S IH1 L"), ("la", "AH0 B"), ("ble", "AH0 L")],
        ),
    ];

    for (word, expected) in cases {
        let result = analyze(word).unwrap();
        assert_eq!(breakdown(&result), pairs(expected), "word: {}", word);
    }
}

#[test]
fn test_first_pronunciation_is_used() {
    let result = analyze("read").unwrap();
    assert_eq!(result.phonemes().to_string(), "R IY1 D");
}

#[test]
fn test_input_is_normalized() {
    let upper = analyze("  HeLLo\t").unwrap();
    let lower = analyze("hello").unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn test_invalid_input() {
    assert_eq!(analyze(""), Err(InvalidInput::Empty));
    assert_eq!(analyze(" \n "), Err(InvalidInput::Empty));
    assert!(matches!(
        analyze("123"),
        Err(InvalidInput::NonAlphabetic { position: 0, found: '1', .. })
    ));
    assert!(matches!(
        analyze("don't"),
        Err(InvalidInput::NonAlphabetic { position: 3, found: '\'', .. })
    ));
    assert!(matches!(
        analyze("two words"),
        Err(InvalidInput::NonAlphabetic { found: ' ', .. })
    ));
    assert!(matches!(
        analyze("café"),
        Err(InvalidInput::NonAlphabetic { found: 'é', .. })
    ));
}

#[test]
fn test_novel_word_uses_fallback() {
    let result = analyze("zorblax").unwrap();
    assert_eq!(result.source(), PronunciationSource::Fallback);
    assert!(!result.phonemes().is_empty());
    assert_eq!(&result.syllables().phonemes(), result.phonemes());

    let text: String = result.syllables().iter().map(|s| s.text()).collect();
    assert_eq!(text, "zorblax");
}

#[test]
fn test_irregular_alignment_keeps_invariants() {
    // One orthographic nucleus, two vowel phonemes
    let result = analyze("rhythm").unwrap();
    assert_eq!(
        result.syllables().strategy(),
        AlignmentStrategy::Proportional
    );
    assert_eq!(&result.syllables().phonemes(), result.phonemes());
}

#[test]
fn test_vowel_team_words_align_by_nucleus() {
    let people = analyze("people").unwrap();
    assert_eq!(people.syllables().strategy(), AlignmentStrategy::Nucleus);
    assert_eq!(
        breakdown(&people),
        pairs(&[("peo", "P IY1 P"), ("ple", "AH0 L")])
    );

    let language = analyze("language").unwrap();
    assert_eq!(language.syllables().strategy(), AlignmentStrategy::Nucleus);
    assert_eq!(
        breakdown(&language),
        pairs(&[("lan", "L AE1 NG G"), ("guage", "W AH0 JH")])
    );

    let video = analyze("video").unwrap();
    assert_eq!(video.syllables().strategy(), AlignmentStrategy::Nucleus);
    assert_eq!(video.syllables().len(), 3);
}

#[test]
fn test_analysis_is_deterministic() {
    for word in ["example", "hello", "zorblax", "rhythm", "a"] {
        assert_eq!(analyze(word).unwrap(), analyze(word).unwrap());
    }
}

#[test]
fn test_custom_dictionary_analyzer() {
    let dict: CmuDictionary = "tomato T AH0 M EY1 T OW2\ntomato(2) T AH0 M AA1 T OW2\n"
        .parse()
        .unwrap();
    let analyzer = Analyzer::new(dict);

    let result = analyzer.analyze("tomato").unwrap();
    assert_eq!(result.source(), PronunciationSource::Dictionary);
    assert_eq!(
        breakdown(&result),
        pairs(&[("to", "T AH0 M"), ("ma", "EY1 T"), ("to", "OW2")])
    );

    // The bundled entries are not consulted by a custom analyzer
    let miss = analyzer.analyze("example").unwrap();
    assert_eq!(miss.source(), PronunciationSource::Fallback);
}

#[test]
fn test_shared_analyzer_across_threads() {
    let dict: CmuDictionary = "paper P EY1 P ER0\n".parse().unwrap();
    let analyzer = Arc::new(Analyzer::new(dict));
    let expected = analyzer.analyze("paper").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let analyzer = Arc::clone(&analyzer);
            thread::spawn(move || {
                (0..50)
                    .map(|_| analyzer.analyze("paper").unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, expected);
        }
    }
}

#[test]
fn test_global_analyzer_across_threads() {
    let handles: Vec<_> = ["hello", "water", "table", "nation"]
        .into_iter()
        .map(|word| thread::spawn(move || analyze(word).unwrap()))
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.source(), PronunciationSource::Dictionary);
    }
}
