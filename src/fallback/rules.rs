//! Default English letter-to-sound table.
//!
//! Rules are listed roughly longest first; the transcriber re-sorts by
//! pattern length, so order only matters between rules of equal length.
//! Vowels are written unstressed here and stressed during transcription.

use super::types::{Context, LetterRule};
use crate::phoneme::{Arpabet, Phoneme, Stress};

use Arpabet::*;

const fn c(symbol: Arpabet) -> Phoneme {
    Phoneme::plain(symbol)
}

const fn v(symbol: Arpabet) -> Phoneme {
    Phoneme::vowel(symbol, Stress::Unstressed)
}

fn rule(pattern: &str, context: Context, phonemes: &[Phoneme]) -> LetterRule {
    LetterRule::new(pattern, context, phonemes)
}

fn any(pattern: &str, phonemes: &[Phoneme]) -> LetterRule {
    rule(pattern, Context::Anywhere, phonemes)
}

/// Single-letter sound used when no rule applies.
///
/// Every lowercase ASCII letter has a non-empty default; other bytes map to
/// nothing.
///
/// ```rust
/// use libsyllable::fallback::default_phonemes;
///
/// assert_eq!(default_phonemes(b'x').len(), 2);
/// assert!(default_phonemes(b'7').is_empty());
/// ```
pub fn default_phonemes(letter: u8) -> &'static [Phoneme] {
    if letter.is_ascii_lowercase() {
        LETTER_DEFAULTS[(letter - b'a') as usize]
    } else {
        &[]
    }
}

const LETTER_DEFAULTS: [&[Phoneme]; 26] = [
    &[v(AE)],
    &[c(B)],
    &[c(K)],
    &[c(D)],
    &[v(EH)],
    &[c(F)],
    &[c(G)],
    &[c(HH)],
    &[v(IH)],
    &[c(JH)],
    &[c(K)],
    &[c(L)],
    &[c(M)],
    &[c(N)],
    &[v(AA)],
    &[c(P)],
    &[c(K)],
    &[c(R)],
    &[c(S)],
    &[c(T)],
    &[v(AH)],
    &[c(V)],
    &[c(W)],
    &[c(K), c(S)],
    &[v(IH)],
    &[c(Z)],
];

/// The built-in English rule table.
///
/// # Example
///
/// ```rust
/// use libsyllable::fallback::{default_letter_rules, Context};
///
/// let rules = default_letter_rules();
/// assert!(rules.iter().any(|r| r.pattern == "tion"));
/// assert!(rules.iter().any(|r| r.pattern == "kn" && r.context == Context::Initial));
/// ```
pub fn default_letter_rules() -> Vec<LetterRule> {
    let soft = || vec!['e', 'i', 'y'];
    let silent_e = Context::All(vec![
        Context::Final,
        Context::AfterConsonant(vec![]),
        Context::VowelEarlier,
    ]);
    let syllabic_le = Context::All(vec![Context::Final, Context::AfterConsonant(vec![])]);

    vec![
        // Bound suffixes
        any("cious", &[c(SH), v(AH), c(S)]),
        any("tious", &[c(SH), v(AH), c(S)]),
        any("geous", &[c(JH), v(AH), c(S)]),
        any("tion", &[c(SH), v(AH), c(N)]),
        any("sion", &[c(SH), v(AH), c(N)]),
        any("cian", &[c(SH), v(AH), c(N)]),
        any("tial", &[c(SH), v(AH), c(L)]),
        any("cial", &[c(SH), v(AH), c(L)]),
        any("ture", &[c(CH), v(ER)]),
        // Trigraphs
        any("tch", &[c(CH)]),
        any("dge", &[c(JH)]),
        any("igh", &[v(AY)]),
        any("eau", &[v(OW)]),
        any("sch", &[c(S), c(K)]),
        // Initial silent letters
        rule("kn", Context::Initial, &[c(N)]),
        rule("gn", Context::Initial, &[c(N)]),
        rule("wr", Context::Initial, &[c(R)]),
        rule("ps", Context::Initial, &[c(S)]),
        rule("gh", Context::Initial, &[c(G)]),
        rule("mb", Context::Final, &[c(M)]),
        any("gh", &[]),
        // Consonant digraphs
        any("ch", &[c(CH)]),
        any("sh", &[c(SH)]),
        any("th", &[c(TH)]),
        any("ph", &[c(F)]),
        any("wh", &[c(W)]),
        any("ck", &[c(K)]),
        any("ng", &[c(NG)]),
        any("qu", &[c(K), c(W)]),
        // Vowel teams
        any("ai", &[v(EY)]),
        any("ay", &[v(EY)]),
        any("ei", &[v(EY)]),
        any("au", &[v(AO)]),
        any("aw", &[v(AO)]),
        any("ea", &[v(IY)]),
        any("ee", &[v(IY)]),
        any("ie", &[v(IY)]),
        rule("ey", Context::Final, &[v(IY)]),
        any("ey", &[v(EY)]),
        any("eu", &[v(UW)]),
        any("ew", &[v(UW)]),
        any("ue", &[v(UW)]),
        any("ui", &[v(UW)]),
        any("oo", &[v(UW)]),
        any("oa", &[v(OW)]),
        any("oe", &[v(OW)]),
        any("ow", &[v(OW)]),
        any("oi", &[v(OY)]),
        any("oy", &[v(OY)]),
        any("ou", &[v(AW)]),
        // R-colored vowels
        any("er", &[v(ER)]),
        any("ir", &[v(ER)]),
        any("ur", &[v(ER)]),
        any("ar", &[v(AA), c(R)]),
        any("or", &[v(AO), c(R)]),
        // Syllabic -le
        rule("le", syllabic_le, &[v(AH), c(L)]),
        // Single letters in context
        rule("c", Context::BeforeVowel(soft()), &[c(S)]),
        rule("g", Context::BeforeVowel(soft()), &[c(JH)]),
        rule("e", silent_e, &[]),
        rule("y", Context::Initial, &[c(Y)]),
        rule("y", Context::BeforeVowel(vec![]), &[c(Y)]),
        rule("y", Context::Final, &[v(IY)]),
        rule("x", Context::Initial, &[c(Z)]),
    ]
}
