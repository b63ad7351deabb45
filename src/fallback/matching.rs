//! Pattern and context matching for letter rules.
//!
//! A match is described by the word, the pattern's start `pos` and its
//! length `len`; "before" refers to the letter at `pos + len`, "after" to the
//! letter at `pos - 1`.

use super::types::Context;

/// Letters treated as vowels when no other set is configured.
pub const DEFAULT_VOWEL_LETTERS: &[u8] = b"aeiou";

/// Check if `c` satisfies a neighbour restriction.
///
/// With an empty list, `vowel` selects the class: letters in `vowels` when
/// true, all other letters when false.
#[inline]
fn letter_in(c: u8, letters: &[char], vowels: &[u8], vowel: bool) -> bool {
    if letters.is_empty() {
        vowels.contains(&c) == vowel
    } else {
        letters.contains(&(c as char))
    }
}

/// Check if a context holds for a match of `len` letters at `pos`.
///
/// `vowels` is the letter class behind empty neighbour lists and
/// [`Context::VowelEarlier`].
///
/// # Examples
///
/// ```rust
/// use libsyllable::fallback::{context_matches, Context, DEFAULT_VOWEL_LETTERS};
///
/// let word = b"cent";
/// let vowels = DEFAULT_VOWEL_LETTERS;
/// assert!(context_matches(&Context::Initial, word, 0, 1, vowels));
/// assert!(context_matches(&Context::BeforeVowel(vec!['e', 'i', 'y']), word, 0, 1, vowels));
/// assert!(context_matches(&Context::Final, word, 3, 1, vowels));
/// assert!(!context_matches(&Context::AfterVowel(vec![]), word, 0, 1, vowels));
/// ```
pub fn context_matches(ctx: &Context, word: &[u8], pos: usize, len: usize, vowels: &[u8]) -> bool {
    let next = word.get(pos + len).copied();
    let prev = pos.checked_sub(1).and_then(|i| word.get(i).copied());

    match ctx {
        Context::Anywhere => true,
        Context::Initial => pos == 0,
        Context::Final => pos + len == word.len(),
        Context::BeforeVowel(letters) => next.is_some_and(|c| letter_in(c, letters, vowels, true)),
        Context::BeforeConsonant(letters) => {
            next.is_some_and(|c| letter_in(c, letters, vowels, false))
        }
        Context::AfterVowel(letters) => prev.is_some_and(|c| letter_in(c, letters, vowels, true)),
        Context::AfterConsonant(letters) => {
            prev.is_some_and(|c| letter_in(c, letters, vowels, false))
        }
        Context::VowelEarlier => word[..pos.min(word.len())]
            .iter()
            .any(|c| vowels.contains(c)),
        Context::All(contexts) => contexts
            .iter()
            .all(|inner| context_matches(inner, word, pos, len, vowels)),
    }
}

/// Check if `pattern` occurs in `word` at `pos`.
///
/// ```rust
/// use libsyllable::fallback::pattern_matches_at;
///
/// assert!(pattern_matches_at(b"ch", b"church", 0));
/// assert!(pattern_matches_at(b"ch", b"church", 4));
/// assert!(!pattern_matches_at(b"ch", b"church", 1));
/// assert!(!pattern_matches_at(b"che", b"church", 4));
/// ```
#[inline]
pub fn pattern_matches_at(pattern: &[u8], word: &[u8], pos: usize) -> bool {
    !pattern.is_empty() && word.get(pos..pos + pattern.len()) == Some(pattern)
}
