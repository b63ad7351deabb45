//! Core dictionary embedded in the library.
//!
//! A subset of the CMU Pronouncing Dictionary (`cmudict.dict` layout)
//! covering common English words. Load a full `cmudict.dict` through
//! configuration for wider coverage.

use std::sync::OnceLock;

use super::cmu::CmuDictionary;
use super::PhonemeDictionary;

/// Raw text of the embedded dictionary.
pub const BUNDLED_SOURCE: &str = include_str!("../../data/cmudict-core.dict");

/// The embedded dictionary, parsed on first access.
///
/// A parse failure is logged and yields an empty dictionary; every word then
/// resolves through the fallback transcriber.
pub fn bundled() -> &'static CmuDictionary {
    static BUNDLED: OnceLock<CmuDictionary> = OnceLock::new();
    BUNDLED.get_or_init(|| match BUNDLED_SOURCE.parse::<CmuDictionary>() {
        Ok(dict) => {
            tracing::debug!(entries = dict.len(), "loaded bundled dictionary");
            dict
        }
        Err(err) => {
            tracing::error!(error = %err, "bundled dictionary failed to parse");
            CmuDictionary::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;

    #[test]
    fn test_bundled_source_parses_cleanly() {
        let dict: CmuDictionary = BUNDLED_SOURCE.parse().unwrap();
        assert!(dict.len() > 200);
    }

    #[test]
    fn test_bundled_is_loaded_once() {
        let first = bundled();
        assert!(first.len() > 200);
        assert!(std::ptr::eq(first, bundled()));
    }

    #[test]
    fn test_bundled_contains_example() {
        let word = Word::parse("example").unwrap();
        let seq = bundled().lookup(&word).unwrap();
        assert_eq!(seq.to_string(), "IH0 G Z AE1 M P AH0 L");
    }
}
