//! Phoneme symbols, stress markers and pronunciation sequences.
//!
//! Pronunciations use the ARPABET symbol set of the CMU Pronouncing
//! Dictionary. Vowel symbols carry a stress digit (`0` unstressed, `1`
//! primary, `2` secondary); consonant symbols never do.
//!
//! # Example
//!
//! ```rust
//! use libsyllable::phoneme::{Arpabet, PhonemeSequence, Stress};
//!
//! let seq: PhonemeSequence = "K AE1 T".parse().unwrap();
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq[1].symbol(), Arpabet::AE);
//! assert_eq!(seq[1].stress(), Some(Stress::Primary));
//! assert_eq!(seq.ipa(), "kˈæt");
//! ```

pub mod ipa;
pub mod types;

pub use types::{Arpabet, ParsePhonemeError, Phoneme, PhonemeSequence, Stress};
