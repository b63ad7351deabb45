//! Analyzer configuration.
//!
//! Configuration is a JSON document; every field is optional and missing
//! fields take the built-in defaults.
//!
//! ```json
//! {
//!   "dictionary": "/usr/share/cmudict/cmudict.dict",
//!   "syllable_rules": { "silent_finals": [] },
//!   "letter_rules": [
//!     { "pattern": "ph", "phonemes": ["F"] },
//!     { "pattern": "kn", "context": "initial", "phonemes": ["N"] }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::error::DictionaryError;
use crate::fallback::LetterRule;
use crate::syllable::SyllableRules;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file {}", path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for [`AnalyzerConfig`]
    #[error("invalid configuration")]
    Json(#[from] serde_json::Error),

    /// The configured dictionary could not be loaded
    #[error("failed to load dictionary {}", path.display())]
    Dictionary {
        /// Dictionary path from the configuration
        path: PathBuf,
        /// Underlying error
        source: DictionaryError,
    },
}

/// Settings for building an [`Analyzer`](crate::analysis::Analyzer).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// CMU-format dictionary file; the bundled dictionary when absent
    pub dictionary: Option<PathBuf>,
    /// Syllabification tables; defaults when absent
    pub syllable_rules: Option<SyllableRules>,
    /// Letter-to-sound table replacing the default one
    pub letter_rules: Option<Vec<LetterRule>>,
}

impl AnalyzerConfig {
    /// Parse configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load configuration from a JSON file.
    ///
    /// A relative `dictionary` path is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json(&text)?;

        if let (Some(dict), Some(base)) = (config.dictionary.as_mut(), path.parent()) {
            if dict.is_relative() {
                *dict = base.join(&*dict);
            }
        }

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Override fields with explicitly given values.
    pub fn merge(self, dictionary: Option<PathBuf>) -> Self {
        Self {
            dictionary: dictionary.or(self.dictionary),
            ..self
        }
    }
}
