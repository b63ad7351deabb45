//! Default paths and configuration loading

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::AnalyzerConfig;

/// Get the configuration directory for libsyllable
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("libsyllable"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}",
            ext
        )),
        None => Err(anyhow::anyhow!("Config file must have .json extension")),
    }
}

/// Resolve the configuration to use.
///
/// An explicit path must exist. Otherwise the default path is read when
/// present, and built-in defaults apply when it is not. Returns the config
/// and the file it came from.
pub fn load_config(custom_path: Option<PathBuf>) -> Result<(AnalyzerConfig, Option<PathBuf>)> {
    if let Some(path) = custom_path {
        validate_config_path(&path)?;
        let config = AnalyzerConfig::load(&path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;
        return Ok((config, Some(path)));
    }

    let path = match default_config_path() {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!(error = %err, "no configuration directory, using defaults");
            return Ok((AnalyzerConfig::default(), None));
        }
    };
    if !path.exists() {
        return Ok((AnalyzerConfig::default(), None));
    }

    let config = AnalyzerConfig::load(&path)
        .with_context(|| format!("Failed to load config file: {}", path.display()))?;
    Ok((config, Some(path)))
}
