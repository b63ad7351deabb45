//! CLI interface for libsyllable
//!
//! Provides command-line access to word analysis, dictionary lookup and the
//! letter-rule transcriber.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands};
pub use paths::{config_dir, load_config};
