//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "libsyllable")]
#[command(about = "Syllabify English words and align each syllable with its phonemes")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// CMU dictionary file (overrides the configuration)
    #[arg(short = 'd', long, global = true)]
    pub dict: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Transcribe words and split them into syllables
    Analyze {
        /// Words to analyze
        #[arg(required = true)]
        words: Vec<String>,

        /// Emit JSON instead of text
        #[arg(short, long)]
        json: bool,

        /// Show IPA instead of ARPABET
        #[arg(short, long)]
        ipa: bool,
    },

    /// List every dictionary pronunciation of a word
    Lookup {
        /// Word to look up
        word: String,
    },

    /// Transcribe a word with the letter rules only
    Transcribe {
        /// Word to transcribe
        word: String,
    },

    /// Display dictionary and rule information
    Info,
}
