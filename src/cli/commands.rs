//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

use crate::align::AlignmentStrategy;
use crate::analysis::{AnalysisResult, Analyzer, PronunciationSource};
use crate::dictionary::{CmuDictionary, PhonemeDictionary};
use crate::word::Word;

use super::args::{Cli, Commands};
use super::paths::load_config;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let (config, config_path) = load_config(cli.config)?;
    let config = config.merge(cli.dict);
    let dictionary_path = config.dictionary.clone();
    let analyzer = Analyzer::from_config(config).context("Failed to build analyzer")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Analyze { words, json, ipa } => {
            cmd_analyze(&analyzer, &words, json, ipa, &mut out)
        }
        Commands::Lookup { word } => cmd_lookup(&analyzer, &word, &mut out),
        Commands::Transcribe { word } => cmd_transcribe(&analyzer, &word, &mut out),
        Commands::Info => cmd_info(
            &analyzer,
            dictionary_path.as_deref(),
            config_path.as_deref(),
            &mut out,
        ),
    }
}

/// Analyze command
///
/// Valid words are reported even when others are rejected; any rejection
/// makes the command fail after output is written.
pub fn cmd_analyze<D: PhonemeDictionary, W: Write>(
    analyzer: &Analyzer<D>,
    words: &[String],
    json: bool,
    ipa: bool,
    out: &mut W,
) -> Result<()> {
    let mut results = Vec::with_capacity(words.len());
    let mut rejected = 0;

    for raw in words {
        match analyzer.analyze(raw) {
            Ok(result) => results.push(result),
            Err(err) => {
                eprintln!("{}: {}", "Invalid input".yellow().bold(), err);
                rejected += 1;
            }
        }
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &results)?;
        writeln!(out)?;
    } else {
        for result in &results {
            write_analysis(result, ipa, out)?;
        }
    }

    if rejected > 0 {
        bail!("{} of {} word(s) rejected", rejected, words.len());
    }
    Ok(())
}

fn write_analysis<W: Write>(result: &AnalysisResult, ipa: bool, out: &mut W) -> Result<()> {
    let render = |seq: &crate::phoneme::PhonemeSequence| {
        if ipa {
            seq.ipa()
        } else {
            seq.to_string()
        }
    };

    let source = match result.source() {
        PronunciationSource::Dictionary => "dictionary".green(),
        PronunciationSource::Fallback => "letter rules".yellow(),
    };
    writeln!(
        out,
        "{}  {}  ({})",
        result.word().as_str().bold(),
        render(result.phonemes()).cyan(),
        source
    )?;

    let analysis = result.syllables();
    let width = analysis.iter().map(|s| s.text().len()).max().unwrap_or(0);
    for syllable in analysis {
        writeln!(
            out,
            "  {:<width$}  {}",
            syllable.text(),
            render(&syllable.phonemes),
            width = width
        )?;
    }
    if analysis.strategy() == AlignmentStrategy::Proportional {
        writeln!(out, "  {}", "(proportional alignment)".yellow())?;
    }
    writeln!(out)?;
    Ok(())
}

/// Lookup command
pub fn cmd_lookup<D: PhonemeDictionary, W: Write>(
    analyzer: &Analyzer<D>,
    raw: &str,
    out: &mut W,
) -> Result<()> {
    let word = Word::parse(raw)?;
    let pronunciations = analyzer.dictionary().pronunciations(&word);
    if pronunciations.is_empty() {
        bail!("`{}` is not in the dictionary", word);
    }

    writeln!(out, "{}", word.as_str().bold())?;
    for (i, seq) in pronunciations.iter().enumerate() {
        writeln!(
            out,
            "   {}. {}  {}",
            i + 1,
            seq.to_string().green(),
            seq.ipa().cyan()
        )?;
    }
    Ok(())
}

/// Transcribe command
pub fn cmd_transcribe<D: PhonemeDictionary, W: Write>(
    analyzer: &Analyzer<D>,
    raw: &str,
    out: &mut W,
) -> Result<()> {
    let word = Word::parse(raw)?;
    let seq = analyzer.transcriber().transcribe(&word);
    writeln!(out, "{}  {}", seq.to_string().green(), seq.ipa().cyan())?;
    Ok(())
}

/// Info command
pub fn cmd_info<W: Write>(
    analyzer: &Analyzer<CmuDictionary>,
    dictionary_path: Option<&Path>,
    config_path: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let dictionary = analyzer.dictionary();
    let rules = analyzer.syllabifier().rules();

    writeln!(out, "{}", "Analyzer Information".bold().underline())?;
    writeln!(out)?;
    match config_path {
        Some(path) => writeln!(out, "  Config:          {}", path.display().to_string().cyan())?,
        None => writeln!(out, "  Config:          {}", "defaults".yellow())?,
    }
    match dictionary_path {
        Some(path) => writeln!(out, "  Dictionary:      {}", path.display().to_string().cyan())?,
        None => writeln!(out, "  Dictionary:      {}", "bundled".yellow())?,
    }
    writeln!(out, "  Headwords:       {}", dictionary.len().to_string().green())?;
    writeln!(
        out,
        "  Pronunciations:  {}",
        dictionary.pronunciation_count().to_string().green()
    )?;
    writeln!(
        out,
        "  Letter rules:    {}",
        analyzer.transcriber().rule_count().to_string().green()
    )?;
    writeln!(
        out,
        "  Vowel teams:     {}",
        rules.vowel_teams.len().to_string().green()
    )?;
    writeln!(
        out,
        "  Exceptions:      {}",
        rules.exceptions.len().to_string().green()
    )?;
    writeln!(out)?;
    Ok(())
}
