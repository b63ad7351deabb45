//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    use clap::Parser;
    use libsyllable::analysis::Analyzer;
    use libsyllable::cli::commands::{cmd_analyze, cmd_info, cmd_lookup, cmd_transcribe};
    use libsyllable::cli::paths::load_config;
    use libsyllable::cli::{Cli, Commands};
    use libsyllable::config::AnalyzerConfig;
    use libsyllable::dictionary::CmuDictionary;

    const DICT: &str = "paper P EY1 P ER0\nread R IY1 D\nread(2) R EH1 D\n";

    fn plain() {
        colored::control::set_override(false);
    }

    fn write_dict(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("words.dict");
        fs::write(&path, DICT).unwrap();
        path
    }

    fn analyzer_with_dict(dir: &TempDir) -> Analyzer<CmuDictionary> {
        let config = AnalyzerConfig {
            dictionary: Some(write_dict(dir)),
            ..Default::default()
        };
        Analyzer::from_config(config).unwrap()
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_parse_analyze_args() {
        let cli = Cli::try_parse_from(["libsyllable", "-vv", "analyze", "--ipa", "hello", "world"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Analyze { words, json, ipa } => {
                assert_eq!(words, vec!["hello", "world"]);
                assert!(!json);
                assert!(ipa);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_analyze_requires_words() {
        assert!(Cli::try_parse_from(["libsyllable", "analyze"]).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "libsyllable",
            "lookup",
            "read",
            "--dict",
            "words.dict",
            "--config",
            "cfg.json",
        ])
        .unwrap();
        assert_eq!(cli.dict, Some(PathBuf::from("words.dict")));
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
    }

    #[test]
    fn test_analyze_text_output() {
        plain();
        let dir = TempDir::new().unwrap();
        let analyzer = analyzer_with_dict(&dir);

        let mut buf = Vec::new();
        cmd_analyze(&analyzer, &["Paper".to_string()], false, false, &mut buf).unwrap();
        let text = output(buf);

        assert!(text.contains("paper  P EY1 P ER0  (dictionary)"), "{}", text);
        assert!(text.contains("  pa   P EY1 P"), "{}", text);
        assert!(text.contains("  per  ER0"), "{}", text);
    }

    #[test]
    fn test_analyze_ipa_output() {
        plain();
        let dir = TempDir::new().unwrap();
        let analyzer = analyzer_with_dict(&dir);

        let mut buf = Vec::new();
        cmd_analyze(&analyzer, &["paper".to_string()], false, true, &mut buf).unwrap();
        let text = output(buf);
        assert!(text.contains("pˈeɪpər"), "{}", text);
    }

    #[test]
    fn test_analyze_json_output() {
        let dir = TempDir::new().unwrap();
        let analyzer = analyzer_with_dict(&dir);

        let mut buf = Vec::new();
        let words = vec!["paper".to_string(), "zorp".to_string()];
        cmd_analyze(&analyzer, &words, true, false, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let results = value.as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["word"], "paper");
        assert_eq!(results[0]["source"], "dictionary");
        assert_eq!(results[0]["phonemes"][1], "EY1");
        assert_eq!(results[0]["syllables"]["strategy"], "nucleus");
        assert_eq!(
            results[0]["syllables"]["syllables"][0]["syllable"]["text"],
            "pa"
        );
        assert_eq!(results[1]["source"], "fallback");
    }

    #[test]
    fn test_analyze_reports_invalid_words_and_fails() {
        plain();
        let dir = TempDir::new().unwrap();
        let analyzer = analyzer_with_dict(&dir);

        let mut buf = Vec::new();
        let words = vec!["paper".to_string(), "p4per".to_string()];
        let err = cmd_analyze(&analyzer, &words, false, false, &mut buf).unwrap_err();
        assert!(err.to_string().contains("1 of 2"));
        // The valid word is still reported
        assert!(output(buf).contains("paper"));
    }

    #[test]
    fn test_lookup_lists_variants_in_order() {
        plain();
        let dir = TempDir::new().unwrap();
        let analyzer = analyzer_with_dict(&dir);

        let mut buf = Vec::new();
        cmd_lookup(&analyzer, "read", &mut buf).unwrap();
        let text = output(buf);
        let first = text.find("R IY1 D").unwrap();
        let second = text.find("R EH1 D").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_lookup_missing_word_fails() {
        let dir = TempDir::new().unwrap();
        let analyzer = analyzer_with_dict(&dir);

        let mut buf = Vec::new();
        let err = cmd_lookup(&analyzer, "example", &mut buf).unwrap_err();
        assert!(err.to_string().contains("not in the dictionary"));
    }

    #[test]
    fn test_transcribe_ignores_dictionary() {
        plain();
        let dir = TempDir::new().unwrap();
        let analyzer = analyzer_with_dict(&dir);

        let mut buf = Vec::new();
        cmd_transcribe(&analyzer, "paper", &mut buf).unwrap();
        assert!(output(buf).starts_with("P AE1 P ER0"));
    }

    #[test]
    fn test_info_reports_counts() {
        plain();
        let dir = TempDir::new().unwrap();
        let dict_path = write_dict(&dir);
        let analyzer = analyzer_with_dict(&dir);

        let mut buf = Vec::new();
        cmd_info(&analyzer, Some(&dict_path), None, &mut buf).unwrap();
        let text = output(buf);
        assert!(text.contains("Headwords:       2"), "{}", text);
        assert!(text.contains("Pronunciations:  3"), "{}", text);
        assert!(text.contains("defaults"), "{}", text);
    }

    #[test]
    fn test_config_file_with_relative_dictionary() {
        let dir = TempDir::new().unwrap();
        write_dict(&dir);
        let config_path = dir.path().join("config.json");
        fs::write(&config_path, r#"{ "dictionary": "words.dict" }"#).unwrap();

        let (config, source) = load_config(Some(config_path.clone())).unwrap();
        assert_eq!(source, Some(config_path));

        let analyzer = Analyzer::from_config(config).unwrap();
        assert_eq!(
            analyzer.analyze("read").unwrap().phonemes().to_string(),
            "R IY1 D"
        );
    }

    #[test]
    fn test_config_with_bad_dictionary_fails() {
        let dir = TempDir::new().unwrap();
        let dict_path = dir.path().join("broken.dict");
        fs::write(&dict_path, "cat\n").unwrap();

        let config = AnalyzerConfig::default().merge(Some(dict_path));
        assert!(Analyzer::from_config(config).is_err());
    }

    #[test]
    fn test_config_must_be_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "{}").unwrap();
        assert!(load_config(Some(path)).is_err());
    }
}
