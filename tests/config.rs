//! Tests de construcción del analizador desde la configuración.

use std::fs;
use std::path::{Path, PathBuf};

use assert_matches::assert_matches;
use tempfile::TempDir;
use vader::{Config, SentimentAnalyzer, VaderError};

const LEXICON: &str = "good\t1.9\nbad\t-2.5\nsmiling\t1.6\n";

fn create_data_dir(with_emojis: bool) -> TempDir {
    let dir = TempDir::new().unwrap();
    let lang_dir = dir.path().join("en");
    fs::create_dir_all(&lang_dir).unwrap();
    fs::write(lang_dir.join("vader_lexicon.txt"), LEXICON).unwrap();
    if with_emojis {
        fs::write(
            lang_dir.join("emoji_utf8_lexicon.txt"),
            "😁\tbeaming face with smiling eyes\n",
        )
        .unwrap();
    }
    dir
}

fn config_for(data_dir: &Path) -> Config {
    Config {
        data_dir: data_dir.to_path_buf(),
        ..Config::default()
    }
}

#[test]
fn test_from_config_loads_default_resources() {
    let dir = create_data_dir(true);
    let analyzer = SentimentAnalyzer::from_config(&config_for(dir.path())).unwrap();

    assert_eq!(analyzer.lexicon().len(), 3);
    assert_eq!(analyzer.language().code(), "en");
    assert!(analyzer.polarity_scores("😁").compound > 0.0);
}

#[test]
fn test_missing_default_emoji_lexicon_is_not_fatal() {
    let dir = create_data_dir(false);
    let analyzer = SentimentAnalyzer::from_config(&config_for(dir.path())).unwrap();

    // Sin léxico de emojis el glifo suelto se descarta
    assert_eq!(analyzer.polarity_scores("😁").compound, 0.0);
    assert_eq!(analyzer.polarity_scores("good").compound, 0.4404);
}

#[test]
fn test_missing_explicit_emoji_lexicon_is_fatal() {
    let dir = create_data_dir(false);
    let config = Config {
        emoji_lexicon: Some(dir.path().join("no-existe.txt")),
        ..config_for(dir.path())
    };
    assert_matches!(
        SentimentAnalyzer::from_config(&config),
        Err(VaderError::LexiconNotFound { .. })
    );
}

#[test]
fn test_missing_lexicon_is_fatal() {
    let dir = TempDir::new().unwrap();
    assert_matches!(
        SentimentAnalyzer::from_config(&config_for(dir.path())),
        Err(VaderError::LexiconNotFound { .. })
    );
}

#[test]
fn test_unparseable_lexicon_is_fatal() {
    let dir = TempDir::new().unwrap();
    let lexicon = dir.path().join("broken.txt");
    fs::write(&lexicon, "good\t1.9\nbad\n").unwrap();
    let config = Config {
        lexicon: Some(lexicon),
        ..config_for(dir.path())
    };
    assert_matches!(
        SentimentAnalyzer::from_config(&config),
        Err(VaderError::Parse { line: 2, .. })
    );
}

#[test]
fn test_unsupported_language() {
    let dir = create_data_dir(true);
    let config = Config {
        language: "es".to_string(),
        ..config_for(dir.path())
    };
    assert_matches!(
        SentimentAnalyzer::from_config(&config),
        Err(VaderError::UnsupportedLanguage(code)) if code == "es"
    );
}

#[test]
fn test_custom_lexicons_are_merged() {
    let dir = create_data_dir(true);
    fs::write(dir.path().join("en").join("custom.txt"), "meh\t-0.3\n").unwrap();
    let extra: PathBuf = dir.path().join("extra.txt");
    fs::write(&extra, "good\t3.0\n").unwrap();

    let config = Config {
        custom_lexicon: Some(extra),
        ..config_for(dir.path())
    };
    let analyzer = SentimentAnalyzer::from_config(&config).unwrap();

    assert_eq!(analyzer.lexicon().get("meh"), Some(-0.3));
    assert_eq!(analyzer.lexicon().get("good"), Some(3.0));
    assert_eq!(analyzer.lexicon().get("bad"), Some(-2.5));
}

#[test]
fn test_language_pack_replaces_word_lists() {
    let dir = create_data_dir(true);
    let pack = dir.path().join("pack.toml");
    fs::write(
        &pack,
        "code = \"en-test\"\nname = \"Test\"\nnegations = [\"nah\"]\n",
    )
    .unwrap();

    let config = Config {
        language_pack: Some(pack),
        ..config_for(dir.path())
    };
    let analyzer = SentimentAnalyzer::from_config(&config).unwrap();

    assert_eq!(analyzer.language().code(), "en-test");
    assert!(analyzer.polarity_scores("nah good").compound < 0.0);
    assert_eq!(analyzer.polarity_scores("not good").compound, 0.4404);
}

#[test]
fn test_regional_language_uses_english_resources() {
    let dir = create_data_dir(true);
    let data_dir = dir.path().to_string_lossy().to_string();
    let args = ["vader", "--lang", "en-GB", "--data-dir", &data_dir, "good"];
    let config = Config::from_args(args.iter().map(|s| s.to_string()).collect()).unwrap();

    let analyzer = SentimentAnalyzer::from_config(&config).unwrap();
    assert_eq!(analyzer.language().code(), "en");
    assert_eq!(analyzer.polarity_scores("good").compound, 0.4404);
}

#[test]
fn test_user_custom_lexicon_merged_with_explicit_lexicon() {
    let dir = create_data_dir(true);
    fs::write(dir.path().join("en").join("custom.txt"), "meh\t-0.3\n").unwrap();
    let lexicon = dir.path().join("other.txt");
    fs::write(&lexicon, "nice\t1.8\n").unwrap();

    let config = Config {
        lexicon: Some(lexicon),
        ..config_for(dir.path())
    };
    let analyzer = SentimentAnalyzer::from_config(&config).unwrap();

    assert_eq!(analyzer.lexicon().get("nice"), Some(1.8));
    assert_eq!(analyzer.lexicon().get("meh"), Some(-0.3));
    assert_eq!(analyzer.lexicon().get("good"), None);
}

#[test]
fn test_missing_language_pack_is_fatal() {
    let dir = create_data_dir(true);
    let config = Config {
        language_pack: Some(dir.path().join("no-existe.toml")),
        ..config_for(dir.path())
    };
    assert_matches!(
        SentimentAnalyzer::from_config(&config),
        Err(VaderError::LanguagePackNotFound { .. })
    );
}
