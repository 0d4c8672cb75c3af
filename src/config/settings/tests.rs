use super::*;
use tempfile::TempDir;

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.embedding.port, 11434);
    assert_eq!(config.embedding.model, "nomic-embed-text:latest");
    assert_eq!(config.chat.top_k, 4);
    assert!(!config.chat.require_ask_prefix);
}

#[test]
fn load_returns_defaults_when_file_missing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load(temp_dir.path()).expect("Failed to load config");

    assert_eq!(config, Config {
        base_dir: temp_dir.path().to_path_buf(),
        ..Config::default()
    });
}

#[test]
fn save_and_load_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let mut config = Config {
        base_dir: temp_dir.path().to_path_buf(),
        ..Config::default()
    };
    config.embedding.host = "embed-host".to_string();
    config.embedding.port = 9100;
    config.generation.model = "test-model".to_string();
    config.chat.top_k = 7;
    config.chat.require_ask_prefix = true;
    config.corpus.path = Some(temp_dir.path().join("questions.db"));

    config.save().expect("Failed to save config");

    let loaded = Config::load(temp_dir.path()).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn corpus_path_defaults_to_config_dir() {
    let config = Config {
        base_dir: PathBuf::from("/tmp/catechist-test"),
        ..Config::default()
    };
    assert_eq!(
        config.corpus_path(),
        PathBuf::from("/tmp/catechist-test/corpus.db")
    );
}

#[test]
fn corpus_path_honors_override() {
    let config = Config {
        corpus: CorpusConfig {
            path: Some(PathBuf::from("/data/gotquestions.db")),
        },
        ..Config::default()
    };
    assert_eq!(
        config.corpus_path(),
        PathBuf::from("/data/gotquestions.db")
    );
}

#[test]
fn rejects_invalid_protocol() {
    let config = EmbeddingConfig {
        protocol: "ftp".to_string(),
        ..EmbeddingConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidProtocol(_))
    ));
}

#[test]
fn rejects_zero_port() {
    let config = GenerationConfig {
        port: 0,
        ..GenerationConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidPort(0))));
}

#[test]
fn rejects_empty_model() {
    let config = EmbeddingConfig {
        model: "  ".to_string(),
        ..EmbeddingConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidModel(_))
    ));
}

#[test]
fn rejects_out_of_range_batch_size() {
    let config = EmbeddingConfig {
        batch_size: 0,
        ..EmbeddingConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBatchSize(0))
    ));
}

#[test]
fn rejects_zero_top_k() {
    let config = ChatConfig {
        top_k: 0,
        ..ChatConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidTopK(0))));
}

#[test]
fn rejects_out_of_range_max_tokens() {
    let config = GenerationConfig {
        max_tokens: 1,
        ..GenerationConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidMaxTokens(1))
    ));
}

#[test]
fn endpoint_url_includes_port() {
    let config = EmbeddingConfig::default();
    let url = config.endpoint_url().expect("Failed to build URL");
    assert_eq!(url.as_str(), "http://localhost:11434/");
}

#[test]
fn invalid_toml_fails_to_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("config.toml"), "not [valid toml")
        .expect("Failed to write file");

    assert!(Config::load(temp_dir.path()).is_err());
}
