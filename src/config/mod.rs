// Configuration management module
// Handles TOML configuration and the interactive setup flow

pub mod interactive;
pub mod settings;

pub use interactive::{run_interactive_config, show_config};
pub use settings::{
    ChatConfig, Config, ConfigError, CorpusConfig, EmbeddingConfig, GenerationConfig,
};

/// Get the configuration directory path
#[inline]
pub fn get_config_dir() -> Result<std::path::PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("catechist"))
        .ok_or(ConfigError::DirectoryError)
}
