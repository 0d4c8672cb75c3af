use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatechistError>;

#[derive(Error, Debug)]
pub enum CatechistError {
    #[error("Corpus is empty: {0}")]
    EmptyCorpus(String),

    #[error("Failed to build vector index: {0}")]
    IndexBuild(String),

    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub mod chat;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod embeddings;
pub mod generation;
pub mod index;
pub mod prompt;
