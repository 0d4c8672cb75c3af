use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use uuid::Uuid;

use crate::chat::Orchestrator;
use crate::config::{Config, get_config_dir};
use crate::corpus::CorpusStore;
use crate::embeddings::ollama::OllamaClient;
use crate::generation::openai::OpenAiClient;
use crate::index::VectorIndex;
use crate::{CatechistError, Result};

/// Load the corpus, build the vector index, and wire up the orchestrator.
/// Startup failures (empty corpus, unreachable embedding backend) abort
/// here; serving without a valid index is meaningless.
#[inline]
pub async fn bootstrap_pipeline(config: &Config) -> Result<Orchestrator> {
    let store = CorpusStore::open(config.corpus_path()).await?;
    let records = store.load_all().await?;
    info!("Loaded {} corpus records", records.len());

    let embedder = OllamaClient::new(&config.embedding)?;

    let bar = if console::user_attended_stderr() {
        ProgressBar::new_spinner().with_style(
            ProgressStyle::with_template("{spinner} {msg}").expect("style template is valid"),
        )
    } else {
        ProgressBar::hidden()
    };
    bar.set_message(format!("Embedding {} documents...", records.len()));
    bar.enable_steady_tick(std::time::Duration::from_millis(100));

    let index = VectorIndex::build(&records, &embedder)?;

    bar.finish_with_message(format!(
        "Indexed {} documents ({} dimensions)",
        index.len(),
        index.dimension()
    ));

    let generator = OpenAiClient::new(&config.generation)?;

    Ok(Orchestrator::new(
        Arc::new(index),
        Arc::new(embedder),
        Arc::new(generator),
        config.chat.clone(),
    ))
}

fn load_config() -> Result<Config> {
    let config_dir = get_config_dir()?;
    Config::load(config_dir).map_err(CatechistError::from)
}

/// Run a single question through the pipeline under a fresh conversation id
#[inline]
pub async fn ask(question: &str) -> Result<()> {
    let config = load_config()?;
    let orchestrator = bootstrap_pipeline(&config).await?;

    let conversation_id = Uuid::new_v4().to_string();
    match orchestrator.handle_message(&conversation_id, question).await {
        Some(reply) => println!("{reply}"),
        None => println!("(no reply)"),
    }

    Ok(())
}

/// Interactive chat session on stdin/stdout. This is the local stand-in
/// for the external chat transport; EOF ends the process like a
/// transport disconnect would.
#[inline]
pub async fn chat() -> Result<()> {
    let config = load_config()?;
    let orchestrator = bootstrap_pipeline(&config).await?;
    let conversation_id = Uuid::new_v4().to_string();

    eprintln!();
    eprintln!(
        "{} Ask a question, or send {} to probe. Ctrl-D to quit.",
        style("Chat session started.").bold().cyan(),
        style("!ping").yellow()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let body = line.trim();
        if body.is_empty() {
            continue;
        }

        if let Some(reply) = orchestrator.handle_message(&conversation_id, body).await {
            println!("{} {}", style(">").green().bold(), reply);
        }
    }

    info!("Transport closed, shutting down");
    Ok(())
}

/// Report configuration, corpus size, and backend health
#[inline]
pub async fn show_status() -> Result<()> {
    let config = load_config()?;

    println!("{}", style("Catechist Status").bold().cyan());
    println!();
    println!("Corpus database: {}", config.corpus_path().display());

    match CorpusStore::open(config.corpus_path()).await {
        Ok(store) => match store.count().await {
            Ok(count) if count > 0 => {
                println!("{} {count} question/answer records", style("✓").green());
            }
            Ok(_) => {
                println!(
                    "{} corpus is empty; the pipeline will refuse to start",
                    style("✗").red()
                );
            }
            Err(e) => println!("{} failed to read corpus: {e}", style("✗").red()),
        },
        Err(e) => println!("{} {e}", style("✗").red()),
    }

    println!();
    println!(
        "Embedding backend: {}://{}:{} ({})",
        config.embedding.protocol, config.embedding.host, config.embedding.port,
        config.embedding.model
    );
    match OllamaClient::new(&config.embedding) {
        Ok(client) => {
            match client.ping() {
                Ok(()) => println!("{} server reachable", style("✓").green()),
                Err(e) => println!("{} server unreachable: {e}", style("✗").red()),
            }
            match client.validate_model() {
                Ok(()) => println!("{} model available", style("✓").green()),
                Err(e) => println!("{} {e}", style("⚠").yellow()),
            }
        }
        Err(e) => println!("{} {e}", style("✗").red()),
    }

    println!();
    println!(
        "Generation backend: {}://{}:{} ({})",
        config.generation.protocol, config.generation.host, config.generation.port,
        config.generation.model
    );
    match OpenAiClient::new(&config.generation) {
        Ok(client) => match client.ping() {
            Ok(()) => println!("{} server reachable", style("✓").green()),
            Err(e) => println!("{} server unreachable: {e}", style("✗").red()),
        },
        Err(e) => println!("{} {e}", style("✗").red()),
    }

    Ok(())
}
