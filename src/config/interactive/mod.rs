use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input};

use super::{Config, get_config_dir};
use crate::embeddings::ollama::OllamaClient;

#[inline]
pub fn run_interactive_config() -> Result<()> {
    eprintln!("{}", style("Catechist Configuration Setup").bold().cyan());
    eprintln!();

    let config_dir = get_config_dir()?;
    let mut config = Config::load(&config_dir).context("Failed to load existing configuration")?;

    eprintln!("{}", style("Embedding Backend").bold().yellow());
    eprintln!("Configure the Ollama instance used for embedding generation.");
    eprintln!();

    config.embedding.host = Input::new()
        .with_prompt("Host")
        .default(config.embedding.host.clone())
        .interact_text()?;
    config.embedding.port = Input::new()
        .with_prompt("Port")
        .default(config.embedding.port)
        .interact_text()?;
    config.embedding.model = Input::new()
        .with_prompt("Embedding model")
        .default(config.embedding.model.clone())
        .interact_text()?;

    eprintln!();
    eprintln!("{}", style("Generation Backend").bold().yellow());
    eprintln!("Configure the OpenAI-compatible endpoint used for answer generation.");
    eprintln!();

    config.generation.host = Input::new()
        .with_prompt("Host")
        .default(config.generation.host.clone())
        .interact_text()?;
    config.generation.port = Input::new()
        .with_prompt("Port")
        .default(config.generation.port)
        .interact_text()?;
    config.generation.model = Input::new()
        .with_prompt("Generation model")
        .default(config.generation.model.clone())
        .interact_text()?;

    eprintln!();
    eprintln!("{}", style("Chat Behavior").bold().yellow());
    config.chat.top_k = Input::new()
        .with_prompt("Documents retrieved per query")
        .default(config.chat.top_k)
        .interact_text()?;
    config.chat.require_ask_prefix = Confirm::new()
        .with_prompt("Require the !ask prefix for queries?")
        .default(config.chat.require_ask_prefix)
        .interact()?;

    config.validate().context("Configuration is invalid")?;

    eprintln!();
    eprintln!("{}", style("Testing configuration...").yellow());

    if test_embedding_connection(&config) {
        eprintln!("{}", style("✓ Embedding backend reachable!").green());
    } else {
        eprintln!(
            "{}",
            style("⚠ Warning: Could not connect to the embedding backend").yellow()
        );
        eprintln!("You can continue, but make sure Ollama is running before starting a chat.");
    }

    eprintln!();
    if Confirm::new()
        .with_prompt("Save configuration?")
        .default(true)
        .interact()?
    {
        config.save().context("Failed to save configuration")?;
        eprintln!("{}", style("✓ Configuration saved successfully!").green());
        eprintln!(
            "Configuration saved to: {}",
            style(config.config_file_path().display()).cyan()
        );
    } else {
        eprintln!("Configuration not saved.");
    }

    Ok(())
}

#[inline]
pub fn show_config() -> Result<()> {
    let config_dir = get_config_dir()?;
    let config = Config::load(&config_dir).context("Failed to load configuration")?;

    println!("{}", style("Current Configuration").bold().cyan());
    println!();
    println!("{}", style("Corpus:").bold());
    println!("  Path: {}", config.corpus_path().display());
    println!();
    println!("{}", style("Embedding backend:").bold());
    println!(
        "  Endpoint: {}://{}:{}",
        config.embedding.protocol, config.embedding.host, config.embedding.port
    );
    println!("  Model: {}", config.embedding.model);
    println!("  Batch size: {}", config.embedding.batch_size);
    println!();
    println!("{}", style("Generation backend:").bold());
    println!(
        "  Endpoint: {}://{}:{}",
        config.generation.protocol, config.generation.host, config.generation.port
    );
    println!("  Model: {}", config.generation.model);
    println!("  Max tokens: {}", config.generation.max_tokens);
    println!();
    println!("{}", style("Chat:").bold());
    println!("  Top-k documents: {}", config.chat.top_k);
    println!("  Require !ask prefix: {}", config.chat.require_ask_prefix);
    println!();
    println!("Config file: {}", config.config_file_path().display());

    Ok(())
}

fn test_embedding_connection(config: &Config) -> bool {
    match OllamaClient::new(&config.embedding) {
        Ok(client) => client.ping().is_ok(),
        Err(_) => false,
    }
}
