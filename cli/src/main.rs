//! CLI entrypoint for colloquy
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use colloquy_application::SubmitTurnUseCase;
use colloquy_domain::{Conversation, Model, Prompt};
use colloquy_infrastructure::{ConfigLoader, GeminiGateway, api_key_from_env};
use colloquy_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // The credential must exist before any interactive surface appears
    let api_key = match api_key_from_env() {
        Ok(key) => key,
        Err(e) => bail!("{e}"),
    };

    let model: Model = cli
        .model
        .as_deref()
        .or(config.chat.model.as_deref())
        .map(|s| s.parse().unwrap())
        .unwrap_or_default();

    let conversation = match cli
        .system_prompt
        .clone()
        .or_else(|| config.chat.system_prompt.clone())
    {
        Some(prompt) => Conversation::with_system_prompt(prompt),
        None => Conversation::new(),
    };

    info!("Starting colloquy with model {}", model);

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(api_key, model));

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(gateway, conversation)
            .with_progress(config.repl.show_progress && !cli.quiet)
            .with_history_file(config.repl.history_file.clone().map(Into::into));

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };
    let prompt = Prompt::try_from(question)?;

    let mut conversation = conversation;
    let use_case = SubmitTurnUseCase::new(gateway);
    let reply = use_case.execute(&mut conversation, prompt).await?;

    match cli.output {
        OutputFormat::Text => println!("{}", reply),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(conversation.messages())),
    }

    Ok(())
}
