//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Just the assistant reply
    Text,
    /// The full transcript as JSON
    Json,
}

/// CLI arguments for colloquy
#[derive(Parser, Debug)]
#[command(name = "colloquy")]
#[command(version, about = "Conversational Gemini chat for the terminal")]
#[command(long_about = r#"
Colloquy keeps an ordered conversation with a Gemini model: every submission
sends the full history and appends the reply, so the model sees context from
earlier turns.

The API key is read from GEMINI_API_KEY or GOOGLE_API_KEY.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./colloquy.toml     Project-level config
3. ~/.config/colloquy/config.toml   Global config

Example:
  colloquy "What is the capital of France?"
  colloquy -m gemini-2.5-flash --chat
  colloquy --system-prompt "Answer in French." --chat
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model to chat with
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Override the system instruction
    #[arg(long, value_name = "TEXT")]
    pub system_prompt: Option<String>,

    /// Output format for one-shot answers
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
