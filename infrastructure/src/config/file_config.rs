//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
///
/// # Example
///
/// ```toml
/// [chat]
/// model = "gemini-2.0-flash"
/// system_prompt = "You are a helpful assistant."
///
/// [repl]
/// show_progress = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat settings
    pub chat: FileChatConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

/// Chat configuration from TOML (`[chat]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Model to chat with
    pub model: Option<String>,
    /// System instruction seeded into every new conversation
    pub system_prompt: Option<String>,
}

/// REPL configuration from TOML (`[repl]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while waiting on the model
    pub show_progress: bool,
    /// Path to readline history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}
