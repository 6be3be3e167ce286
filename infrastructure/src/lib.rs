//! Infrastructure layer for colloquy
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading and API credential
//! resolution.

pub mod config;
pub mod gemini;
pub mod secrets;

// Re-export commonly used types
pub use config::{ConfigLoader, FileChatConfig, FileConfig, FileReplConfig};
pub use gemini::{error::GeminiError, gateway::GeminiGateway};
pub use secrets::{ApiKey, SecretError, api_key_from_env};
