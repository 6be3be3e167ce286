//! Configuration loading
//!
//! - [`file_config::FileConfig`] - raw TOML structure
//! - [`loader::ConfigLoader`] - multi-source discovery and merging

mod file_config;
mod loader;

pub use file_config::{FileChatConfig, FileConfig, FileReplConfig};
pub use loader::ConfigLoader;
