//! Domain layer for colloquy
//!
//! This crate contains the core entities and value objects for a single
//! chat session. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! A [`Conversation`] is the ordered, append-only sequence of role-tagged
//! messages for one session. It always starts with exactly one system
//! instruction, grows by one user and one assistant message per exchange,
//! and can be reset back to its initial single-message form.

pub mod conversation;
pub mod core;

// Re-export commonly used types
pub use conversation::entities::{Conversation, DEFAULT_SYSTEM_PROMPT, Message, Role};
pub use self::core::{error::DomainError, model::Model, prompt::Prompt, string::preview};
