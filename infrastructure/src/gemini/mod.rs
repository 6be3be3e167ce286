//! Gemini API adapter
//!
//! Implements the application layer's [`LlmGateway`] port over the
//! `generateContent` REST endpoint.
//!
//! [`LlmGateway`]: colloquy_application::ports::llm_gateway::LlmGateway

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::GeminiError;
pub use gateway::GeminiGateway;
