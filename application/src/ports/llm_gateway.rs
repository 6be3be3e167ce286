//! LLM Gateway port
//!
//! Defines the interface for communicating with the model provider.

use async_trait::async_trait;
use colloquy_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: String, message: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// One call per conversation turn: the full ordered message history goes in,
/// one assistant reply comes out. The gateway holds no conversation state of
/// its own; the provider API is stateless, so the caller resends the history
/// on every call.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// The model this gateway talks to
    fn model(&self) -> &Model;

    /// Send the full message history and return the assistant reply text
    async fn complete(&self, messages: &[Message]) -> Result<String, GatewayError>;
}
