//! Submit Turn use case.
//!
//! Executes one conversation turn: append the user's prompt, invoke the
//! model with the full history, append the reply.
//!
//! When the invocation fails, the user turn stays in the history. It is
//! resent as part of the next submission rather than rolled back, and no
//! assistant turn is appended for it.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use colloquy_domain::{Conversation, Prompt, preview};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while executing a turn.
#[derive(Error, Debug)]
pub enum SubmitTurnError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("No response from model")]
    EmptyResponse,
}

/// Use case for one chat exchange.
pub struct SubmitTurnUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl SubmitTurnUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    /// Execute one turn against the given conversation.
    ///
    /// On success the conversation has grown by two messages and the reply
    /// text is returned. On failure it has grown by one (the user turn).
    pub async fn execute(
        &self,
        conversation: &mut Conversation,
        prompt: Prompt,
    ) -> Result<String, SubmitTurnError> {
        info!("Submitting turn: {}", preview(prompt.content(), 100));

        conversation.push_user(prompt);

        let reply = self.gateway.complete(conversation.messages()).await?;

        debug!(
            model = %self.gateway.model(),
            history = conversation.messages().len(),
            reply_bytes = reply.len(),
            "Model replied"
        );

        if reply.trim().is_empty() {
            return Err(SubmitTurnError::EmptyResponse);
        }

        conversation.push_assistant(reply.as_str());
        Ok(reply)
    }
}
