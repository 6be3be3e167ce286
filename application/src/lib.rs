//! Application layer for colloquy
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::llm_gateway::{GatewayError, LlmGateway};
pub use use_cases::submit_turn::{SubmitTurnError, SubmitTurnUseCase};
