//! Error types for the Gemini adapter

use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API error ({status}): {message}")]
    Api { status: String, message: String },

    #[error("Response contained no candidates")]
    NoCandidates,

    #[error("Candidate contained no text")]
    EmptyCandidate,
}
