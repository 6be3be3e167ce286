//! Gemini LLM Gateway implementation

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use crate::secrets::ApiKey;
use async_trait::async_trait;
use colloquy_application::ports::llm_gateway::{GatewayError, LlmGateway};
use colloquy_domain::{Message, Model};
use tracing::debug;

/// Production endpoint for the Generative Language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// LLM Gateway implementation for the Gemini API
///
/// Stateless: every call carries the full conversation history. The key
/// travels in the `x-goog-api-key` header so it never appears in a URL.
/// No request timeout is configured; a turn blocks until the API answers.
pub struct GeminiGateway {
    client: reqwest::Client,
    api_key: ApiKey,
    model: Model,
    base_url: String,
}

impl GeminiGateway {
    /// Create a gateway against the production endpoint
    pub fn new(api_key: ApiKey, model: Model) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// Create a gateway with a custom endpoint (for tests and proxies)
    pub fn with_base_url(api_key: ApiKey, model: Model, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn generate(&self, request: &GenerateContentRequest) -> Result<String> {
        debug!(
            model = %self.model,
            contents = request.contents.len(),
            "Calling generateContent"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Failures carry a structured error body; fall back to the raw
            // text when it doesn't parse.
            return match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(parsed) => Err(GeminiError::Api {
                    status: parsed.error.status,
                    message: parsed.error.message,
                }),
                Err(_) => Err(GeminiError::Api {
                    status: status.to_string(),
                    message: body,
                }),
            };
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        parsed.text()
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn complete(&self, messages: &[Message]) -> std::result::Result<String, GatewayError> {
        let request = GenerateContentRequest::from_messages(messages);
        self.generate(&request).await.map_err(GatewayError::from)
    }
}

impl From<GeminiError> for GatewayError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            GeminiError::Api { status, message } => GatewayError::ApiError { status, message },
            GeminiError::Decode(e) => GatewayError::MalformedResponse(e.to_string()),
            GeminiError::NoCandidates | GeminiError::EmptyCandidate => {
                GatewayError::MalformedResponse(error.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base_url: &str) -> GeminiGateway {
        GeminiGateway::with_base_url(ApiKey::new("test-key"), Model::default(), base_url)
    }

    #[test]
    fn endpoint_includes_model_and_version() {
        let gateway = gateway("https://example.test");
        assert_eq!(
            gateway.endpoint(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_stripped() {
        let gateway = gateway("https://example.test/");
        assert_eq!(
            gateway.endpoint(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn api_error_maps_to_gateway_api_error() {
        let mapped: GatewayError = GeminiError::Api {
            status: "RESOURCE_EXHAUSTED".to_string(),
            message: "quota".to_string(),
        }
        .into();
        assert!(matches!(
            mapped,
            GatewayError::ApiError { ref status, .. } if status == "RESOURCE_EXHAUSTED"
        ));
    }

    #[test]
    fn missing_candidates_map_to_malformed_response() {
        let mapped: GatewayError = GeminiError::NoCandidates.into();
        assert!(matches!(mapped, GatewayError::MalformedResponse(_)));
    }
}
