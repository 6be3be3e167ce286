//! Wire types for the Gemini `generateContent` endpoint
//!
//! The API takes one optional `systemInstruction` outside the turn list and
//! an ordered `contents` array whose roles are `"user"` and `"model"`. The
//! leading system message of a conversation maps to the former; user and
//! assistant turns map to the latter.

use crate::gemini::error::GeminiError;
use colloquy_domain::{Message, Role};
use serde::{Deserialize, Serialize};

/// One text fragment within a content block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// A content block: an optional role plus its parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build a request from an ordered message history.
    pub fn from_messages(messages: &[Message]) -> Self {
        let mut system_instruction = None;
        let mut contents = Vec::with_capacity(messages.len());

        for message in messages {
            match message.role {
                // The API takes a single instruction outside the turn list
                Role::System => {
                    system_instruction = Some(Content::text(None, message.content.as_str()));
                }
                Role::User => contents.push(Content::text(Some("user"), message.content.as_str())),
                Role::Assistant => {
                    contents.push(Content::text(Some("model"), message.content.as_str()));
                }
            }
        }

        Self {
            system_instruction,
            contents,
        }
    }
}

/// Response body for `models/{model}:generateContent`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    pub fn text(&self) -> Result<String, GeminiError> {
        let candidate = self.candidates.first().ok_or(GeminiError::NoCandidates)?;
        let text: String = candidate
            .content
            .as_ref()
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GeminiError::EmptyCandidate);
        }
        Ok(text)
    }
}

/// Error body returned on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_message_becomes_system_instruction() {
        let messages = [
            Message::system("You are a helpful assistant."),
            Message::user("Hello"),
        ];
        let request = GenerateContentRequest::from_messages(&messages);

        let instruction = request.system_instruction.unwrap();
        assert!(instruction.role.is_none());
        assert_eq!(instruction.parts[0].text, "You are a helpful assistant.");

        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role.as_deref(), Some("user"));
    }

    #[test]
    fn assistant_turns_map_to_model_role() {
        let messages = [
            Message::system("sys"),
            Message::user("Hello"),
            Message::assistant("Hi there!"),
            Message::user("How are you?"),
        ];
        let request = GenerateContentRequest::from_messages(&messages);

        let roles: Vec<_> = request
            .contents
            .iter()
            .map(|c| c.role.as_deref().unwrap())
            .collect();
        assert_eq!(roles, ["user", "model", "user"]);
        assert_eq!(request.contents[1].parts[0].text, "Hi there!");
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let messages = [Message::system("sys"), Message::user("hi")];
        let request = GenerateContentRequest::from_messages(&messages);
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains(r#""systemInstruction""#));
        assert!(json.contains(r#""contents""#));
        assert!(!json.contains(r#""role":null"#));
    }

    #[test]
    fn response_text_concatenates_parts_of_first_candidate() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Hi "}, {"text": "there!"}]
                },
                "finishReason": "STOP"
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text().unwrap(), "Hi there!");
    }

    #[test]
    fn empty_candidate_list_is_error() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(response.text(), Err(GeminiError::NoCandidates)));
    }

    #[test]
    fn candidate_without_text_is_error() {
        // Safety-blocked candidates come back without content
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(response.text(), Err(GeminiError::EmptyCandidate)));
    }

    #[test]
    fn error_body_decodes() {
        let body = r#"{
            "error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED"
            }
        }"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.code, 429);
        assert_eq!(parsed.error.status, "RESOURCE_EXHAUSTED");
        assert_eq!(parsed.error.message, "Resource has been exhausted");
    }
}
