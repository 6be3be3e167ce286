//! Conversation domain entities

use crate::core::prompt::Prompt;
use serde::{Deserialize, Serialize};

/// System instruction used when no other is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Role of a message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The message history of one chat session (Entity)
///
/// The sequence is append-only: the first element is always exactly one
/// system message, each exchange appends one user and one assistant message,
/// and nothing is edited or removed in place. [`reset`](Self::reset) is the
/// only way back: it restores the initial single-message state with the
/// system instruction verbatim.
///
/// A `Conversation` is owned by its session (the REPL, a one-shot command, a
/// test) and passed explicitly to every operation; there is no process-wide
/// instance.
#[derive(Debug, Clone)]
pub struct Conversation {
    system_prompt: String,
    messages: Vec<Message>,
}

impl Conversation {
    /// Create a conversation seeded with the default system instruction
    pub fn new() -> Self {
        Self::with_system_prompt(DEFAULT_SYSTEM_PROMPT)
    }

    /// Create a conversation seeded with a custom system instruction
    pub fn with_system_prompt(prompt: impl Into<String>) -> Self {
        let system_prompt = prompt.into();
        let messages = vec![Message::system(system_prompt.clone())];
        Self {
            system_prompt,
            messages,
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of completed user/assistant exchanges
    pub fn exchanges(&self) -> usize {
        (self.messages.len() - 1) / 2
    }

    /// Append a user turn. Non-empty input is guaranteed by [`Prompt`].
    pub fn push_user(&mut self, prompt: Prompt) {
        self.messages.push(Message::user(prompt.into_content()));
    }

    /// Append an assistant turn. Called only after a successful model
    /// invocation.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Discard all accumulated messages and re-establish the initial
    /// single-system-message state.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.messages.push(Message::system(self.system_prompt.clone()));
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(s: &str) -> Prompt {
        Prompt::try_new(s).unwrap()
    }

    #[test]
    fn new_conversation_holds_exactly_the_system_message() {
        let conversation = Conversation::new();
        assert_eq!(
            conversation.messages(),
            &[Message::system(DEFAULT_SYSTEM_PROMPT)]
        );
        assert_eq!(conversation.exchanges(), 0);
    }

    #[test]
    fn single_exchange_appends_user_then_assistant() {
        let mut conversation = Conversation::new();

        conversation.push_user(prompt("Hello"));
        assert_eq!(conversation.messages().len(), 2);

        conversation.push_assistant("Hi there!");
        assert_eq!(
            conversation.messages(),
            &[
                Message::system(DEFAULT_SYSTEM_PROMPT),
                Message::user("Hello"),
                Message::assistant("Hi there!"),
            ]
        );
        assert_eq!(conversation.exchanges(), 1);
    }

    #[test]
    fn n_exchanges_alternate_from_index_one() {
        let mut conversation = Conversation::new();
        let n = 4;
        for i in 0..n {
            conversation.push_user(prompt(&format!("question {i}")));
            conversation.push_assistant(format!("answer {i}"));
        }

        assert_eq!(conversation.messages().len(), 1 + 2 * n);
        assert_eq!(conversation.messages()[0].role, Role::System);
        for (i, message) in conversation.messages()[1..].iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(message.role, expected, "wrong role at index {}", i + 1);
        }
    }

    #[test]
    fn reset_restores_initial_state_verbatim() {
        let mut conversation = Conversation::with_system_prompt("Answer in French.");
        for i in 0..3 {
            conversation.push_user(prompt(&format!("q{i}")));
            conversation.push_assistant(format!("a{i}"));
        }
        assert_eq!(conversation.messages().len(), 7);

        conversation.reset();
        assert_eq!(
            conversation.messages(),
            &[Message::system("Answer in French.")]
        );
    }

    #[test]
    fn reset_is_idempotent() {
        let mut conversation = Conversation::new();
        conversation.reset();
        conversation.reset();
        assert_eq!(
            conversation.messages(),
            &[Message::system(DEFAULT_SYSTEM_PROMPT)]
        );
    }

    #[test]
    fn incomplete_exchange_is_not_counted() {
        let mut conversation = Conversation::new();
        conversation.push_user(prompt("Hello"));
        assert_eq!(conversation.exchanges(), 0);
    }

    #[test]
    fn transcript_serializes_with_lowercase_roles() {
        let mut conversation = Conversation::new();
        conversation.push_user(prompt("Hello"));
        let json = serde_json::to_string(conversation.messages()).unwrap();
        assert!(json.contains(r#""role":"system""#));
        assert!(json.contains(r#""role":"user""#));
    }
}
