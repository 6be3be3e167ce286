//! Console output formatter for chat transcripts

use colloquy_domain::{Message, Role};
use colored::Colorize;

/// Formats conversation messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render one message, or `None` for messages that stay hidden
    /// (the system instruction is not part of the visible transcript).
    pub fn format_message(message: &Message) -> Option<String> {
        let label = match message.role {
            Role::System => return None,
            Role::User => "you".cyan().bold(),
            Role::Assistant => "gemini".green().bold(),
        };
        Some(format!("{} {}", label, message.content))
    }

    /// Render the visible transcript, one blank line between messages.
    pub fn format_transcript(messages: &[Message]) -> String {
        let lines: Vec<String> = messages.iter().filter_map(Self::format_message).collect();
        if lines.is_empty() {
            "(no messages yet)".dimmed().to_string()
        } else {
            lines.join("\n\n")
        }
    }

    /// Render the full transcript (system message included) as JSON.
    pub fn format_json(messages: &[Message]) -> String {
        serde_json::to_string_pretty(messages).unwrap_or_else(|_| "[]".to_string())
    }

    /// Render an error line for a failed turn.
    pub fn format_error(error: &dyn std::fmt::Display) -> String {
        format!("{} {}", "error:".red().bold(), error)
    }
}
