//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use colloquy_application::{LlmGateway, SubmitTurnUseCase};
use colloquy_domain::{Conversation, Prompt};
use indicatif::{ProgressBar, ProgressStyle};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Interactive chat REPL
///
/// Owns the conversation for the session and passes it to every operation;
/// the transcript is redrawn after each state change.
pub struct ChatRepl {
    use_case: SubmitTurnUseCase,
    conversation: Conversation,
    model_name: String,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(gateway: Arc<dyn LlmGateway>, conversation: Conversation) -> Self {
        let model_name = gateway.model().to_string();
        Self {
            use_case: SubmitTurnUseCase::new(gateway),
            conversation,
            model_name,
            show_progress: true,
            history_file: None,
        }
    }

    /// Set whether to show the spinner while waiting on the model
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the readline history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("colloquy").join("history.txt")));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if self.show_progress {
            self.print_welcome();
        }

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Prompt is non-empty here, but keep the fallible path
                    let Some(prompt) = Prompt::try_new(line) else {
                        continue;
                    };
                    self.process_turn(prompt).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Colloquy - Chat Mode             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model_name);
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /history  - Show the transcript so far");
        println!("  /reset    - Clear the conversation");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /history         - Show the transcript so far");
                println!("  /reset, /clear   - Clear the conversation");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/history" => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::format_transcript(self.conversation.messages())
                );
                println!();
                false
            }
            "/reset" | "/clear" => {
                let exchanges = self.conversation.exchanges();
                self.conversation.reset();
                println!("Conversation cleared ({} exchanges discarded).", exchanges);
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_turn(&mut self, prompt: Prompt) {
        println!();

        let spinner = if self.show_progress {
            Some(Self::spinner(&self.model_name))
        } else {
            None
        };

        let result = self.use_case.execute(&mut self.conversation, prompt).await;

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match result {
            Ok(_) => {
                // The reply is the last message in the conversation
                if let Some(line) = self
                    .conversation
                    .messages()
                    .last()
                    .and_then(ConsoleFormatter::format_message)
                {
                    println!("{}", line);
                }
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e));
            }
        }
        println!();
    }

    fn spinner(model: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(format!("waiting for {}...", model));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}
