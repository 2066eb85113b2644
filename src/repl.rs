use crate::app::ask;
use crate::constants::{CMD_CLEAR, CMD_EXIT, CMD_FILE, CMD_IMAGE, CMD_QUIT, DEFAULT_IMAGE_QUERY};
use crate::error::AgentError;
use crate::history::HistoryState;
use crate::request::{FileOperation, Prompt};
use crate::session::Session;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Empty,
    Quit,
    Clear,
    Image(PathBuf),
    File {
        path: PathBuf,
        operation: FileOperation,
    },
    MissingPath(&'static str),
    Prompt(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplCommand::Empty;
        }

        let lowered = line.to_lowercase();
        if lowered == CMD_QUIT || lowered == CMD_EXIT {
            return ReplCommand::Quit;
        }
        if lowered == CMD_CLEAR {
            return ReplCommand::Clear;
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        match head {
            CMD_IMAGE if rest.is_empty() => ReplCommand::MissingPath("Please provide an image path"),
            CMD_IMAGE => ReplCommand::Image(PathBuf::from(rest)),
            CMD_FILE if rest.is_empty() => ReplCommand::MissingPath("Please provide a file path"),
            CMD_FILE => {
                let (path, operation) = match rest.split_once(char::is_whitespace) {
                    Some((path, operation)) => (path, FileOperation::parse(operation)),
                    None => (rest, FileOperation::Default),
                };
                ReplCommand::File {
                    path: PathBuf::from(path),
                    operation,
                }
            }
            _ => ReplCommand::Prompt(line.to_string()),
        }
    }
}

fn print_banner(model: &str) {
    println!("{} (model: {})", "Interactive chat started.".bold().green(), model);
    println!("Type '{}' or '{}' to leave", CMD_QUIT, CMD_EXIT);
    println!("Type '{}' to clear the conversation history", CMD_CLEAR);
    println!("Type '{} <path>' to ask about an image", CMD_IMAGE);
    println!("Type '{} <path> [operation]' to send a file", CMD_FILE);
    println!("{}", "-".repeat(50));
}

pub async fn interactive_chat(session: &mut Session, use_cot: bool) -> Result<(), AgentError> {
    let mut rl = DefaultEditor::new().map_err(|e| AgentError::Configuration(e.to_string()))?;
    print_banner(&session.config().model);

    loop {
        let line = match rl.readline("You: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Chat ended");
                break;
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                break;
            }
        };
        let _ = rl.add_history_entry(line.trim());

        let prompt = match ReplCommand::parse(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => {
                println!("Chat ended");
                break;
            }
            ReplCommand::Clear => {
                if session.history().state() == HistoryState::Empty {
                    println!("Conversation history is already empty");
                } else {
                    session.clear_history();
                    println!("Conversation history cleared");
                }
                continue;
            }
            ReplCommand::MissingPath(hint) => {
                println!("{}", hint);
                continue;
            }
            ReplCommand::Image(path) => {
                let query = match rl.readline("Question about this image (Enter for a description): ")
                {
                    Ok(query) if !query.trim().is_empty() => query.trim().to_string(),
                    Ok(_) => DEFAULT_IMAGE_QUERY.to_string(),
                    Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => continue,
                    Err(e) => {
                        eprintln!("{} {}", "Error:".red().bold(), e);
                        continue;
                    }
                };
                Prompt::Image {
                    path,
                    query: Some(query),
                }
            }
            ReplCommand::File { path, operation } => Prompt::File { path, operation },
            ReplCommand::Prompt(prompt) => Prompt::Text { prompt, use_cot },
        };

        if let Err(e) = ask(session, prompt).await {
            eprintln!("\n{} {}", "Error:".red().bold(), e);
        }
    }

    Ok(())
}
