use crate::config::Overrides;
use crate::files::is_image_path;
use crate::request::{FileOperation, Prompt};
use clap::Parser;
use std::path::Path;

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "ag", about = "(LLM) AGent for everything", disable_help_flag = true)]
pub struct Cli {
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Ask the model to reason step by step.
    #[arg(short = 'c', long = "cot")]
    pub cot: bool,

    /// Send piped standard input, optionally preceded by the instruction words.
    #[arg(short = 'q', long = "query")]
    pub query: bool,

    /// Chat with the agent; interactive when no instruction is given.
    #[arg(short = 'a', long = "agent")]
    pub agent: bool,

    #[arg(short = 'e', long = "email")]
    pub email: bool,

    #[arg(short = 'r', long = "revise")]
    pub revise: bool,

    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    #[arg(long = "model")]
    pub model: Option<String>,

    pub instruct: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Help,
    Interactive { use_cot: bool },
    Ask(Prompt),
    Nothing,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
        }
    }

    fn operation(&self) -> FileOperation {
        if self.email {
            FileOperation::Email
        } else if self.revise {
            FileOperation::Revise
        } else {
            FileOperation::Default
        }
    }
}

/// Decides what a single invocation does. `piped_stdin` is only read when
/// `-q` was given and standard input is not a terminal.
pub fn resolve_action(cli: &Cli, piped_stdin: Option<String>, stdin_is_tty: bool) -> Action {
    if cli.help {
        return Action::Help;
    }

    if cli.query {
        if let Some(content) = piped_stdin.map(|s| s.trim().to_string()) {
            if !content.is_empty() {
                let prompt = if cli.instruct.is_empty() {
                    content
                } else {
                    format!("{}\n\n{}", cli.instruct.join(" "), content)
                };
                return Action::Ask(Prompt::Text {
                    prompt,
                    use_cot: cli.cot,
                });
            }
        }
    }

    if cli.agent && cli.instruct.is_empty() {
        return Action::Interactive { use_cot: cli.cot };
    }

    if let Some(first) = cli.instruct.first() {
        let path = Path::new(first);
        if path.is_file() {
            if is_image_path(path) {
                let query = cli.instruct[1..].join(" ");
                return Action::Ask(Prompt::Image {
                    path: path.to_path_buf(),
                    query: Some(query).filter(|q| !q.is_empty()),
                });
            }
            return Action::Ask(Prompt::File {
                path: path.to_path_buf(),
                operation: cli.operation(),
            });
        }

        let input = cli.instruct.join(" ");
        let operation = cli.operation();
        let prompt = if cli.agent || operation == FileOperation::Default {
            Prompt::Text {
                prompt: input,
                use_cot: cli.cot,
            }
        } else {
            Prompt::Text {
                prompt: operation.apply(&input),
                use_cot: false,
            }
        };
        return Action::Ask(prompt);
    }

    if !cli.agent && stdin_is_tty {
        Action::Help
    } else {
        Action::Nothing
    }
}
