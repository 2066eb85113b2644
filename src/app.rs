use crate::cli::{resolve_action, Action, Cli};
use crate::config::Config;
use crate::error::AgentError;
use crate::print_help::print_help;
use crate::repl::interactive_chat;
use crate::request::Prompt;
use crate::session::Session;
use colored::Colorize;
use std::io::{self, IsTerminal, Read, Write};

/// Streams one exchange to stdout between an `AI: ` label and a newline.
/// Ctrl-C drops the in-flight request, leaving the history untouched.
pub async fn ask(session: &mut Session, prompt: Prompt) -> Result<(), AgentError> {
    let mut stdout = io::stdout();
    print!("{} ", "AI:".bold().cyan());
    stdout.flush()?;

    let finished = tokio::select! {
        outcome = session.exchange(prompt, &mut stdout) => Some(outcome?),
        _ = tokio::signal::ctrl_c() => None,
    };

    match finished {
        Some(outcome) => log::debug!(
            "exchange finished: completed={} chars={} history={}",
            outcome.completed,
            outcome.response.len(),
            session.history().len()
        ),
        None => {
            log::debug!("exchange cancelled");
            print!("\n{}", "[cancelled]".yellow());
        }
    }

    println!();
    Ok(())
}

fn read_piped_stdin(cli: &Cli, stdin_is_tty: bool) -> Result<Option<String>, AgentError> {
    if !cli.query || stdin_is_tty {
        return Ok(None);
    }
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(Some(content))
}

pub async fn process_command(cli: Cli) -> Result<(), AgentError> {
    let stdin_is_tty = io::stdin().is_terminal();
    let piped = read_piped_stdin(&cli, stdin_is_tty)?;

    let action = resolve_action(&cli, piped, stdin_is_tty);
    log::debug!("resolved action: {:?}", action);

    // Credentials are checked before any network activity.
    let mut session = match action {
        Action::Help => {
            print_help();
            return Ok(());
        }
        Action::Nothing => return Ok(()),
        _ => Session::new(Config::from_env(cli.overrides())?)?,
    };

    match action {
        Action::Interactive { use_cot } => interactive_chat(&mut session, use_cot).await,
        Action::Ask(prompt) => ask(&mut session, prompt).await,
        Action::Help | Action::Nothing => Ok(()),
    }
}
