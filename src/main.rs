mod app;
mod chat;
mod cli;
mod config;
mod constants;
mod error;
mod files;
mod history;
mod print_help;
mod repl;
mod request;
mod session;
mod stream;
mod utils;

use crate::app::process_command;
use crate::cli::Cli;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    match process_command(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
