//! readerctl - command-line client for Readwise Reader.
//!
//! This is a thin wrapper over the `readwise-reader` library: it resolves
//! the API token and settings, then maps each subcommand onto one library
//! call.

mod cli;
mod commands;
mod config;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;
use config::{MissingToken, Settings};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => {
                    print_help();
                    ExitCode::FAILURE
                }
            };
        }
    };

    init_logging(cli.verbose, cli.json_logs);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            if err.is::<MissingToken>() {
                print_help();
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        print_help();
        return Ok(());
    };

    let settings = Settings::resolve(&cli.global)?;
    commands::handle(command, &settings).await
}

/// Full command help, on stderr.
fn print_help() {
    eprintln!("\n{}", Cli::command().render_help());
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
