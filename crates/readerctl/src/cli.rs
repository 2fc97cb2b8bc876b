//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::{delete::DeleteArgs, list::ListArgs, save::SaveArgs};

/// Command-line client for Readwise Reader.
#[derive(Parser, Debug)]
#[command(name = "readerctl")]
#[command(author, version = env!("READERCTL_VERSION"), about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every command.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Readwise access token
    #[arg(
        short = 't',
        long,
        env = "READERCTL_API_TOKEN",
        hide_env_values = true,
        global = true
    )]
    pub api_token: Option<String>,

    /// Config file (defaults to the per-user readerctl config)
    #[arg(short = 'c', long, env = "READERCTL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long, env = "READERCTL_BASE_URL", global = true, hide = true)]
    pub base_url: Option<String>,

    /// Dump every HTTP request and response to stderr
    #[arg(long, env = "READERCTL_DEBUG", global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List documents
    List(ListArgs),

    /// Save a document by URL
    Save(SaveArgs),

    /// Delete a document by ID
    Delete(DeleteArgs),
}
