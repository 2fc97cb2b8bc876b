//! Subcommand implementations.

pub mod delete;
pub mod list;
pub mod save;

use anyhow::Result;

use crate::cli::Commands;
use crate::config::Settings;

pub async fn handle(command: Commands, settings: &Settings) -> Result<()> {
    let client = settings.client()?;

    match command {
        Commands::List(args) => list::run(args, &client).await,
        Commands::Save(args) => save::run(args, &client).await,
        Commands::Delete(args) => delete::run(args, &client).await,
    }
}
