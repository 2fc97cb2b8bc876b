//! Delete document command implementation.

use anyhow::{Context, Result};
use clap::Args;

use readwise_reader::Client;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// ID of the document to delete
    pub article_id: String,
}

pub async fn run(args: DeleteArgs, client: &Client) -> Result<()> {
    client
        .delete(&args.article_id)
        .await
        .context("Failed to delete document")?;

    println!("Deleted article {}", args.article_id);

    Ok(())
}
