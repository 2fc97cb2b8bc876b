//! Save document command implementation.

use anyhow::{Context, Result};
use clap::Args;

use readwise_reader::{Category, Client, Location, SaveRequest};

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// URL of the document to save
    pub url: String,

    /// Override the document title
    #[arg(long)]
    pub title: Option<String>,

    /// Override the document author
    #[arg(long)]
    pub author: Option<String>,

    /// Location to save into
    #[arg(long)]
    pub location: Option<Location>,

    /// Category to save as
    #[arg(long)]
    pub category: Option<Category>,

    /// Tag to apply (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

impl SaveArgs {
    fn request(&self) -> SaveRequest {
        SaveRequest {
            url: self.url.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            location: self.location,
            category: self.category,
            tags: self.tags.clone(),
            ..Default::default()
        }
    }
}

pub async fn run(args: SaveArgs, client: &Client) -> Result<()> {
    let doc = client
        .save(&args.request())
        .await
        .context("Failed to save document")?;

    println!("Saved document {}: {}", doc.id, doc.url);

    Ok(())
}
