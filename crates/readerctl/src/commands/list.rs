//! List documents command implementation.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::info;

use readwise_reader::{Category, Client, ListFilter, Location};

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Fetch every page instead of only the first
    #[arg(short, long)]
    pub paginate: bool,

    /// Only the document with this ID
    #[arg(long)]
    pub id: Option<String>,

    /// Only documents in this location
    #[arg(long)]
    pub location: Option<Location>,

    /// Only documents of this category
    #[arg(long)]
    pub category: Option<Category>,

    /// Only documents updated after this RFC 3339 timestamp
    #[arg(long)]
    pub updated_after: Option<DateTime<Utc>>,

    /// Include full HTML content
    #[arg(long)]
    pub with_html_content: bool,

    /// Start from this page cursor
    #[arg(long)]
    pub cursor: Option<String>,

    /// Print one JSON document per line
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    fn filter(&self) -> ListFilter {
        ListFilter {
            id: self.id.clone(),
            updated_after: self.updated_after,
            location: self.location,
            category: self.category,
            page_cursor: self.cursor.clone(),
            with_html_content: self.with_html_content,
        }
    }
}

pub async fn run(args: ListArgs, client: &Client) -> Result<()> {
    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, stopping");
            interrupt.cancel();
        }
    });

    let mut pages = client.list_paginate(args.filter(), cancel);
    let mut printed = 0usize;

    while let Some(page) = pages.next().await {
        let page = page.context("Failed to list documents")?;

        for doc in &page.results {
            if args.json {
                output::json(doc)?;
            } else {
                output::article(doc);
            }
        }
        printed += page.results.len();

        if !args.paginate {
            break;
        }
    }

    if printed == 0 {
        output::note("No documents found.");
    }

    Ok(())
}
