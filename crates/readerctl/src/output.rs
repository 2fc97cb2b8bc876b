//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use readwise_reader::Document;

/// Print a document as a short human-readable block.
pub fn article(doc: &Document) {
    println!("Article {}:\n{}\n", doc.id, doc.title);
}

/// Print a dimmed informational note to stderr.
pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}
