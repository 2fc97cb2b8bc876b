//! readwise-reader - client for the Readwise Reader document API.
//!
//! The library authenticates requests, lists documents page by page, saves
//! new documents by URL and deletes documents by ID. Listing is exposed as a
//! lazy stream that follows the server's cursor and waits out rate limits on
//! its own.
//!
//! # Example
//!
//! ```no_run
//! use readwise_reader::{ApiToken, Client, ListFilter, Location, SaveRequest};
//!
//! # async fn example() -> Result<(), readwise_reader::Error> {
//! let client = Client::new(ApiToken::new("my-token")?)?;
//!
//! let saved = client.save(&SaveRequest::new("https://example.com/post")).await?;
//! println!("saved {}", saved.id);
//!
//! let first = client.list(&ListFilter::new().location(Location::Later)).await?;
//! for doc in first.page.results {
//!     println!("{}: {}", doc.id, doc.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod http;
pub mod list;
pub mod save;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::ApiToken;
pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use document::Document;
pub use error::Error;
pub use http::DumpTarget;
pub use list::{
    FetchOutcome, ListFilter, ListResponse, Page, PageSource, PageStream, RateLimitSignal,
    paginate,
};
pub use save::SaveRequest;
pub use types::{BaseUrl, Category, DEFAULT_BASE_URL, Location};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
