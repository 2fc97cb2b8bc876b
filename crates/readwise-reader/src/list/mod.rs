//! Document listing.
//!
//! Listing is split in two layers. The single-page fetch issues one request
//! and classifies the response: a page, a rate-limit signal, or an error.
//! The paginated stream drives repeated fetches, follows the server's
//! cursor, and waits out rate limits until the caller cancels.

mod fetch;
mod filter;
mod paginate;

pub use fetch::{FetchOutcome, ListResponse, Page, RateLimitSignal};
pub use filter::ListFilter;
pub use paginate::{PageSource, PageStream, paginate};

pub(crate) use fetch::classify;
