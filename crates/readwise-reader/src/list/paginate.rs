//! Paginated listing as a lazy stream of pages.
//!
//! # Example
//!
//! ```no_run
//! use futures_util::StreamExt;
//! use readwise_reader::{ApiToken, Client, ListFilter};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), readwise_reader::Error> {
//! let client = Client::new(ApiToken::new("my-token")?)?;
//! let mut pages = client.list_paginate(ListFilter::new(), CancellationToken::new());
//!
//! while let Some(page) = pages.next().await {
//!     for doc in page?.results {
//!         println!("{}: {}", doc.id, doc.title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use futures_util::Stream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::Error;

use super::fetch::{FetchOutcome, Page};
use super::filter::ListFilter;

/// Something that can fetch a single page of list results.
///
/// Implementations issue exactly one request per call and never retry;
/// retrying is left to [`paginate`].
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page `filter` points at.
    async fn fetch_page(&self, filter: &ListFilter) -> Result<FetchOutcome, Error>;
}

/// A stream of list pages.
///
/// Pages arrive in server order. The stream ends after the last page, or
/// after yielding a single error. Dropping it stops pagination; nothing is
/// fetched until the next item is polled.
pub struct PageStream {
    inner: Pin<Box<dyn Stream<Item = Result<Page, Error>> + Send>>,
}

impl PageStream {
    fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Page, Error>> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
        }
    }
}

impl Stream for PageStream {
    type Item = Result<Page, Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl std::fmt::Debug for PageStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageStream").finish_non_exhaustive()
    }
}

/// Walk every page of `filter`, starting at its cursor.
///
/// Rate-limit signals are absorbed: the stream sleeps for exactly the
/// server's `Retry-After` and repeats the request with the same cursor, as
/// many times as it takes. Only `cancel` bounds this. Cancellation observed
/// before a request, during a request, or during a wait ends the stream
/// with [`Error::Cancelled`].
pub fn paginate<S>(source: S, filter: ListFilter, cancel: CancellationToken) -> PageStream
where
    S: PageSource + 'static,
{
    let stream = async_stream::stream! {
        let mut cursor = filter.start_cursor();

        loop {
            if cancel.is_cancelled() {
                yield Err(Error::Cancelled);
                break;
            }

            let request = filter.at_cursor(cursor.clone());
            debug!(cursor = cursor.as_deref().unwrap_or(""), "Fetching list page");

            let outcome = tokio::select! {
                biased;
                outcome = source.fetch_page(&request) => outcome,
                () = cancel.cancelled() => Err(Error::Cancelled),
            };

            match outcome {
                Ok(FetchOutcome::Page(response)) => {
                    let next = response.next_page_cursor;
                    yield Ok(response.page);

                    match next {
                        Some(next) => cursor = Some(next),
                        None => break,
                    }
                }
                Ok(FetchOutcome::RateLimited(signal)) => {
                    if cancel.is_cancelled() {
                        yield Err(Error::Cancelled);
                        break;
                    }

                    warn!(
                        retry_after_secs = signal.retry_after.as_secs(),
                        cursor = cursor.as_deref().unwrap_or(""),
                        "Rate limited, waiting before retrying"
                    );

                    let interrupted = tokio::select! {
                        () = tokio::time::sleep(signal.retry_after) => false,
                        () = cancel.cancelled() => true,
                    };

                    if interrupted {
                        yield Err(Error::Cancelled);
                        break;
                    }
                }
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
    };

    PageStream::new(stream)
}
