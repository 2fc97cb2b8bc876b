//! Single-page fetch results and response classification.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::document::Document;
use crate::error::Error;
use crate::http::BufferedResponse;

/// One batch of list results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Total number of matching documents (may exceed this page's size).
    pub count: u64,
    /// Documents in this page, in server order.
    pub results: Vec<Document>,
}

/// A decoded list response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListResponse {
    /// Cursor for the next page; `None` when this is the last page.
    pub next_page_cursor: Option<String>,
    pub page: Page,
}

/// The server asked us to wait before asking again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSignal {
    /// How long to wait, from the `Retry-After` header.
    pub retry_after: Duration,
}

/// Outcome of a single list request that did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The server returned a page.
    Page(ListResponse),
    /// The server rate limited the request; it can be retried after the delay.
    RateLimited(RateLimitSignal),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListEnvelope {
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    next_page_cursor: Option<String>,
    #[serde(default)]
    results: Option<Vec<Document>>,
}

impl From<ListEnvelope> for ListResponse {
    fn from(envelope: ListEnvelope) -> Self {
        ListResponse {
            next_page_cursor: envelope.next_page_cursor.filter(|c| !c.is_empty()),
            page: Page {
                count: envelope.count.unwrap_or_default(),
                results: envelope.results.unwrap_or_default(),
            },
        }
    }
}

/// Classify a buffered list response.
///
/// - 200: decode the page
/// - 429: parse `Retry-After` as whole seconds into a rate-limit signal
/// - anything else: [`Error::UnexpectedStatus`]
pub(crate) fn classify(response: BufferedResponse) -> Result<FetchOutcome, Error> {
    match response.status {
        StatusCode::OK => {
            let envelope: ListEnvelope = serde_json::from_slice(&response.body)?;
            let list = ListResponse::from(envelope);
            debug!(
                count = list.page.count,
                results = list.page.results.len(),
                has_next = list.next_page_cursor.is_some(),
                "Decoded list page"
            );
            Ok(FetchOutcome::Page(list))
        }
        StatusCode::TOO_MANY_REQUESTS => {
            let value = response.retry_after().unwrap_or_default();
            let seconds = value
                .trim()
                .parse::<u64>()
                .map_err(|_| Error::InvalidRetryAfter { value: value.clone() })?;
            Ok(FetchOutcome::RateLimited(RateLimitSignal {
                retry_after: Duration::from_secs(seconds),
            }))
        }
        status => Err(Error::UnexpectedStatus {
            status: status.as_u16(),
            body: response.text(),
        }),
    }
}
