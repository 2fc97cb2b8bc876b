//! Reader API client.

use async_trait::async_trait;
use reqwest::Method;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::auth::ApiToken;
use crate::config::ClientConfig;
use crate::document::Document;
use crate::error::{Error, InvalidInputError};
use crate::http::Transport;
use crate::list::{self, FetchOutcome, ListFilter, ListResponse, PageSource, PageStream};
use crate::save::SaveRequest;
use crate::types::BaseUrl;

/// Client for the Reader document API.
///
/// Cloning is cheap and clones share one connection pool, so a single
/// client can back any number of concurrent listings.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
    base_url: BaseUrl,
}

impl Client {
    /// Create a client for the public API with default settings.
    pub fn new(token: ApiToken) -> Result<Self, Error> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(token: ApiToken, config: ClientConfig) -> Result<Self, Error> {
        let transport = Transport::new(&token, &config)?;
        Ok(Self {
            transport,
            base_url: config.base_url,
        })
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Fetch a single page.
    ///
    /// Unlike [`list_paginate`](Self::list_paginate), a rate limit is
    /// returned to the caller as [`Error::RateLimited`].
    #[instrument(skip(self))]
    pub async fn list(&self, filter: &ListFilter) -> Result<ListResponse, Error> {
        match self.fetch_page(filter).await? {
            FetchOutcome::Page(response) => Ok(response),
            FetchOutcome::RateLimited(signal) => Err(Error::RateLimited {
                retry_after: signal.retry_after,
            }),
        }
    }

    /// Stream every page matching `filter`.
    ///
    /// Rate limits are waited out transparently. Cancelling `cancel` ends
    /// the stream with [`Error::Cancelled`]; dropping the stream simply
    /// stops it.
    pub fn list_paginate(&self, filter: ListFilter, cancel: CancellationToken) -> PageStream {
        list::paginate(self.clone(), filter, cancel)
    }

    /// Save a new document.
    ///
    /// Returns the document as reported by the server.
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub async fn save(&self, request: &SaveRequest) -> Result<Document, Error> {
        debug!("Saving document");

        let builder = self
            .transport
            .request(Method::POST, &self.base_url.endpoint("save"))
            .json(request);
        let response = self.transport.send(builder).await?;

        if !response.status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: response.status.as_u16(),
                body: response.text(),
            });
        }

        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Delete a document by ID.
    ///
    /// A 404 for an unknown or already deleted document is reported as
    /// [`Error::UnexpectedStatus`], not treated as success.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        validate_document_id(id)?;
        debug!("Deleting document");

        let builder = self
            .transport
            .request(Method::DELETE, &self.base_url.endpoint(&format!("delete/{id}")));
        let response = self.transport.send(builder).await?;

        if response.status.is_success() {
            Ok(())
        } else {
            Err(Error::UnexpectedStatus {
                status: response.status.as_u16(),
                body: response.text(),
            })
        }
    }
}

#[async_trait]
impl PageSource for Client {
    async fn fetch_page(&self, filter: &ListFilter) -> Result<FetchOutcome, Error> {
        let builder = self
            .transport
            .request(Method::GET, &self.base_url.endpoint("list"))
            .query(filter);
        let response = self.transport.send(builder).await?;
        list::classify(response)
    }
}

fn validate_document_id(id: &str) -> Result<(), Error> {
    let reason = if id.is_empty() {
        "must not be empty"
    } else if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        "may only contain letters, digits, '-' and '_'"
    } else {
        return Ok(());
    };

    Err(InvalidInputError::DocumentId {
        value: id.to_string(),
        reason: reason.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_ids_validated() {
        assert!(validate_document_id("01gwfvp9pyaabcdgmx14f6ha0").is_ok());
        assert!(validate_document_id("").is_err());
        assert!(validate_document_id("../list").is_err());
        assert!(validate_document_id("a b").is_err());
    }

    #[test]
    fn client_uses_configured_base_url() {
        let config = ClientConfig::builder()
            .base_url(BaseUrl::new("http://localhost:1234/api").unwrap())
            .build();
        let client = Client::with_config(ApiToken::new("t").unwrap(), config).unwrap();
        assert_eq!(client.base_url().endpoint("list"), "http://localhost:1234/api/list");
    }
}
