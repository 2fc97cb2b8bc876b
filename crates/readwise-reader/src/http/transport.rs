//! Authorizing transport with optional exchange dumps.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Method, RequestBuilder, StatusCode};
use tracing::{debug, trace};

use crate::auth::ApiToken;
use crate::config::ClientConfig;
use crate::error::Error;

use super::dump::{self, DumpTarget};

/// A fully read HTTP response.
///
/// The body is buffered before anything inspects it, so the connection is
/// released before decoding starts and dumps never consume the body.
#[derive(Debug, Clone)]
pub(crate) struct BufferedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl BufferedResponse {
    /// Returns the raw `Retry-After` header value, if present.
    pub fn retry_after(&self) -> Option<String> {
        self.headers
            .get(RETRY_AFTER)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
    }

    /// Returns the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP transport that authorizes every request.
///
/// Holds no per-request state; clones share the underlying connection pool
/// and can be used from any number of concurrent tasks.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    client: reqwest::Client,
    authorization: HeaderValue,
    dump: DumpTarget,
}

impl Transport {
    /// Create a transport for the given token and configuration.
    pub fn new(token: &ApiToken, config: &ClientConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            authorization: token.authorization_header()?,
            dump: config.dump.clone(),
        })
    }

    /// Start building a request for the given method and URL.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Send a request and buffer its response.
    ///
    /// Network errors are returned unchanged; status codes are left for the
    /// caller to classify.
    pub async fn send(&self, builder: RequestBuilder) -> Result<BufferedResponse, Error> {
        let mut request = builder.build()?;
        request
            .headers_mut()
            .insert(AUTHORIZATION, self.authorization.clone());

        debug!(method = %request.method(), path = request.url().path(), "Sending request");

        if self.dump.is_enabled() {
            self.dump.emit(&dump::render_request(&request));
        }

        let response = self.client.execute(request).await?;
        let status = response.status();
        let version = response.version();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        trace!(status = %status, bytes = body.len(), "Received response");

        if self.dump.is_enabled() {
            self.dump
                .emit(&dump::render_response(version, status, &headers, &body));
        }

        Ok(BufferedResponse {
            status,
            headers,
            body,
        })
    }
}
