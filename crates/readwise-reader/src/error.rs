//! Error types for the readwise-reader library.
//!
//! A single error enum covers transport failures, response classification
//! failures, decoding, caller cancellation and input validation. Rate
//! limiting has its own variant so single-shot callers can back off
//! themselves; the paginated stream never surfaces it.

use std::time::Duration;

use thiserror::Error;

/// The unified error type for readwise-reader operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server rate limited the request but sent an unusable `Retry-After`.
    #[error("invalid retry-after header: {value:?}")]
    InvalidRetryAfter { value: String },

    /// The server answered with a status this client does not handle.
    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16, body: String },

    /// A successful response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server asked the caller to wait before retrying.
    #[error("rate limited, retry after {}s", .retry_after.as_secs())]
    RateLimited { retry_after: Duration },

    /// The caller cancelled the operation.
    #[error("operation cancelled")]
    Cancelled,

    /// Input validation errors (base URL, token, document ID).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::RateLimited { .. } | Error::InvalidRetryAfter { .. } => Some(429),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The HTTP client could not be constructed.
    #[error("client setup failed: {message}")]
    Builder { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_builder() {
            TransportError::Builder {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Empty or unusable API token.
    #[error("invalid API token: {reason}")]
    Token { reason: String },

    /// Invalid document identifier.
    #[error("invalid document ID '{value}': {reason}")]
    DocumentId { value: String, reason: String },

    /// Unknown enumeration value (location, category).
    #[error("invalid {kind} '{value}', expected one of: {expected}")]
    Variant {
        kind: &'static str,
        value: String,
        expected: String,
    },
}
