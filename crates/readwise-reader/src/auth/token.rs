//! API token type.

use std::fmt;

use reqwest::header::HeaderValue;

use crate::error::{Error, InvalidInputError};

/// A Readwise access token.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct ApiToken(String);

impl ApiToken {
    /// Create a new API token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or only whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(InvalidInputError::Token {
                reason: "token is empty".to_string(),
            }
            .into());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Builds the `Authorization` header value for this token.
    ///
    /// The value is marked sensitive so HTTP internals never print it.
    pub(crate) fn authorization_header(&self) -> Result<HeaderValue, Error> {
        let mut value = HeaderValue::from_str(&format!("Token {}", self.0)).map_err(|_| {
            InvalidInputError::Token {
                reason: "token contains characters not allowed in an HTTP header".to_string(),
            }
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

// Hide token value in Debug output
impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiToken").field(&"[REDACTED]").finish()
    }
}
