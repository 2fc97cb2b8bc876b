//! API token handling.
//!
//! Every request to the Reader API carries an `Authorization: Token <token>`
//! header. The token type keeps the secret out of logs and debug output.

mod token;

pub use token::ApiToken;
