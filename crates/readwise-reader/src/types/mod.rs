//! Validated value types used across the client.

mod base_url;
mod category;
mod location;

pub use base_url::{BaseUrl, DEFAULT_BASE_URL};
pub use category::Category;
pub use location::Location;
