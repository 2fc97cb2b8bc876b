//! HTTP plumbing shared by every API call.
//!
//! All requests go through [`Transport`], which stamps the authorization
//! header, buffers the full response body, and optionally writes a dump of
//! each exchange to a configured [`DumpTarget`].

mod dump;
mod transport;

pub use dump::DumpTarget;
pub(crate) use transport::{BufferedResponse, Transport};
