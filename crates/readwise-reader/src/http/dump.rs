//! Request/response dumps for debugging.

use std::fmt::{self, Write as _};
use std::io::Write;
use std::sync::{Arc, Mutex};

use reqwest::header::{AUTHORIZATION, HeaderMap};
use reqwest::{Request, StatusCode, Version};
use tracing::warn;

/// Where HTTP exchange dumps are written.
///
/// Dumping is chosen when the client is built, never from process state, so
/// the same configuration always behaves the same way.
#[derive(Clone, Default)]
pub enum DumpTarget {
    /// No dumps.
    #[default]
    Off,

    /// Dumps go to the process's standard error.
    Stderr,

    /// Dumps go to a caller-provided writer.
    Writer(Arc<Mutex<dyn Write + Send>>),
}

impl DumpTarget {
    /// Dump into the given writer.
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        DumpTarget::Writer(Arc::new(Mutex::new(writer)))
    }

    /// Whether dumps are produced at all.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, DumpTarget::Off)
    }

    pub(crate) fn emit(&self, text: &str) {
        let result = match self {
            DumpTarget::Off => return,
            DumpTarget::Stderr => std::io::stderr().lock().write_all(text.as_bytes()),
            DumpTarget::Writer(writer) => match writer.lock() {
                Ok(mut writer) => writer.write_all(text.as_bytes()),
                Err(_) => {
                    warn!("dump writer lock poisoned, dropping dump");
                    return;
                }
            },
        };

        if let Err(e) = result {
            warn!(error = %e, "Failed to write HTTP dump");
        }
    }
}

impl fmt::Debug for DumpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpTarget::Off => f.write_str("Off"),
            DumpTarget::Stderr => f.write_str("Stderr"),
            DumpTarget::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// Renders an outgoing request in HTTP/1.1 wire form.
pub(crate) fn render_request(request: &Request) -> String {
    let url = request.url();
    let mut target = url.path().to_string();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{} {} {:?}", request.method(), target, request.version());
    if let Some(host) = url.host_str() {
        match url.port() {
            Some(port) => {
                let _ = writeln!(out, "Host: {host}:{port}");
            }
            None => {
                let _ = writeln!(out, "Host: {host}");
            }
        }
    }
    render_headers(&mut out, request.headers());
    out.push('\n');
    if let Some(body) = request.body().and_then(|b| b.as_bytes()) {
        out.push_str(&String::from_utf8_lossy(body));
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Renders a buffered response in HTTP/1.1 wire form.
pub(crate) fn render_response(
    version: Version,
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:?} {}", version, status);
    render_headers(&mut out, headers);
    out.push('\n');
    out.push_str(&String::from_utf8_lossy(body));
    out.push_str("\n\n");
    out
}

fn render_headers(out: &mut String, headers: &HeaderMap) {
    for (name, value) in headers {
        if name == AUTHORIZATION {
            let _ = writeln!(out, "{}: Token [REDACTED]", name);
        } else {
            let _ = writeln!(out, "{}: {}", name, String::from_utf8_lossy(value.as_bytes()));
        }
    }
}
