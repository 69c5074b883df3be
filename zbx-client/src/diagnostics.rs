//! Verbatim wire logging
//!
//! A [`WireLog`] receives every request body the dispatcher sends and every
//! response body it reads, byte for byte. It is for auditing and debugging
//! only: methods return nothing and cannot influence the call.
//!
//! Request bodies include the `auth` token and, for login, the password.
//! Route them somewhere appropriate.

use std::borrow::Cow;

/// Observer for raw request/response bodies
pub trait WireLog: Send + Sync {
    /// Called with the encoded request before it is sent
    fn request(&self, body: &[u8]);

    /// Called with the raw response body
    fn response(&self, body: &[u8]);

    /// Called when the transport failed and there is no response body
    fn failure(&self, error: &str) {
        let _ = error;
    }
}

/// Emits wire bodies as `debug` events on the `zbx::wire` target
///
/// Enable with a filter such as `RUST_LOG=zbx::wire=debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWireLog;

impl TracingWireLog {
    pub fn new() -> Self {
        Self
    }
}

fn lossy(body: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(body)
}

impl WireLog for TracingWireLog {
    fn request(&self, body: &[u8]) {
        tracing::debug!(target: "zbx::wire", body = %lossy(body), "Request");
    }

    fn response(&self, body: &[u8]) {
        tracing::debug!(target: "zbx::wire", body = %lossy(body), "Response");
    }

    fn failure(&self, error: &str) {
        tracing::debug!(target: "zbx::wire", error = %error, "Error");
    }
}
