//! Request dispatch
//!
//! The dispatcher owns a single HTTP exchange: it numbers the request,
//! decides whether the session token goes along, encodes the envelope, POSTs
//! it through the transport and returns the raw response body. Decoding the
//! body is the caller's job.
//!
//! # Ids
//!
//! Ids come from an atomic counter, so concurrent calls on one client never
//! share an id. The first id is 1.
//!
//! # Auth
//!
//! The token is attached to every request except version discovery, which
//! has to work before login and after the token has expired.

use crate::diagnostics::WireLog;
use crate::transport::{HttpRequest, Transport};
use serde_json::Value;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use zbx_core::methods::is_version_method;
use zbx_core::{codec, Error, Request, Result};

/// `Content-Type` of every request
pub const CONTENT_TYPE: &str = "application/json-rpc";

/// `User-Agent` of every request
pub const USER_AGENT: &str = concat!("zbx/", env!("CARGO_PKG_VERSION"));

/// Builds, numbers and sends request envelopes
pub(crate) struct Dispatcher {
    url: String,
    transport: RwLock<Arc<dyn Transport>>,
    last_id: AtomicI32,
    wire_log: Option<Arc<dyn WireLog>>,
}

impl Dispatcher {
    pub(crate) fn new(
        url: String,
        transport: Arc<dyn Transport>,
        wire_log: Option<Arc<dyn WireLog>>,
    ) -> Self {
        Self {
            url,
            transport: RwLock::new(transport),
            last_id: AtomicI32::new(0),
            wire_log,
        }
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    /// Replace the transport; in-flight calls finish on the old one
    pub(crate) async fn set_transport(&self, transport: Arc<dyn Transport>) {
        *self.transport.write().await = transport;
    }

    /// Next request id
    pub(crate) fn next_id(&self) -> i32 {
        self.last_id.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Send one request and return the raw response body
    pub(crate) async fn send(&self, method: &str, params: Value, token: Option<&str>) -> Result<Vec<u8>> {
        let id = self.next_id();
        let request = Request::new(method, params, auth_for(method, token), id);
        let body = codec::encode_request(&request)?;

        if let Some(log) = &self.wire_log {
            log.request(&body);
        }

        let http_request = HttpRequest {
            url: self.url.clone(),
            headers: vec![
                ("Content-Type", CONTENT_TYPE.to_string()),
                ("User-Agent", USER_AGENT.to_string()),
            ],
            body,
        };

        // Clone the handle out so the lock is not held across the exchange.
        let transport = self.transport.read().await.clone();
        let response = match transport.post(http_request).await {
            Ok(response) => response,
            Err(e) => {
                let e = match e {
                    Error::Transport(_) => e,
                    other => Error::Transport(other.to_string()),
                };
                if let Some(log) = &self.wire_log {
                    log.failure(&e.to_string());
                }
                tracing::debug!(id, method, error = %e, "Transport failed");
                return Err(e);
            }
        };

        tracing::debug!(id, method, status = response.status, bytes = response.body.len(), "Response received");

        if let Some(log) = &self.wire_log {
            log.response(&response.body);
        }

        Ok(response.body)
    }
}

/// Token to attach to a request for `method`, if any
pub(crate) fn auth_for(method: &str, token: Option<&str>) -> Option<String> {
    if is_version_method(method) {
        return None;
    }
    token.filter(|t| !t.is_empty()).map(str::to_string)
}
