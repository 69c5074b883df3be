//! HTTP transport seam
//!
//! The dispatcher never talks to `reqwest` directly. It builds an
//! [`HttpRequest`] and hands it to a [`Transport`], so callers can swap in
//! their own client (custom TLS roots, proxies, timeouts) or a test double.
//!
//! [`HttpTransport`] is the default and wraps a `reqwest::Client`.
//!
//! # Implementing a transport
//!
//! ```rust
//! use async_trait::async_trait;
//! use zbx_client::{HttpRequest, HttpResponse, Transport};
//!
//! struct Canned(&'static str);
//!
//! #[async_trait]
//! impl Transport for Canned {
//!     async fn post(&self, _request: HttpRequest) -> zbx_core::Result<HttpResponse> {
//!         Ok(HttpResponse { status: 200, body: self.0.as_bytes().to_vec() })
//!     }
//! }
//! ```

use async_trait::async_trait;
use std::time::Duration;
use zbx_core::{Error, Result};

/// A fully built POST
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Target URL, possibly with `user:password@` credentials
    pub url: String,
    /// Header name/value pairs
    pub headers: Vec<(&'static str, String)>,
    /// Encoded request envelope
    pub body: Vec<u8>,
}

/// What came back
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs one HTTP POST
///
/// Implementations must map every network-level failure (refused connection,
/// timeout, TLS, interrupted body) to [`Error::Transport`] and must not
/// interpret the body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Default transport over `reqwest`
///
/// Credentials embedded in the URL are sent as HTTP basic auth by reqwest.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Transport with reqwest's default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl From<reqwest::Client> for HttpTransport {
    fn from(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
