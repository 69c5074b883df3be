//! Client builder for configuring transport, diagnostics and observability
//!
//! The `ClientBuilder` provides a fluent API for configuring a [`ZbxClient`]
//! before first use. It allows you to:
//! - Replace the HTTP transport or the underlying `reqwest::Client`
//! - Set a request timeout on the default transport
//! - Attach a wire log for verbatim request/response bodies
//! - Start with a saved auth token
//! - Configure observability (OpenTelemetry)
//!
//! # Examples
//!
//! ```rust,no_run
//! use zbx_client::ClientBuilder;
//! use std::time::Duration;
//!
//! # async fn example() -> zbx_core::Result<()> {
//! // With a timeout and wire logging
//! let client = ClientBuilder::new("http://zabbix.local/api_jsonrpc.php")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_tracing_wire_log()
//!     .build()?;
//!
//! // With observability
//! let client2 = ClientBuilder::new("http://zabbix.local/api_jsonrpc.php")
//!     .with_default_observability()
//!     .service_name("inventory-sync")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use crate::diagnostics::{TracingWireLog, WireLog};
use crate::transport::{HttpTransport, Transport};
use crate::{ClientMetrics, ZbxClient};
use std::sync::Arc;
use std::time::Duration;
use zbx_core::{ObservabilityConfig, Result};

enum TransportChoice {
    Default,
    Reqwest(reqwest::Client),
    Custom(Arc<dyn Transport>),
}

/// Builder for configuring and creating a ZbxClient
pub struct ClientBuilder {
    url: String,
    transport: TransportChoice,
    timeout: Option<Duration>,
    wire_log: Option<Arc<dyn WireLog>>,
    auth: Option<String>,
    observability_config: Option<ObservabilityConfig>,
    service_name: Option<String>,
}

impl ClientBuilder {
    /// Create a new client builder
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            transport: TransportChoice::Default,
            timeout: None,
            wire_log: None,
            auth: None,
            observability_config: None,
            service_name: None,
        }
    }

    /// Send requests through a custom transport
    ///
    /// Overrides `with_http_client` and makes `with_timeout` a no-op.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = TransportChoice::Custom(Arc::new(transport));
        self
    }

    /// Send requests through a preconfigured `reqwest::Client`
    ///
    /// Makes `with_timeout` a no-op; configure the timeout on the client.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.transport = TransportChoice::Reqwest(client);
        self
    }

    /// Request timeout for the default transport
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Receive every request and response body verbatim
    pub fn with_wire_log(mut self, log: impl WireLog + 'static) -> Self {
        self.wire_log = Some(Arc::new(log));
        self
    }

    /// Emit wire bodies as `debug` events on the `zbx::wire` target
    pub fn with_tracing_wire_log(self) -> Self {
        self.with_wire_log(TracingWireLog::new())
    }

    /// Start with a known auth token instead of logging in
    pub fn with_auth(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(token.into());
        self
    }

    /// Enable OpenTelemetry observability with custom configuration
    pub fn with_observability(mut self, config: ObservabilityConfig) -> Self {
        self.observability_config = Some(config);
        self
    }

    /// Enable OpenTelemetry observability with default configuration
    pub fn with_default_observability(mut self) -> Self {
        self.observability_config = Some(ObservabilityConfig::default());
        self
    }

    /// Set service name for observability (used if observability is enabled)
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    /// Build the client
    ///
    /// No request is sent. Fails if the HTTP client cannot be built or the
    /// observability pipeline cannot be started.
    pub fn build(self) -> Result<ZbxClient> {
        let metrics = if let Some(mut config) = self.observability_config {
            if let Some(name) = self.service_name {
                config.service_name = name;
            }

            zbx_core::init_observability(config.clone())?;

            Some(Arc::new(ClientMetrics::new(config.service_name)))
        } else {
            None
        };

        let transport: Arc<dyn Transport> = match self.transport {
            TransportChoice::Custom(transport) => transport,
            TransportChoice::Reqwest(client) => Arc::new(HttpTransport::from(client)),
            TransportChoice::Default => match self.timeout {
                Some(timeout) => Arc::new(HttpTransport::with_timeout(timeout)?),
                None => Arc::new(HttpTransport::new()),
            },
        };

        tracing::debug!(url = %self.url, "Client built");

        Ok(ZbxClient::from_parts(
            self.url,
            transport,
            self.wire_log,
            self.auth,
            metrics,
        ))
    }
}
