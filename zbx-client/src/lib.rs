//! Zabbix JSON-RPC 2.0 client over HTTP
//!
//! This crate sends Zabbix API calls as JSON-RPC 2.0 envelopes, one HTTP POST
//! each, and keeps the small amount of session state the API needs.
//!
//! # Core Features
//!
//! - **Calls**: any API method with any serializable params
//! - **Error promotion**: API-reported errors as data or as `Err`
//! - **Login**: version-aware choice of `user.login` / `user.authenticate`
//! - **Version gating**: `is_at_least` against the discovered server version
//! - **Pluggable transport**: `reqwest` by default, any [`Transport`] otherwise
//! - **Wire logging**: verbatim request/response bodies for debugging
//! - **Observability**: OpenTelemetry metrics and `tracing` spans
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zbx_client::ZbxClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ZbxClient::new("http://zabbix.local/api_jsonrpc.php");
//!
//!     client.login("Admin", "zabbix").await?;
//!     println!("Server version: {}", client.version_info().await);
//!
//!     let response = client
//!         .call_with_error("host.get", json!({"output": ["hostid", "host"]}))
//!         .await?;
//!     for host in response.results()? {
//!         println!("{}", host["host"]);
//!     }
//!
//!     if client.is_at_least(5, 4, 0).await {
//!         // newer API only
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # With Configuration
//!
//! ```rust,no_run
//! use zbx_client::ClientBuilder;
//! use std::time::Duration;
//!
//! # async fn example() -> zbx_core::Result<()> {
//! let client = ClientBuilder::new("http://zabbix.local/api_jsonrpc.php")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_tracing_wire_log()
//!     .with_default_observability()
//!     .service_name("inventory-sync")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod client;
mod client_builder;
mod diagnostics;
mod dispatcher;
mod metrics;
mod session;
mod transport;

pub use client::ZbxClient;
pub use client_builder::ClientBuilder;
pub use diagnostics::{TracingWireLog, WireLog};
pub use dispatcher::{CONTENT_TYPE, USER_AGENT};
pub use metrics::ClientMetrics;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport};
