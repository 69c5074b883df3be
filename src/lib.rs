//! zbx - Zabbix API over JSON-RPC 2.0
//!
//! This is the main convenience crate that re-exports the zbx sub-crates.
//! Use this crate if you want a single dependency for talking to a Zabbix
//! server.
//!
//! # Architecture
//!
//! zbx is organized into two crates:
//!
//! - **zbx-core**: Envelope types, codec, error handling, version, observability
//! - **zbx-client**: HTTP client, session state, login and version discovery
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zbx::ZbxClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ZbxClient::new("http://zabbix.local/api_jsonrpc.php");
//!     client.login("Admin", "zabbix").await?;
//!
//!     let response = client
//!         .call_with_error("host.get", json!({"output": "extend"}))
//!         .await?;
//!     println!("Hosts: {}", response.result);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! ```rust,no_run
//! use zbx::{Error, ZbxClient};
//!
//! # async fn example(client: ZbxClient) {
//! match client.call_with_error("host.get", zbx::Params::new()).await {
//!     Ok(response) => println!("{}", response.result),
//!     Err(Error::Protocol(e)) => eprintln!("API said no: {}", e),
//!     Err(e) if e.retryable() => eprintln!("Try again later: {}", e),
//!     Err(e) => eprintln!("Failed: {}", e),
//! }
//! # }
//! ```

pub use zbx_client as client;
pub use zbx_core as core;

// Convenience re-exports of the most commonly used types
pub use zbx_client::{ClientBuilder, HttpTransport, Transport, TracingWireLog, WireLog, ZbxClient};
pub use zbx_core::{
    Error, LoginMethod, ObservabilityConfig, Params, Response, Result, RpcError, Version,
};
