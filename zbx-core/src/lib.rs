//! Envelope types, codec and version handling for zbx
//!
//! This crate holds everything about the Zabbix JSON-RPC protocol that does
//! not need a network:
//!
//! - **Types**: request/response envelopes and typed result access
//! - **Codec**: envelope encoding and decoding
//! - **Error handling**: one error type covering every failure layer
//! - **Version**: the `major.minor.release` triple and its comparison
//! - **Methods**: bootstrap method names and version-gated login selection
//! - **Observability**: OpenTelemetry pipeline setup
//!
//! The HTTP side lives in `zbx-client`.
//!
//! # Example
//!
//! ```rust
//! use zbx_core::{codec, Request, Version, LoginMethod};
//! use serde_json::json;
//!
//! let request = Request::new("apiinfo.version", json!({}), None, 1);
//! let bytes = codec::encode_request(&request).unwrap();
//!
//! let response = codec::decode_response(br#"{"jsonrpc":"2.0","result":"2.2.0","id":1}"#).unwrap();
//! let version: Version = response.result_str().unwrap().parse().unwrap();
//! assert_eq!(LoginMethod::for_version(&version).as_str(), "user.authenticate");
//! # let _ = bytes;
//! ```

pub mod codec;
pub mod error;
pub mod methods;
pub mod observability;
pub mod types;
pub mod version;

pub use error::{Error, Result, RpcError};
pub use methods::{LoginMethod, VERSION_METHOD};
pub use observability::{init_observability, shutdown_observability, ObservabilityConfig};
pub use types::{Params, Request, Response, JSONRPC_VERSION};
pub use version::Version;
