//! Envelope codec
//!
//! Turns [`Request`] into request bytes and response bytes into [`Response`].
//! The codec only checks the envelope shape; whether a response carries an
//! `error` or a `result` is left to the caller.
//!
//! # Error mapping
//!
//! - Encoding failures → [`Error::Serialization`]
//! - Bytes that are not JSON, or JSON that is not an envelope →
//!   [`Error::MalformedResponse`] (when decoding responses)
//!
//! # Examples
//!
//! ```rust
//! use zbx_core::{codec, Request};
//! use serde_json::json;
//!
//! let request = Request::new("apiinfo.version", json!({}), None, 1);
//! let bytes = codec::encode_request(&request).unwrap();
//! assert!(!String::from_utf8(bytes).unwrap().contains("auth"));
//! ```

use crate::error::{Error, Result};
use crate::types::{Request, Response};

/// Encode a request envelope to JSON bytes
pub fn encode_request(req: &Request) -> Result<Vec<u8>> {
    serde_json::to_vec(req).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode a response envelope from JSON bytes
///
/// Fails with [`Error::MalformedResponse`] if the bytes are not JSON or are
/// missing the envelope's `jsonrpc`/`id` members. An HTML error page from a
/// misconfigured URL ends up here.
pub fn decode_response(data: &[u8]) -> Result<Response> {
    serde_json::from_slice(data).map_err(|e| Error::MalformedResponse(e.to_string()))
}

/// Encode a response envelope to JSON bytes
///
/// Clients never send responses; this exists for fixtures and wire tooling.
pub fn encode_response(resp: &Response) -> Result<Vec<u8>> {
    serde_json::to_vec(resp).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode a request envelope from JSON bytes
pub fn decode_request(data: &[u8]) -> Result<Request> {
    serde_json::from_slice(data).map_err(|e| Error::Serialization(e.to_string()))
}
