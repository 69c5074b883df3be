//! JSON-RPC 2.0 envelopes as the remote management API speaks them
//!
//! The API only ever sees one request per HTTP exchange, so there are just
//! two message types: [`Request`] going out and [`Response`] coming back.
//!
//! # Auth
//!
//! Unlike plain JSON-RPC 2.0, requests carry the session token in a top-level
//! `auth` member. When no token is sent the key must be absent, not an empty
//! string; servers treat the two differently.
//!
//! # Dynamic results
//!
//! `params` and `result` are arbitrary JSON and are kept as
//! [`serde_json::Value`]. [`Response`] has typed accessors that fail with
//! [`Error::UnexpectedResultShape`] instead of panicking on a mismatch.

use crate::error::{Error, Result, RpcError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Protocol version tag written into every request
pub const JSONRPC_VERSION: &str = "2.0";

/// Object-shaped method parameters
pub type Params = serde_json::Map<String, Value>;

/// Outbound request envelope
///
/// # Examples
///
/// ```rust
/// use zbx_core::Request;
/// use serde_json::json;
///
/// let req = Request::new("host.get", json!({"output": "extend"}), Some("0424bd59".into()), 7);
/// assert_eq!(req.jsonrpc, "2.0");
/// assert_eq!(req.id, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Always "2.0"
    pub jsonrpc: String,
    /// Remote method name, e.g. `host.get`
    pub method: String,
    /// Method parameters
    pub params: Value,
    /// Session token; omitted from the wire when `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    /// Per-client unique request id
    pub id: i32,
}

impl Request {
    /// Create a request envelope with the version tag filled in
    pub fn new(method: impl Into<String>, params: Value, auth: Option<String>, id: i32) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            auth,
            id,
        }
    }
}

/// Inbound response envelope
///
/// Both `error` and `result` are always present after parsing. Exactly one is
/// meaningful: an absent `error` parses as `None`, an absent `result` as
/// `Value::Null`. Serializing writes `"error": null` for the success case.
///
/// # Examples
///
/// ```rust
/// use zbx_core::codec;
///
/// let resp = codec::decode_response(br#"{"jsonrpc":"2.0","result":"3.0.4","id":1}"#).unwrap();
/// assert!(!resp.is_error());
/// assert_eq!(resp.result_str().unwrap(), "3.0.4");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Protocol version tag sent by the server
    pub jsonrpc: String,
    /// Error object, if the remote reported a failure
    #[serde(default)]
    pub error: Option<RpcError>,
    /// Method result
    #[serde(default)]
    pub result: Value,
    /// Id of the request this answers; `null` on the wire reads as 0
    #[serde(deserialize_with = "null_as_zero")]
    pub id: i32,
}

// Servers answer with `"id": null` when they could not read the request.
fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_default())
}

impl Response {
    /// Create a success envelope
    pub fn success(result: Value, id: i32) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            error: None,
            result,
            id,
        }
    }

    /// Create an error envelope
    pub fn failure(error: RpcError, id: i32) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            error: Some(error),
            result: Value::Null,
            id,
        }
    }

    /// True if the envelope carries an error object
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Promote the envelope error into `Err`, or hand back the result
    pub fn into_result(self) -> Result<Value> {
        match self.error {
            Some(error) => Err(Error::Protocol(error)),
            None => Ok(self.result),
        }
    }

    /// The result as a bare string
    pub fn result_str(&self) -> Result<&str> {
        self.result
            .as_str()
            .ok_or_else(|| Error::unexpected_shape("string", value_kind(&self.result)))
    }

    /// Deserialize the result into `T`
    pub fn result_as<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.result).map_err(|e| {
            Error::unexpected_shape(
                std::any::type_name::<T>(),
                format!("{} ({})", value_kind(&self.result), e),
            )
        })
    }

    /// The result as an array
    pub fn results(&self) -> Result<&[Value]> {
        self.result
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| Error::unexpected_shape("array", value_kind(&self.result)))
    }

    /// The only element of an array result
    ///
    /// `get` methods answer with an array even when a filter matches a single
    /// object; this checks that exactly one came back.
    pub fn single_result(&self) -> Result<&Value> {
        match self.results()? {
            [one] => Ok(one),
            many => Err(Error::ExpectedOneResult(many.len())),
        }
    }

    /// An array result with at least `expected` elements
    pub fn results_at_least(&self, expected: usize) -> Result<&[Value]> {
        let results = self.results()?;
        if results.len() < expected {
            return Err(Error::ExpectedMore {
                expected,
                got: results.len(),
            });
        }
        Ok(results)
    }
}

/// Name of a JSON value's type, for error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_auth_has_no_auth_key() {
        let req = Request::new("apiinfo.version", json!({}), None, 1);
        let value = serde_json::to_value(&req).unwrap();

        assert!(value.get("auth").is_none());
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn test_request_with_auth() {
        let req = Request::new("host.get", json!({}), Some("token".into()), 2);
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["auth"], "token");
    }

    #[test]
    fn test_response_error_serializes_as_null() {
        let resp = Response::success(json!([]), 1);
        let value = serde_json::to_value(&resp).unwrap();

        assert!(value.get("error").unwrap().is_null());
    }

    #[test]
    fn test_response_missing_result_is_null() {
        let resp: Response = serde_json::from_str(
            r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid params.","data":"x"},"id":3}"#,
        )
        .unwrap();

        assert!(resp.is_error());
        assert!(resp.result.is_null());
    }

    #[test]
    fn test_response_null_id() {
        let resp: Response = serde_json::from_str(
            r#"{"jsonrpc":"2.0","error":{"code":-32700,"message":"Parse error","data":"Invalid JSON."},"id":null}"#,
        )
        .unwrap();

        assert_eq!(resp.id, 0);
    }

    #[test]
    fn test_into_result_promotes_error() {
        let resp = Response::failure(RpcError::new(-32500, "Application error.", "No permissions."), 4);
        match resp.into_result() {
            Err(Error::Protocol(e)) => assert_eq!(e.code, -32500),
            other => panic!("Expected protocol error, got {:?}", other),
        }

        let ok = Response::success(json!({"hostid": "10084"}), 5);
        assert_eq!(ok.into_result().unwrap()["hostid"], "10084");
    }

    #[test]
    fn test_result_str_shape_mismatch() {
        let resp = Response::success(json!(42), 1);
        match resp.result_str() {
            Err(Error::UnexpectedResultShape { expected, found }) => {
                assert_eq!(expected, "string");
                assert_eq!(found, "number");
            }
            other => panic!("Expected shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_result_as_typed() {
        #[derive(Deserialize)]
        struct Host {
            hostid: String,
        }

        let resp = Response::success(json!({"hostid": "10084"}), 1);
        let host: Host = resp.result_as().unwrap();
        assert_eq!(host.hostid, "10084");

        let bad = Response::success(json!("nope"), 1);
        assert!(matches!(
            bad.result_as::<Host>(),
            Err(Error::UnexpectedResultShape { .. })
        ));
    }

    #[test]
    fn test_single_result() {
        let one = Response::success(json!([{"hostid": "1"}]), 1);
        assert_eq!(one.single_result().unwrap()["hostid"], "1");

        let none = Response::success(json!([]), 1);
        assert!(matches!(none.single_result(), Err(Error::ExpectedOneResult(0))));

        let two = Response::success(json!([1, 2]), 1);
        assert!(matches!(two.single_result(), Err(Error::ExpectedOneResult(2))));

        let object = Response::success(json!({}), 1);
        assert!(matches!(
            object.single_result(),
            Err(Error::UnexpectedResultShape { .. })
        ));
    }

    #[test]
    fn test_results_at_least() {
        let resp = Response::success(json!(["a", "b"]), 1);
        assert_eq!(resp.results_at_least(2).unwrap().len(), 2);

        match resp.results_at_least(3) {
            Err(Error::ExpectedMore { expected, got }) => {
                assert_eq!(expected, 3);
                assert_eq!(got, 2);
            }
            other => panic!("Expected ExpectedMore, got {:?}", other),
        }
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(true)), "bool");
        assert_eq!(value_kind(&json!(1.5)), "number");
        assert_eq!(value_kind(&json!("s")), "string");
        assert_eq!(value_kind(&json!([])), "array");
        assert_eq!(value_kind(&json!({})), "object");
    }
}
