//! Common test utilities for zbx-client integration tests
//!
//! This module provides a mock Zabbix API endpoint built on `warp`. It
//! records every request it receives and answers through a per-test handler,
//! so tests can check both what the client sent and how it reacts.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use warp::http::HeaderMap;
use warp::hyper::body::Bytes;
use warp::Filter;

/// Turns a parsed request envelope into a raw response body
pub type Handler = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// One request as the server saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub raw: String,
    pub body: Value,
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
    pub authorization: Option<String>,
}

impl RecordedRequest {
    pub fn method(&self) -> &str {
        self.body["method"].as_str().unwrap_or_default()
    }

    /// `auth` member of the envelope; `None` when the key is absent
    pub fn auth(&self) -> Option<&Value> {
        self.body.as_object().and_then(|o| o.get("auth"))
    }
}

/// Mock Zabbix API server for client testing
pub struct MockApiServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockApiServer {
    /// Start a mock server answering through `handler`
    pub async fn with_handler<F>(handler: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        let route = warp::post()
            .and(warp::path("api_jsonrpc.php"))
            .and(warp::header::headers_cloned())
            .and(warp::body::bytes())
            .map(move |headers: HeaderMap, body: Bytes| {
                let raw = String::from_utf8_lossy(&body).into_owned();
                let parsed: Value = serde_json::from_str(&raw).unwrap_or(Value::Null);
                let header = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string)
                };

                recorded.lock().unwrap().push(RecordedRequest {
                    raw,
                    body: parsed.clone(),
                    content_type: header("content-type"),
                    user_agent: header("user-agent"),
                    authorization: header("authorization"),
                });

                warp::reply::with_header(handler(&parsed), "content-type", "application/json")
            });

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (addr, server) =
            warp::serve(route).bind_with_graceful_shutdown(([127, 0, 0, 1], 0), async {
                shutdown_rx.await.ok();
            });
        tokio::spawn(server);

        Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Start a server that behaves like Zabbix `version`
    pub async fn zabbix(version: &'static str) -> Self {
        Self::with_handler(fake_zabbix(version)).await
    }

    /// API URL of this server
    pub fn url(&self) -> String {
        format!("http://{}/api_jsonrpc.php", self.addr)
    }

    /// API URL with basic-auth credentials embedded
    pub fn url_with_credentials(&self, user: &str, password: &str) -> String {
        format!("http://{}:{}@{}/api_jsonrpc.php", user, password, self.addr)
    }

    /// Everything received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Methods received so far, in order
    pub fn methods(&self) -> Vec<String> {
        self.requests().iter().map(|r| r.method().to_string()).collect()
    }

    /// Shutdown the mock server
    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub const TOKEN: &str = "0424bd59b807674191e7d77572075f33";

/// Handler for a small Zabbix: version discovery, both login methods and an
/// authenticated `host.get`
pub fn fake_zabbix(version: &'static str) -> impl Fn(&Value) -> String + Send + Sync + 'static {
    move |request: &Value| {
        let id = request["id"].clone();
        let params = &request["params"];
        match request["method"].as_str().unwrap_or_default() {
            "APIInfo.version" => mock_response(id, json!(version)),
            "user.login" | "user.authenticate" => {
                if params["user"] == "Admin" && params["password"] == "zabbix" {
                    mock_response(id, json!(TOKEN))
                } else {
                    mock_error_response(
                        id,
                        -32602,
                        "Invalid params.",
                        "Login name or password is incorrect.",
                    )
                }
            }
            "host.get" => {
                if request["auth"] == TOKEN {
                    mock_response(id, json!([{"hostid": "10084", "host": "Zabbix server"}]))
                } else {
                    mock_error_response(id, -32602, "Invalid params.", "Not authorised.")
                }
            }
            other => mock_error_response(id, -32601, "Method not found.", other),
        }
    }
}

/// Helper to create a mock JSON-RPC response
pub fn mock_response(id: Value, result: Value) -> String {
    json!({
        "jsonrpc": "2.0",
        "result": result,
        "id": id
    })
    .to_string()
}

/// Helper to create a mock JSON-RPC error response
pub fn mock_error_response(id: Value, code: i32, message: &str, data: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "error": {
            "code": code,
            "message": message,
            "data": data
        },
        "id": id
    })
    .to_string()
}

/// A `http://127.0.0.1:<port>/` URL on which nothing is listening
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api_jsonrpc.php", addr)
}
