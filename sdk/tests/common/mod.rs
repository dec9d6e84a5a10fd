//! In-process mock of the AgentPay platform for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use agentspay_sdk::{AgentPayClient, ClientConfig};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::Value;

/// A request as seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
enum Reply {
    Json(StatusCode, Value),
    Empty(StatusCode),
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<(Method, String), Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Mock platform serving canned replies per method and path.
pub struct MockPlatform {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockPlatform {
    /// Starts an empty mock on an ephemeral port.
    pub async fn start() -> Self {
        init_tracing();

        let state = Arc::new(MockState::default());
        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));
        let base_url = spawn(app).await;

        Self { base_url, state }
    }

    /// Replies to `method path` with a JSON body.
    pub fn on(&self, method: Method, path: &str, status: StatusCode, body: Value) -> &Self {
        self.state
            .routes
            .lock()
            .expect("routes lock")
            .insert((method, path.to_string()), Reply::Json(status, body));
        self
    }

    /// Replies to `method path` with an empty body.
    pub fn on_empty(&self, method: Method, path: &str, status: StatusCode) -> &Self {
        self.state
            .routes
            .lock()
            .expect("routes lock")
            .insert((method, path.to_string()), Reply::Empty(status));
        self
    }

    /// Returns every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }

    /// Returns the last request received.
    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("at least one request")
    }

    /// Builds a client without credentials.
    pub fn client(&self) -> AgentPayClient {
        AgentPayClient::with_base_url(&self.base_url).expect("client creation")
    }

    /// Builds a client with an API key.
    pub fn client_with_key(&self, key: &str) -> AgentPayClient {
        AgentPayClient::new(ClientConfig::new(&self.base_url).with_api_key(key))
            .expect("client creation")
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().expect("requests lock").push(RecordedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header("authorization"),
        api_key: header("x-api-key"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).ok(),
    });

    let reply = state
        .routes
        .lock()
        .expect("routes lock")
        .get(&(method, uri.path().to_string()))
        .cloned();

    match reply {
        Some(Reply::Json(status, body)) => (status, Json(body)).into_response(),
        Some(Reply::Empty(status)) => status.into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "no such route" })),
        )
            .into_response(),
    }
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });

    format!("http://{}", addr)
}

/// Returns a base URL nothing listens on.
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn wallet_json(id: &str) -> Value {
    serde_json::json!({
        "id": id,
        "publicKey": "pub_key_abc",
        "address": "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
        "createdAt": "2026-02-14T12:00:00Z",
        "balance": 100000,
        "balanceMnee": 5000
    })
}

pub fn service_json(id: &str, category: &str, price: u64) -> Value {
    serde_json::json!({
        "id": id,
        "agentId": "wallet_123",
        "name": "TextAnalyzer",
        "description": "NLP service",
        "category": category,
        "price": price,
        "currency": "BSV",
        "endpoint": "https://agent.com/analyze",
        "method": "POST",
        "active": true,
        "timeout": 30,
        "disputeWindow": 30,
        "createdAt": "2026-02-14T12:00:00Z",
        "updatedAt": "2026-02-14T12:00:00Z"
    })
}

pub fn payment_json(id: &str) -> Value {
    serde_json::json!({
        "id": id,
        "serviceId": "service_456",
        "buyerWalletId": "wallet_buyer",
        "sellerWalletId": "wallet_seller",
        "amount": 1000,
        "platformFee": 20,
        "currency": "BSV",
        "status": "escrowed",
        "createdAt": "2026-02-14T12:00:00Z"
    })
}

pub fn receipt_json(id: &str, payment_id: &str) -> Value {
    serde_json::json!({
        "id": id,
        "paymentId": payment_id,
        "serviceId": "service_456",
        "inputHash": "9f86d081884c7d65",
        "outputHash": "60303ae22b998861",
        "timestamp": 1_771_070_400_000_i64,
        "executionTimeMs": 250,
        "providerSignature": "3045022100aa",
        "platformSignature": "3045022100bb",
        "receiptHash": "e3b0c44298fc1c14"
    })
}

pub fn dispute_json(id: &str, payment_id: &str) -> Value {
    serde_json::json!({
        "id": id,
        "paymentId": payment_id,
        "buyerWalletId": "wallet_buyer",
        "providerWalletId": "wallet_seller",
        "reason": "output was empty",
        "status": "open",
        "createdAt": "2026-02-14T12:00:00Z"
    })
}

pub fn webhook_json(id: &str, url: &str, active: bool) -> Value {
    serde_json::json!({
        "id": id,
        "url": url,
        "events": ["payment.completed"],
        "active": active,
        "createdAt": "2026-02-14T12:00:00Z"
    })
}
