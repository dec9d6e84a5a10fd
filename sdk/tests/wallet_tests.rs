//! Integration tests for wallet operations.

mod common;

use agentspay_sdk::{AgentPayClient, ResourceKind};
use axum::http::{Method, StatusCode};
use common::{refused_url, wallet_json, MockPlatform};
use serde_json::json;

#[tokio::test]
async fn test_create_wallet() {
    let mock = MockPlatform::start().await;
    mock.on(
        Method::POST,
        "/api/wallets",
        StatusCode::CREATED,
        json!({ "wallet": wallet_json("wallet_123") }),
    );

    let wallet = mock.client().create_wallet().await.expect("create wallet");

    assert_eq!(wallet.id, "wallet_123");
    assert_eq!(wallet.public_key, "pub_key_abc");
    assert_eq!(wallet.balance, Some(100_000));
    assert_eq!(wallet.balance_mnee, Some(5000));

    let request = mock.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/wallets");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_create_wallet_missing_key() {
    let mock = MockPlatform::start().await;
    mock.on(Method::POST, "/api/wallets", StatusCode::OK, json!({ "ok": true }));

    let err = mock.client().create_wallet().await.expect_err("no wallet key");

    assert_eq!(err.kind(), Some(ResourceKind::Wallet));
    assert_eq!(
        err.to_string(),
        "wallet error: invalid response: missing wallet data"
    );
}

#[tokio::test]
async fn test_create_wallet_connection_refused() {
    let client = AgentPayClient::with_base_url(refused_url().await).expect("client creation");

    let err = client.create_wallet().await.expect_err("nothing listens");

    assert_eq!(err.kind(), Some(ResourceKind::Wallet));
    let message = err.to_string();
    assert!(message.starts_with("wallet error: failed to create wallet: HTTP request failed"));
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_get_wallet() {
    let mock = MockPlatform::start().await;
    mock.on(
        Method::GET,
        "/api/wallets/wallet_123",
        StatusCode::OK,
        json!({ "wallet": wallet_json("wallet_123") }),
    );

    let wallet = mock.client().get_wallet("wallet_123").await.expect("get wallet");
    assert_eq!(wallet.id, "wallet_123");
}

#[tokio::test]
async fn test_get_wallet_not_found() {
    let mock = MockPlatform::start().await;
    mock.on(
        Method::GET,
        "/api/wallets/wallet_404",
        StatusCode::OK,
        json!({ "wallet": null }),
    );

    let err = mock.client().get_wallet("wallet_404").await.expect_err("null wallet");
    assert_eq!(err.to_string(), "wallet error: wallet wallet_404 not found");
}

#[tokio::test]
async fn test_empty_wallet_object_is_missing() {
    let mock = MockPlatform::start().await;
    mock.on(Method::POST, "/api/wallets", StatusCode::OK, json!({ "wallet": {} }));
    mock.on(
        Method::GET,
        "/api/wallets/wallet_empty",
        StatusCode::OK,
        json!({ "wallet": {} }),
    );
    let client = mock.client();

    let err = client.create_wallet().await.expect_err("empty wallet");
    assert_eq!(
        err.to_string(),
        "wallet error: invalid response: missing wallet data"
    );

    let err = client.get_wallet("wallet_empty").await.expect_err("empty wallet");
    assert_eq!(err.to_string(), "wallet error: wallet wallet_empty not found");
}

#[tokio::test]
async fn test_wallet_id_is_one_path_segment() {
    let mock = MockPlatform::start().await;
    let client = mock.client();

    let _ = client.get_wallet("a?b").await;
    let request = mock.last_request();
    assert_eq!(request.path, "/api/wallets/a%3Fb");
    assert!(request.query.is_none());

    let _ = client.get_wallet("../services/x").await;
    assert_eq!(mock.last_request().path, "/api/wallets/..%2Fservices%2Fx");
}

#[tokio::test]
async fn test_dot_wallet_id_is_rejected_locally() {
    let mock = MockPlatform::start().await;

    let err = mock.client().get_wallet("..").await.expect_err("dot segment");
    assert_eq!(err.kind(), Some(ResourceKind::Wallet));
    assert!(err.to_string().contains("invalid request"));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_get_wallet_http_404() {
    let mock = MockPlatform::start().await;

    let err = mock.client().get_wallet("missing").await.expect_err("404");
    assert_eq!(err.kind(), Some(ResourceKind::Wallet));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_get_balance_case_insensitive() {
    let mock = MockPlatform::start().await;
    mock.on(
        Method::GET,
        "/api/wallets/wallet_123",
        StatusCode::OK,
        json!({ "wallet": wallet_json("wallet_123") }),
    );
    let client = mock.client();

    assert_eq!(client.get_balance("wallet_123", "BSV").await.expect("bsv"), 100_000);
    assert_eq!(client.get_balance("wallet_123", "bsv").await.expect("bsv"), 100_000);
    assert_eq!(client.get_balance("wallet_123", "mnee").await.expect("mnee"), 5000);
}

#[tokio::test]
async fn test_get_balance_missing_field_is_zero() {
    let mock = MockPlatform::start().await;
    mock.on(
        Method::GET,
        "/api/wallets/wallet_new",
        StatusCode::OK,
        json!({ "wallet": {
            "id": "wallet_new",
            "publicKey": "pk",
            "address": "addr",
            "createdAt": "2026-02-14T12:00:00Z"
        }}),
    );
    let client = mock.client();

    assert_eq!(client.get_balance("wallet_new", "BSV").await.expect("bsv"), 0);
    assert_eq!(client.get_balance("wallet_new", "MNEE").await.expect("mnee"), 0);
}

#[tokio::test]
async fn test_get_balance_invalid_currency_sends_nothing() {
    let mock = MockPlatform::start().await;

    let err = mock
        .client()
        .get_balance("wallet_123", "USD")
        .await
        .expect_err("unsupported currency");

    assert_eq!(err.kind(), Some(ResourceKind::Wallet));
    assert!(mock.requests().is_empty());
}
