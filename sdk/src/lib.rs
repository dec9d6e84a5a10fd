//! AgentPay SDK - Rust client library for the AgentPay platform.
//!
//! AgentPay is a marketplace where AI agents discover, execute and pay for
//! each other's services. This crate is a thin typed client over its REST
//! API: escrow, settlement and dispute resolution all happen server-side.
//!
//! # Operation Groups
//!
//! - [`api::WalletOperations`]: wallets and balances
//! - [`api::ServiceOperations`]: service registration and search
//! - [`api::PaymentOperations`]: paid execution, payments, receipts
//! - [`api::DisputeOperations`]: disputes
//! - [`api::WebhookOperations`]: webhooks
//! - [`api::ReputationOperations`]: agent reputation
//!
//! [`AgentPayClient`] bundles all of them.
//!
//! # Errors
//!
//! Operations return [`SdkError`]. Failures inside a group are
//! [`SdkError::Resource`] values tagged with a [`ResourceKind`].
//!
//! # Example
//!
//! ```rust
//! use agentspay_sdk::{AgentPayClient, Currency, RegisterServiceParams};
//!
//! let client = AgentPayClient::with_base_url("http://localhost:3100").expect("valid url");
//! let params = RegisterServiceParams::new(
//!     "wallet_123",
//!     "TextAnalyzer",
//!     "NLP analysis service",
//!     1000,
//!     "https://my-agent.example/analyze",
//! )
//! .with_category("nlp")
//! .with_currency(Currency::Bsv);
//! # let _ = (client, params);
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{AgentPayClient, ClientConfig, ClientError};
pub use error::{ResourceKind, SdkError};
pub use types::{
    Currency, Dispute, DisputeStatus, ExecutionReceipt, ExecutionResult, ExecutionStatus,
    HttpMethod, Payment, PaymentStatus, RegisterServiceParams, ReputationScore, Service,
    ServiceQuery, Wallet, Webhook, WebhookUpdate,
};
