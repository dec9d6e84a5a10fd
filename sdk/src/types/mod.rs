//! Core types for the AgentPay SDK.
//!
//! Records mirror the platform's camelCase JSON. Mandatory keys are plain
//! fields; optional keys are `Option`s, so a reply missing a mandatory key
//! fails to parse instead of being defaulted.

pub mod dispute;
pub mod execution;
pub mod payment;
pub mod primitives;
pub mod reputation;
pub mod service;
pub mod wallet;
pub mod webhook;

use chrono::{DateTime, Utc};

pub use dispute::{Dispute, DisputeResolution, DisputeStatus};
pub use execution::{ExecutionReceipt, ExecutionResult, ExecutionStatus};
pub use payment::{Payment, PaymentStatus};
pub use primitives::{platform_fee, Currency, HttpMethod, MIN_PRICE_SATOSHIS, PLATFORM_FEE_RATE};
pub use reputation::ReputationScore;
pub use service::{RegisterServiceParams, Service, ServiceQuery};
pub use wallet::Wallet;
pub use webhook::{Webhook, WebhookUpdate};

/// Parses an RFC 3339 wire timestamp.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
