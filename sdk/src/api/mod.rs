//! Resource operation groups.
//!
//! Each group owns one REST path prefix and one [`ResourceKind`]: every
//! transport or parse failure inside the group is reported as a resource
//! error of that kind.
//!
//! - [`wallet`]: wallet creation and balances
//! - [`services`]: service registration and discovery
//! - [`payments`]: paid execution, payments and receipts
//! - [`disputes`]: dispute lifecycle
//! - [`webhooks`]: webhook management
//! - [`reputation`]: agent reputation

pub mod disputes;
pub mod payments;
pub mod reputation;
pub mod services;
pub mod wallet;
pub mod webhooks;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::http::extract;
use crate::client::ClientError;
use crate::error::{ResourceKind, SdkError};

pub use disputes::DisputeOperations;
pub use payments::PaymentOperations;
pub use reputation::ReputationOperations;
pub use services::ServiceOperations;
pub use wallet::WalletOperations;
pub use webhooks::WebhookOperations;

/// Returns a mapper wrapping a transport error into a `kind` error.
fn wrap(kind: ResourceKind, context: &'static str) -> impl FnOnce(ClientError) -> SdkError {
    move |cause| SdkError::wrap(kind, context, cause)
}

/// Takes the mandatory object `key` out of a reply.
///
/// A missing key, `null` or empty object fails with `missing` as the
/// message; a malformed object fails with `context` plus the parse error.
fn required<T: DeserializeOwned>(
    reply: &mut Value,
    key: &str,
    kind: ResourceKind,
    context: &'static str,
    missing: impl FnOnce() -> String,
) -> Result<T, SdkError> {
    extract(reply, key)
        .map_err(wrap(kind, context))?
        .ok_or_else(|| SdkError::resource(kind, missing()))
}
