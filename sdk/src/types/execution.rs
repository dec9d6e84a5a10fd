//! Execution types for the AgentPay SDK.
//!
//! An execution is a paid call to a service. The platform answers with the
//! service output and, once settlement has progressed far enough, a payment
//! record and a signed receipt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::payment::Payment;

/// Outcome of a service execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    /// The provider returned an output.
    Success,
    /// The provider failed or timed out.
    Error,
    /// Accepted, output not final yet.
    Pending,
    /// Any status this SDK version does not know.
    #[serde(other)]
    Unknown,
}

/// Cryptographic proof of one execution.
///
/// The SDK only transports receipts; hashes and signatures are not verified
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReceipt {
    /// Receipt identifier.
    pub id: String,

    /// Payment the receipt settles.
    pub payment_id: String,

    /// Executed service.
    pub service_id: String,

    /// Hash of the execution input.
    pub input_hash: String,

    /// Hash of the execution output.
    pub output_hash: String,

    /// Issue time in milliseconds since epoch.
    pub timestamp: i64,

    /// Execution time in milliseconds.
    pub execution_time_ms: u64,

    /// Provider signature over the receipt body.
    pub provider_signature: String,

    /// Platform signature over the receipt body.
    pub platform_signature: String,

    /// Hash over the whole receipt.
    pub receipt_hash: String,

    /// Anchoring transaction, once anchored on-chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockchain_tx_id: Option<String>,

    /// Anchoring time (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockchain_anchored_at: Option<String>,
}

impl ExecutionReceipt {
    /// Returns true if the receipt has been anchored on-chain.
    #[must_use]
    pub fn is_anchored(&self) -> bool {
        self.blockchain_tx_id.is_some()
    }

    /// Converts the issue timestamp.
    #[must_use]
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Result of executing a service.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    /// Payment created for the execution.
    pub payment_id: String,

    /// Executed service.
    pub service_id: String,

    /// Provider output.
    pub output: Value,

    /// Execution time in milliseconds.
    pub execution_time_ms: u64,

    /// Execution outcome, when reported.
    pub status: Option<ExecutionStatus>,

    /// Signed receipt, when already issued.
    pub receipt: Option<ExecutionReceipt>,

    /// Payment record, when already settled far enough to report.
    pub payment: Option<Payment>,
}

impl ExecutionResult {
    /// Returns true if the platform reported a successful execution.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == Some(ExecutionStatus::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_receipt_deserialize() {
        let receipt: ExecutionReceipt = serde_json::from_value(json!({
            "id": "receipt_1",
            "paymentId": "payment_789",
            "serviceId": "service_456",
            "inputHash": "ih",
            "outputHash": "oh",
            "timestamp": 1_771_070_400_000_i64,
            "executionTimeMs": 250,
            "providerSignature": "ps",
            "platformSignature": "pls",
            "receiptHash": "rh"
        }))
        .expect("deserialize");

        assert_eq!(receipt.payment_id, "payment_789");
        assert!(!receipt.is_anchored());
        let issued = receipt.issued_at().expect("valid millis");
        assert_eq!(issued.to_rfc3339(), "2026-02-14T12:00:00+00:00");
    }

    #[test]
    fn test_receipt_requires_signatures() {
        let result: Result<ExecutionReceipt, _> = serde_json::from_value(json!({
            "id": "receipt_1",
            "paymentId": "payment_789",
            "serviceId": "service_456",
            "inputHash": "ih",
            "outputHash": "oh",
            "timestamp": 0,
            "executionTimeMs": 250,
            "receiptHash": "rh"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_execution_status_serde() {
        let status: ExecutionStatus = serde_json::from_str("\"error\"").expect("deserialize");
        assert_eq!(status, ExecutionStatus::Error);
        let status: ExecutionStatus = serde_json::from_str("\"pending\"").expect("deserialize");
        assert_eq!(status, ExecutionStatus::Pending);
    }

    #[test]
    fn test_execution_status_unknown() {
        let status: ExecutionStatus =
            serde_json::from_str("\"queued_for_review\"").expect("deserialize");
        assert_eq!(status, ExecutionStatus::Unknown);
    }
}
