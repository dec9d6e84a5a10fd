//! Paid execution, payments and receipts.
//!
//! Execution replies may or may not embed the payment and the receipt,
//! depending on how far settlement has progressed when the provider answers.
//! Both are optional; `paymentId` is not.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::client::http::{AuthScheme, RestClient};
use crate::client::ClientError;
use crate::error::{ResourceKind, SdkError};
use crate::types::{ExecutionReceipt, ExecutionResult, ExecutionStatus, Payment};

use super::{required, wrap};

const EXECUTE_PATH: &str = "/api/execute";
const PAYMENTS_PATH: &str = "/api/payments";
const RECEIPTS_PATH: &str = "/api/receipts";
const AUTH: AuthScheme = AuthScheme::BearerAndApiKey;

/// Execution request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteRequest<'a> {
    buyer_wallet_id: &'a str,
    input: &'a Value,
}

/// Execution reply.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteResponse {
    payment_id: String,
    #[serde(default)]
    service_id: Option<String>,
    #[serde(default)]
    output: Option<Value>,
    #[serde(default)]
    execution_time_ms: Option<u64>,
    #[serde(default)]
    status: Option<ExecutionStatus>,
    #[serde(default, deserialize_with = "non_empty")]
    receipt: Option<ExecutionReceipt>,
    #[serde(default, deserialize_with = "non_empty")]
    payment: Option<Payment>,
}

/// Reads an embedded record, treating `null` and `{}` as absent.
fn non_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl ExecuteResponse {
    fn into_result(self, requested_service_id: &str) -> ExecutionResult {
        ExecutionResult {
            payment_id: self.payment_id,
            service_id: self
                .service_id
                .unwrap_or_else(|| requested_service_id.to_string()),
            output: self
                .output
                .unwrap_or_else(|| Value::Object(serde_json::Map::new())),
            execution_time_ms: self.execution_time_ms.unwrap_or(0),
            status: self.status,
            receipt: self.receipt,
            payment: self.payment,
        }
    }
}

/// Service execution and settlement lookups.
#[derive(Debug, Clone)]
pub struct PaymentOperations {
    http: RestClient,
}

impl PaymentOperations {
    /// Creates the group on top of an executor.
    #[must_use]
    pub fn new(http: RestClient) -> Self {
        Self { http }
    }

    /// Executes a service, paying from the buyer wallet.
    ///
    /// # Errors
    ///
    /// Returns an execution error if the request fails or the reply lacks
    /// `paymentId` or carries a malformed payment or receipt.
    pub async fn execute(
        &self,
        service_id: &str,
        buyer_wallet_id: &str,
        input: &Value,
    ) -> Result<ExecutionResult, SdkError> {
        const CONTEXT: &str = "service execution failed";
        let kind = ResourceKind::Execution;

        let request = ExecuteRequest {
            buyer_wallet_id,
            input,
        };
        let reply = self
            .http
            .post(EXECUTE_PATH, &[service_id], &request, AUTH)
            .await
            .map_err(wrap(kind, CONTEXT))?;

        let response: ExecuteResponse = serde_json::from_value(reply)
            .map_err(ClientError::from)
            .map_err(wrap(kind, CONTEXT))?;

        tracing::info!(
            service_id,
            payment_id = %response.payment_id,
            settled = response.payment.is_some(),
            "service executed"
        );
        Ok(response.into_result(service_id))
    }

    /// Gets a payment by id.
    ///
    /// # Errors
    ///
    /// Returns a payment error if the request fails or the payment is not
    /// found.
    pub async fn get_payment(&self, payment_id: &str) -> Result<Payment, SdkError> {
        const CONTEXT: &str = "failed to get payment";
        let kind = ResourceKind::Payment;

        let mut reply = self
            .http
            .get(PAYMENTS_PATH, &[payment_id], AUTH)
            .await
            .map_err(wrap(kind, CONTEXT))?;

        required(&mut reply, "payment", kind, CONTEXT, || {
            format!("payment {} not found", payment_id)
        })
    }

    /// Gets an execution receipt by id.
    ///
    /// # Errors
    ///
    /// Returns a payment error if the request fails or the receipt is not
    /// found.
    pub async fn get_receipt(&self, receipt_id: &str) -> Result<ExecutionReceipt, SdkError> {
        const CONTEXT: &str = "failed to get receipt";
        let kind = ResourceKind::Payment;

        let mut reply = self
            .http
            .get(RECEIPTS_PATH, &[receipt_id], AUTH)
            .await
            .map_err(wrap(kind, CONTEXT))?;

        required(&mut reply, "receipt", kind, CONTEXT, || {
            format!("receipt {} not found", receipt_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_execute_request_wire_shape() {
        let input = json!({"text": "hello"});
        let body = serde_json::to_value(ExecuteRequest {
            buyer_wallet_id: "wallet_123",
            input: &input,
        })
        .expect("serialize");
        assert_eq!(body, json!({"buyerWalletId": "wallet_123", "input": {"text": "hello"}}));
    }

    #[test]
    fn test_execute_response_minimal() {
        let response: ExecuteResponse =
            serde_json::from_value(json!({"paymentId": "payment_789"})).expect("deserialize");
        let result = response.into_result("service_456");

        assert_eq!(result.payment_id, "payment_789");
        assert_eq!(result.service_id, "service_456");
        assert_eq!(result.output, json!({}));
        assert_eq!(result.execution_time_ms, 0);
        assert!(result.status.is_none());
        assert!(result.receipt.is_none());
        assert!(result.payment.is_none());
    }

    #[test]
    fn test_execute_response_requires_payment_id() {
        let result: Result<ExecuteResponse, _> =
            serde_json::from_value(json!({"serviceId": "service_456", "status": "success"}));
        let err = result.expect_err("paymentId is mandatory");
        assert!(err.to_string().contains("paymentId"));
    }

    #[test]
    fn test_execute_response_null_payment_is_absent() {
        let response: ExecuteResponse = serde_json::from_value(json!({
            "paymentId": "payment_789",
            "status": "error",
            "payment": null,
            "receipt": null
        }))
        .expect("deserialize");
        let result = response.into_result("service_456");
        assert_eq!(result.status, Some(ExecutionStatus::Error));
        assert!(!result.is_success());
        assert!(result.payment.is_none());
    }

    #[test]
    fn test_execute_response_empty_records_are_absent() {
        let response: ExecuteResponse = serde_json::from_value(json!({
            "paymentId": "payment_789",
            "status": "pending",
            "receipt": {},
            "payment": {}
        }))
        .expect("deserialize");
        let result = response.into_result("service_456");
        assert_eq!(result.status, Some(ExecutionStatus::Pending));
        assert!(result.receipt.is_none());
        assert!(result.payment.is_none());
    }
}
