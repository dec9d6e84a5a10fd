//! Dispute operations.

use serde_json::Value;

use crate::client::http::{AuthScheme, RestClient};
use crate::client::ClientError;
use crate::error::{ResourceKind, SdkError};
use crate::types::dispute::OpenDisputeRequest;
use crate::types::Dispute;

use super::{required, wrap};

const DISPUTES_PATH: &str = "/api/disputes";
const AUTH: AuthScheme = AuthScheme::BearerAndApiKey;
const KIND: ResourceKind = ResourceKind::Dispute;

/// Message returned by [`DisputeOperations::add_evidence`].
pub const EVIDENCE_UNSUPPORTED: &str = "adding evidence after opening a dispute is not supported \
     by this API version; pass evidence when calling open_dispute(...)";

/// Dispute lifecycle.
#[derive(Debug, Clone)]
pub struct DisputeOperations {
    http: RestClient,
}

impl DisputeOperations {
    /// Creates the group on top of an executor.
    #[must_use]
    pub fn new(http: RestClient) -> Self {
        Self { http }
    }

    /// Opens a dispute for a payment.
    ///
    /// Evidence can only be supplied here.
    ///
    /// # Errors
    ///
    /// Returns a dispute error if the request fails or the reply has no
    /// `dispute` object.
    pub async fn open_dispute(
        &self,
        payment_id: &str,
        reason: &str,
        evidence: Option<&str>,
    ) -> Result<Dispute, SdkError> {
        const CONTEXT: &str = "failed to open dispute";

        let request = OpenDisputeRequest {
            payment_id,
            reason,
            evidence: evidence.filter(|e| !e.is_empty()),
        };
        let mut reply = self
            .http
            .post(DISPUTES_PATH, &[], &request, AUTH)
            .await
            .map_err(wrap(KIND, CONTEXT))?;

        let dispute: Dispute = required(&mut reply, "dispute", KIND, CONTEXT, || {
            "invalid response: missing dispute data".to_string()
        })?;
        tracing::info!(dispute_id = %dispute.id, payment_id, "dispute opened");
        Ok(dispute)
    }

    /// Gets a dispute by id.
    ///
    /// # Errors
    ///
    /// Returns a dispute error if the request fails or the dispute is not
    /// found.
    pub async fn get_dispute(&self, dispute_id: &str) -> Result<Dispute, SdkError> {
        const CONTEXT: &str = "failed to get dispute";

        let mut reply = self
            .http
            .get(DISPUTES_PATH, &[dispute_id], AUTH)
            .await
            .map_err(wrap(KIND, CONTEXT))?;

        required(&mut reply, "dispute", KIND, CONTEXT, || {
            format!("dispute {} not found", dispute_id)
        })
    }

    /// Gets every dispute opened against a payment.
    ///
    /// The platform has no per-payment filter in this API version: the whole
    /// collection is fetched and filtered here, before parsing.
    ///
    /// # Errors
    ///
    /// Returns a dispute error if the request fails or a matching dispute is
    /// malformed.
    pub async fn get_payment_disputes(&self, payment_id: &str) -> Result<Vec<Dispute>, SdkError> {
        const CONTEXT: &str = "failed to get payment disputes";

        let mut reply = self
            .http
            .get(DISPUTES_PATH, &[], AUTH)
            .await
            .map_err(wrap(KIND, CONTEXT))?;

        let all = match reply.get_mut("disputes").map(Value::take) {
            Some(Value::Array(items)) => items,
            None | Some(Value::Null) => Vec::new(),
            Some(other) => {
                return Err(SdkError::wrap(
                    KIND,
                    CONTEXT,
                    ClientError::Deserialization(format!(
                        "invalid `disputes`: expected an array, got {}",
                        other
                    )),
                ))
            }
        };

        all.into_iter()
            .filter(|d| d.get("paymentId").and_then(Value::as_str) == Some(payment_id))
            .map(|d| serde_json::from_value(d).map_err(ClientError::from))
            .collect::<Result<Vec<Dispute>, _>>()
            .map_err(wrap(KIND, CONTEXT))
    }

    /// Adds evidence to an open dispute.
    ///
    /// Not supported by this API version: always fails without issuing a
    /// request. Pass evidence to [`open_dispute`](Self::open_dispute) instead.
    ///
    /// # Errors
    ///
    /// Always returns a dispute error.
    pub async fn add_evidence(&self, dispute_id: &str, _evidence: &str) -> Result<Dispute, SdkError> {
        tracing::debug!(dispute_id, "rejecting late evidence submission");
        Err(SdkError::resource(KIND, EVIDENCE_UNSUPPORTED))
    }
}
