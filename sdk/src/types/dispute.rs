//! Dispute types for the AgentPay SDK.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dispute lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    /// Opened by the buyer, awaiting review.
    Open,
    /// Being adjudicated.
    UnderReview,
    /// Resolved with a full refund to the buyer.
    ResolvedRefund,
    /// Resolved with full release to the provider.
    ResolvedRelease,
    /// Resolved with the amount split between the parties.
    ResolvedSplit,
    /// Closed without resolution.
    Expired,
}

impl DisputeStatus {
    /// Returns true if the dispute was resolved by adjudication.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(
            self,
            Self::ResolvedRefund | Self::ResolvedRelease | Self::ResolvedSplit
        )
    }

    /// Returns true if the dispute can no longer change state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.is_resolved() || matches!(self, Self::Expired)
    }
}

impl fmt::Display for DisputeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::UnderReview => write!(f, "under_review"),
            Self::ResolvedRefund => write!(f, "resolved_refund"),
            Self::ResolvedRelease => write!(f, "resolved_release"),
            Self::ResolvedSplit => write!(f, "resolved_split"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

/// How a dispute was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeResolution {
    /// Buyer refunded.
    Refund,
    /// Provider paid.
    Release,
    /// Amount split by `split_percent`.
    Split,
}

/// A dispute over one payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    /// Dispute identifier.
    pub id: String,

    /// Disputed payment.
    pub payment_id: String,

    /// Buyer wallet id.
    pub buyer_wallet_id: String,

    /// Provider wallet id.
    pub provider_wallet_id: String,

    /// Reason given by the buyer.
    pub reason: String,

    /// Current status.
    pub status: DisputeStatus,

    /// Creation time (RFC 3339).
    pub created_at: String,

    /// Evidence supplied when the dispute was opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,

    /// Settlement, once resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<DisputeResolution>,

    /// Buyer share in percent for split resolutions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_percent: Option<f64>,

    /// Resolution time (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
}

impl Dispute {
    /// Parses the creation time.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        super::parse_timestamp(&self.created_at)
    }

    /// Parses the resolution time.
    #[must_use]
    pub fn resolved_at_utc(&self) -> Option<DateTime<Utc>> {
        self.resolved_at.as_deref().and_then(super::parse_timestamp)
    }
}

/// Body of a dispute-open request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OpenDisputeRequest<'a> {
    pub payment_id: &'a str,
    pub reason: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<&'a str>,
}
