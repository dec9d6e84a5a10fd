//! Payment types for the AgentPay SDK.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::Currency;

/// Payment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Created, funds not yet locked.
    Pending,
    /// Funds held in escrow until the dispute window closes.
    Escrowed,
    /// Funds released to the provider.
    Released,
    /// Under dispute.
    Disputed,
    /// Funds returned to the buyer.
    Refunded,
}

impl PaymentStatus {
    /// Returns true if the payment can no longer change state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Released | Self::Refunded)
    }

    /// Returns true if funds are still held by the platform.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        matches!(self, Self::Escrowed | Self::Disputed)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Escrowed => write!(f, "escrowed"),
            Self::Released => write!(f, "released"),
            Self::Disputed => write!(f, "disputed"),
            Self::Refunded => write!(f, "refunded"),
        }
    }
}

/// A payment for one service execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment identifier.
    pub id: String,

    /// Executed service.
    pub service_id: String,

    /// Buyer wallet id.
    pub buyer_wallet_id: String,

    /// Seller (provider) wallet id.
    pub seller_wallet_id: String,

    /// Amount charged, in the currency's smallest unit.
    pub amount: u64,

    /// Platform fee deducted from the amount.
    pub platform_fee: u64,

    /// Settlement currency.
    pub currency: Currency,

    /// Current status.
    pub status: PaymentStatus,

    /// Creation time (RFC 3339).
    pub created_at: String,

    /// Status of an attached dispute, if one was opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_status: Option<String>,

    /// Settlement transaction id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,

    /// Completion time (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl Payment {
    /// Returns the amount the provider receives after the platform fee.
    #[must_use]
    pub fn net_amount(&self) -> u64 {
        self.amount.saturating_sub(self.platform_fee)
    }

    /// Parses the creation time.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        super::parse_timestamp(&self.created_at)
    }

    /// Parses the completion time.
    #[must_use]
    pub fn completed_at_utc(&self) -> Option<DateTime<Utc>> {
        self.completed_at.as_deref().and_then(super::parse_timestamp)
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment({}, {} {}, {})",
            self.id, self.amount, self.currency, self.status
        )
    }
}
