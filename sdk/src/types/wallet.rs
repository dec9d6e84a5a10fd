//! Wallet types for the AgentPay SDK.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::Currency;

/// An agent wallet.
///
/// Balances are optional: an absent balance means the platform did not
/// report it, not that it is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Wallet identifier.
    pub id: String,

    /// Wallet public key.
    pub public_key: String,

    /// On-chain address.
    pub address: String,

    /// Creation time (RFC 3339).
    pub created_at: String,

    /// BSV balance in satoshis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<u64>,

    /// MNEE balance in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_mnee: Option<u64>,

    /// API key issued with a freshly created wallet.
    ///
    /// Only returned once, by wallet creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Wallet {
    /// Returns the reported balance for `currency`, if any.
    #[must_use]
    pub fn balance_for(&self, currency: Currency) -> Option<u64> {
        match currency {
            Currency::Bsv => self.balance,
            Currency::Mnee => self.balance_mnee,
        }
    }

    /// Parses the creation time.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        super::parse_timestamp(&self.created_at)
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wallet({}, {})", self.id, self.address)
    }
}
