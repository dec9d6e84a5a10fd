//! Primitive types for the AgentPay SDK.
//!
//! Provides the currency and HTTP method enumerations shared by services and
//! payments, plus platform-wide pricing constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;

/// Platform fee rate applied to every settled payment (2%).
pub const PLATFORM_FEE_RATE: f64 = 0.02;

/// Minimum service price in satoshis.
pub const MIN_PRICE_SATOSHIS: u64 = 1;

/// Returns the platform fee for a payment amount, rounded down.
#[must_use]
pub fn platform_fee(amount: u64) -> u64 {
    // 2% == amount / 50
    amount / 50
}

/// Settlement currency.
///
/// Amounts are integers in the currency's smallest unit: satoshis for BSV,
/// cents for MNEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Bitcoin SV, priced in satoshis.
    #[default]
    #[serde(alias = "bsv")]
    Bsv,
    /// MNEE stablecoin, priced in cents.
    #[serde(alias = "mnee")]
    Mnee,
}

impl Currency {
    /// Returns the wire code (`BSV` or `MNEE`).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Bsv => "BSV",
            Self::Mnee => "MNEE",
        }
    }

    /// Returns the name of the smallest unit amounts are expressed in.
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Bsv => "satoshis",
            Self::Mnee => "cents",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BSV" => Ok(Self::Bsv),
            "MNEE" => Ok(Self::Mnee),
            _ => Err(SdkError::Validation(format!("invalid currency: {}", s))),
        }
    }
}

/// HTTP method the platform uses to call a service endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// POST with the input as JSON body.
    #[default]
    #[serde(alias = "post")]
    Post,
    /// GET with the input as query parameters.
    #[serde(alias = "get")]
    Get,
}

impl HttpMethod {
    /// Returns the uppercase method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Get => "GET",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "POST" => Ok(Self::Post),
            "GET" => Ok(Self::Get),
            _ => Err(SdkError::Validation(format!("invalid method: {}", s))),
        }
    }
}
