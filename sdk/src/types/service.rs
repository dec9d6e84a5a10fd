//! Service types for the AgentPay SDK.
//!
//! Provides the registered service record, the registration parameters and
//! the search query.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::primitives::{Currency, HttpMethod};

/// Default category for newly registered services.
pub const DEFAULT_CATEGORY: &str = "general";

/// Default execution timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u32 = 30;

/// Default dispute window in minutes.
pub const DEFAULT_DISPUTE_WINDOW_MINS: u32 = 30;

/// Default page size for service searches.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// A service offered by an agent on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Service identifier.
    pub id: String,

    /// Provider wallet id.
    pub agent_id: String,

    /// Display name.
    pub name: String,

    /// Human-readable description.
    pub description: String,

    /// Category used for discovery.
    pub category: String,

    /// Price per execution in the currency's smallest unit.
    pub price: u64,

    /// Settlement currency.
    pub currency: Currency,

    /// Provider endpoint the platform calls.
    pub endpoint: String,

    /// HTTP method used against the endpoint.
    pub method: HttpMethod,

    /// Whether the service accepts executions.
    pub active: bool,

    /// Maximum execution time in seconds.
    pub timeout: u32,

    /// Dispute window in minutes.
    pub dispute_window: u32,

    /// Creation time (RFC 3339).
    pub created_at: String,

    /// Last update time (RFC 3339).
    pub updated_at: String,

    /// JSON schema of the expected input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<Value>,

    /// JSON schema of the produced output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
}

impl Service {
    /// Parses the creation time.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        super::parse_timestamp(&self.created_at)
    }

    /// Parses the last update time.
    #[must_use]
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        super::parse_timestamp(&self.updated_at)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {} {})",
            self.name,
            self.price,
            self.currency.unit(),
            self.currency
        )
    }
}

/// Parameters for registering a service.
///
/// Serialized as the camelCase registration body. Schemas are only sent when
/// provided.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterServiceParams {
    /// Provider wallet id.
    pub agent_id: String,

    /// Display name.
    pub name: String,

    /// Human-readable description.
    pub description: String,

    /// Category used for discovery.
    pub category: String,

    /// Price per execution in the currency's smallest unit.
    pub price: u64,

    /// Settlement currency.
    pub currency: Currency,

    /// Provider endpoint the platform calls.
    pub endpoint: String,

    /// HTTP method used against the endpoint.
    pub method: HttpMethod,

    /// Maximum execution time in seconds.
    pub timeout: u32,

    /// Dispute window in minutes.
    pub dispute_window: u32,

    /// JSON schema of the expected input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<Value>,

    /// JSON schema of the produced output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
}

impl RegisterServiceParams {
    /// Creates registration parameters with platform defaults for the
    /// optional fields.
    #[must_use]
    pub fn new(
        agent_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            name: name.into(),
            description: description.into(),
            category: DEFAULT_CATEGORY.to_string(),
            price,
            currency: Currency::default(),
            endpoint: endpoint.into(),
            method: HttpMethod::default(),
            timeout: DEFAULT_TIMEOUT_SECS,
            dispute_window: DEFAULT_DISPUTE_WINDOW_MINS,
            input_schema: None,
            output_schema: None,
        }
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the execution timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout: u32) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the dispute window in minutes.
    #[must_use]
    pub fn with_dispute_window(mut self, minutes: u32) -> Self {
        self.dispute_window = minutes;
        self
    }

    /// Sets the input JSON schema.
    #[must_use]
    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = Some(schema);
        self
    }

    /// Sets the output JSON schema.
    #[must_use]
    pub fn with_output_schema(mut self, schema: Value) -> Self {
        self.output_schema = Some(schema);
        self
    }
}

/// Service search filters.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceQuery {
    /// Free-text keyword.
    pub keyword: Option<String>,

    /// Category filter.
    pub category: Option<String>,

    /// Maximum price.
    pub max_price: Option<u64>,

    /// Minimum provider rating.
    pub min_rating: Option<f64>,

    /// Page size.
    pub limit: u32,

    /// Page offset.
    pub offset: u32,
}

impl Default for ServiceQuery {
    fn default() -> Self {
        Self {
            keyword: None,
            category: None,
            max_price: None,
            min_rating: None,
            limit: DEFAULT_SEARCH_LIMIT,
            offset: 0,
        }
    }
}

impl ServiceQuery {
    /// Creates an unfiltered query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the maximum price.
    #[must_use]
    pub fn with_max_price(mut self, max_price: u64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Sets the minimum rating.
    #[must_use]
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the page offset.
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the query-string pairs for the non-empty filters.
    ///
    /// Empty strings and zero paging values are omitted.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(keyword) = self.keyword.as_deref().filter(|k| !k.is_empty()) {
            pairs.push(("q", keyword.to_string()));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category.to_string()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("maxPrice", max_price.to_string()));
        }
        if let Some(min_rating) = self.min_rating {
            pairs.push(("minRating", min_rating.to_string()));
        }
        if self.limit != 0 {
            pairs.push(("limit", self.limit.to_string()));
        }
        if self.offset != 0 {
            pairs.push(("offset", self.offset.to_string()));
        }

        pairs
    }
}
