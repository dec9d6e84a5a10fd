//! Webhook types for the AgentPay SDK.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fired when a payment is released to the provider.
pub const EVENT_PAYMENT_COMPLETED: &str = "payment.completed";

/// Fired when a payment fails.
pub const EVENT_PAYMENT_FAILED: &str = "payment.failed";

/// Fired when a payment is refunded.
pub const EVENT_PAYMENT_REFUNDED: &str = "payment.refunded";

/// Fired when a dispute is opened.
pub const EVENT_DISPUTE_OPENED: &str = "dispute.opened";

/// Fired when a dispute is resolved.
pub const EVENT_DISPUTE_RESOLVED: &str = "dispute.resolved";

/// Fired when a service execution finishes.
pub const EVENT_SERVICE_EXECUTED: &str = "service.executed";

/// A registered webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Webhook identifier.
    pub id: String,

    /// Delivery URL.
    pub url: String,

    /// Subscribed event names.
    pub events: Vec<String>,

    /// Whether deliveries are enabled.
    pub active: bool,

    /// Creation time (RFC 3339).
    pub created_at: String,

    /// Signing secret, only returned on registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl Webhook {
    /// Returns true if the webhook subscribes to `event`.
    #[must_use]
    pub fn subscribes_to(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event)
    }

    /// Parses the creation time.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        super::parse_timestamp(&self.created_at)
    }
}

/// Sparse webhook update.
///
/// Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookUpdate {
    /// New delivery URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// New event list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,

    /// New active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl WebhookUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the event list.
    #[must_use]
    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = Some(events.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.events.is_none() && self.active.is_none()
    }
}

/// Body of a webhook registration request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RegisterWebhookRequest<'a> {
    pub url: &'a str,
    pub events: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_webhook_deserialize() {
        let webhook: Webhook = serde_json::from_value(json!({
            "id": "wh_1",
            "url": "https://example.com/hook",
            "events": ["payment.completed", "dispute.opened"],
            "active": true,
            "createdAt": "2026-02-14T12:00:00Z",
            "secret": "whsec_abc"
        }))
        .expect("deserialize");

        assert!(webhook.subscribes_to(EVENT_DISPUTE_OPENED));
        assert!(!webhook.subscribes_to(EVENT_PAYMENT_FAILED));
        assert_eq!(webhook.secret.as_deref(), Some("whsec_abc"));
    }

    #[test]
    fn test_update_is_sparse() {
        let update = WebhookUpdate::new().with_active(false);
        let body = serde_json::to_value(&update).expect("serialize");
        assert_eq!(body, json!({"active": false}));
    }

    #[test]
    fn test_update_empty() {
        assert!(WebhookUpdate::new().is_empty());
        assert!(!WebhookUpdate::new().with_url("https://x").is_empty());
        let body = serde_json::to_value(WebhookUpdate::new()).expect("serialize");
        assert_eq!(body, json!({}));
    }

    #[test]
    fn test_update_events() {
        let update = WebhookUpdate::new().with_events([EVENT_PAYMENT_COMPLETED]);
        assert_eq!(update.events, Some(vec!["payment.completed".to_string()]));
    }
}
