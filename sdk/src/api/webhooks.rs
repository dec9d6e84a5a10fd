//! Webhook management.

use crate::client::http::{extract_list, AuthScheme, RestClient};
use crate::error::{ResourceKind, SdkError};
use crate::types::webhook::RegisterWebhookRequest;
use crate::types::{Webhook, WebhookUpdate};

use super::{required, wrap};

const WEBHOOKS_PATH: &str = "/api/webhooks";
const AUTH: AuthScheme = AuthScheme::BearerAndApiKey;
const KIND: ResourceKind = ResourceKind::Webhook;

/// Webhook registration and management.
#[derive(Debug, Clone)]
pub struct WebhookOperations {
    http: RestClient,
}

impl WebhookOperations {
    /// Creates the group on top of an executor.
    #[must_use]
    pub fn new(http: RestClient) -> Self {
        Self { http }
    }

    /// Registers a webhook for the given events.
    ///
    /// # Errors
    ///
    /// Returns a webhook error if the request fails or the reply has no
    /// `webhook` object.
    pub async fn register_webhook(&self, url: &str, events: &[String]) -> Result<Webhook, SdkError> {
        const CONTEXT: &str = "failed to register webhook";

        let mut reply = self
            .http
            .post(WEBHOOKS_PATH, &[], &RegisterWebhookRequest { url, events }, AUTH)
            .await
            .map_err(wrap(KIND, CONTEXT))?;

        let webhook: Webhook = required(&mut reply, "webhook", KIND, CONTEXT, || {
            "invalid response: missing webhook data".to_string()
        })?;
        tracing::info!(webhook_id = %webhook.id, url, "webhook registered");
        Ok(webhook)
    }

    /// Lists all registered webhooks.
    ///
    /// # Errors
    ///
    /// Returns a webhook error if the request fails or a webhook is malformed.
    pub async fn list_webhooks(&self) -> Result<Vec<Webhook>, SdkError> {
        const CONTEXT: &str = "failed to list webhooks";

        let mut reply = self
            .http
            .get(WEBHOOKS_PATH, &[], AUTH)
            .await
            .map_err(wrap(KIND, CONTEXT))?;

        extract_list(&mut reply, "webhooks").map_err(wrap(KIND, CONTEXT))
    }

    /// Gets a webhook by id.
    ///
    /// Lists every webhook and scans for the id; the platform's single-webhook
    /// route is not used in this API version.
    ///
    /// # Errors
    ///
    /// Returns a webhook error if listing fails or no webhook has the id.
    pub async fn get_webhook(&self, webhook_id: &str) -> Result<Webhook, SdkError> {
        self.list_webhooks()
            .await?
            .into_iter()
            .find(|w| w.id == webhook_id)
            .ok_or_else(|| SdkError::resource(KIND, format!("webhook {} not found", webhook_id)))
    }

    /// Deletes a webhook.
    ///
    /// Returns `true` on any successful status.
    ///
    /// # Errors
    ///
    /// Returns a webhook error if the request fails.
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<bool, SdkError> {
        const CONTEXT: &str = "failed to delete webhook";

        self.http
            .delete(WEBHOOKS_PATH, &[webhook_id], AUTH)
            .await
            .map_err(wrap(KIND, CONTEXT))?;

        tracing::info!(webhook_id, "webhook deleted");
        Ok(true)
    }

    /// Updates a webhook, sending only the fields set in `update`.
    ///
    /// # Errors
    ///
    /// Returns a webhook error if the request fails or the reply has no
    /// `webhook` object.
    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        update: &WebhookUpdate,
    ) -> Result<Webhook, SdkError> {
        const CONTEXT: &str = "failed to update webhook";

        let mut reply = self
            .http
            .put(WEBHOOKS_PATH, &[webhook_id], update, AUTH)
            .await
            .map_err(wrap(KIND, CONTEXT))?;

        required(&mut reply, "webhook", KIND, CONTEXT, || {
            "invalid response: missing webhook data".to_string()
        })
    }
}
