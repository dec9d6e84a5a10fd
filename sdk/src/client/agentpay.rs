//! Facade client.
//!
//! [`AgentPayClient`] bundles every operation group behind one object that
//! shares the base URL, credential and connection pool.

use serde_json::Value;

use super::config::ClientConfig;
use super::error::ClientError;
use super::http::RestClient;
use crate::api::{
    DisputeOperations, PaymentOperations, ReputationOperations, ServiceOperations,
    WalletOperations, WebhookOperations,
};
use crate::error::SdkError;
use crate::types::{
    Dispute, ExecutionReceipt, ExecutionResult, Payment, RegisterServiceParams, ReputationScore,
    Service, ServiceQuery, Wallet, Webhook, WebhookUpdate,
};

/// Client for the AgentPay platform.
#[derive(Debug, Clone)]
pub struct AgentPayClient {
    http: RestClient,
    wallets: WalletOperations,
    services: ServiceOperations,
    payments: PaymentOperations,
    disputes: DisputeOperations,
    webhooks: WebhookOperations,
    reputation: ReputationOperations,
}

impl AgentPayClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = RestClient::new(config)?;

        Ok(Self {
            wallets: WalletOperations::new(http.clone()),
            services: ServiceOperations::new(http.clone()),
            payments: PaymentOperations::new(http.clone()),
            disputes: DisputeOperations::new(http.clone()),
            webhooks: WebhookOperations::new(http.clone()),
            reputation: ReputationOperations::new(http.clone()),
            http,
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, ClientError> {
        Self::new(ClientConfig::default())
    }

    /// Creates a new client with the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Creates a new client from `AGENTPAY_API_URL` and `AGENTPAY_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Returns the wallet operations.
    #[must_use]
    pub fn wallets(&self) -> &WalletOperations {
        &self.wallets
    }

    /// Returns the service operations.
    #[must_use]
    pub fn services(&self) -> &ServiceOperations {
        &self.services
    }

    /// Returns the payment and execution operations.
    #[must_use]
    pub fn payments(&self) -> &PaymentOperations {
        &self.payments
    }

    /// Returns the dispute operations.
    #[must_use]
    pub fn disputes(&self) -> &DisputeOperations {
        &self.disputes
    }

    /// Returns the webhook operations.
    #[must_use]
    pub fn webhooks(&self) -> &WebhookOperations {
        &self.webhooks
    }

    /// Returns the reputation operations.
    #[must_use]
    pub fn reputation(&self) -> &ReputationOperations {
        &self.reputation
    }

    /// Checks that the platform is up.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform cannot be reached.
    pub async fn health_check(&self) -> Result<bool, SdkError> {
        Ok(self.http.health_check().await?)
    }

    // Wallets

    /// Creates a new agent wallet.
    ///
    /// # Errors
    ///
    /// See [`WalletOperations::create_wallet`].
    pub async fn create_wallet(&self) -> Result<Wallet, SdkError> {
        self.wallets.create_wallet().await
    }

    /// Gets a wallet by id.
    ///
    /// # Errors
    ///
    /// See [`WalletOperations::get_wallet`].
    pub async fn get_wallet(&self, wallet_id: &str) -> Result<Wallet, SdkError> {
        self.wallets.get_wallet(wallet_id).await
    }

    /// Gets a wallet balance for a currency code.
    ///
    /// # Errors
    ///
    /// See [`WalletOperations::get_balance`].
    pub async fn get_balance(&self, wallet_id: &str, currency: &str) -> Result<u64, SdkError> {
        self.wallets.get_balance(wallet_id, currency).await
    }

    // Services

    /// Registers a new service.
    ///
    /// # Errors
    ///
    /// See [`ServiceOperations::register_service`].
    pub async fn register_service(
        &self,
        params: &RegisterServiceParams,
    ) -> Result<Service, SdkError> {
        self.services.register_service(params).await
    }

    /// Searches services.
    ///
    /// # Errors
    ///
    /// See [`ServiceOperations::search_services`].
    pub async fn search_services(&self, query: &ServiceQuery) -> Result<Vec<Service>, SdkError> {
        self.services.search_services(query).await
    }

    /// Gets a service by id.
    ///
    /// # Errors
    ///
    /// See [`ServiceOperations::get_service`].
    pub async fn get_service(&self, service_id: &str) -> Result<Service, SdkError> {
        self.services.get_service(service_id).await
    }

    // Payments and execution

    /// Executes a service and pays for it.
    ///
    /// # Errors
    ///
    /// See [`PaymentOperations::execute`].
    pub async fn execute(
        &self,
        service_id: &str,
        buyer_wallet_id: &str,
        input: &Value,
    ) -> Result<ExecutionResult, SdkError> {
        self.payments.execute(service_id, buyer_wallet_id, input).await
    }

    /// Gets a payment by id.
    ///
    /// # Errors
    ///
    /// See [`PaymentOperations::get_payment`].
    pub async fn get_payment(&self, payment_id: &str) -> Result<Payment, SdkError> {
        self.payments.get_payment(payment_id).await
    }

    /// Gets an execution receipt by id.
    ///
    /// # Errors
    ///
    /// See [`PaymentOperations::get_receipt`].
    pub async fn get_receipt(&self, receipt_id: &str) -> Result<ExecutionReceipt, SdkError> {
        self.payments.get_receipt(receipt_id).await
    }

    // Disputes

    /// Opens a dispute for a payment.
    ///
    /// # Errors
    ///
    /// See [`DisputeOperations::open_dispute`].
    pub async fn open_dispute(
        &self,
        payment_id: &str,
        reason: &str,
        evidence: Option<&str>,
    ) -> Result<Dispute, SdkError> {
        self.disputes.open_dispute(payment_id, reason, evidence).await
    }

    /// Gets a dispute by id.
    ///
    /// # Errors
    ///
    /// See [`DisputeOperations::get_dispute`].
    pub async fn get_dispute(&self, dispute_id: &str) -> Result<Dispute, SdkError> {
        self.disputes.get_dispute(dispute_id).await
    }

    /// Gets every dispute opened against a payment.
    ///
    /// # Errors
    ///
    /// See [`DisputeOperations::get_payment_disputes`].
    pub async fn get_payment_disputes(&self, payment_id: &str) -> Result<Vec<Dispute>, SdkError> {
        self.disputes.get_payment_disputes(payment_id).await
    }

    /// Adds evidence to a dispute. Always fails in this API version.
    ///
    /// # Errors
    ///
    /// See [`DisputeOperations::add_evidence`].
    pub async fn add_dispute_evidence(
        &self,
        dispute_id: &str,
        evidence: &str,
    ) -> Result<Dispute, SdkError> {
        self.disputes.add_evidence(dispute_id, evidence).await
    }

    // Webhooks

    /// Registers a webhook.
    ///
    /// # Errors
    ///
    /// See [`WebhookOperations::register_webhook`].
    pub async fn register_webhook(&self, url: &str, events: &[String]) -> Result<Webhook, SdkError> {
        self.webhooks.register_webhook(url, events).await
    }

    /// Gets a webhook by id.
    ///
    /// # Errors
    ///
    /// See [`WebhookOperations::get_webhook`].
    pub async fn get_webhook(&self, webhook_id: &str) -> Result<Webhook, SdkError> {
        self.webhooks.get_webhook(webhook_id).await
    }

    /// Lists all webhooks.
    ///
    /// # Errors
    ///
    /// See [`WebhookOperations::list_webhooks`].
    pub async fn list_webhooks(&self) -> Result<Vec<Webhook>, SdkError> {
        self.webhooks.list_webhooks().await
    }

    /// Deletes a webhook.
    ///
    /// # Errors
    ///
    /// See [`WebhookOperations::delete_webhook`].
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<bool, SdkError> {
        self.webhooks.delete_webhook(webhook_id).await
    }

    /// Updates a webhook.
    ///
    /// # Errors
    ///
    /// See [`WebhookOperations::update_webhook`].
    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        update: &WebhookUpdate,
    ) -> Result<Webhook, SdkError> {
        self.webhooks.update_webhook(webhook_id, update).await
    }

    // Reputation

    /// Gets the reputation score of an agent.
    ///
    /// # Errors
    ///
    /// See [`ReputationOperations::get_reputation`].
    pub async fn get_reputation(&self, agent_id: &str) -> Result<ReputationScore, SdkError> {
        self.reputation.get_reputation(agent_id).await
    }
}
