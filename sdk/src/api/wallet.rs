//! Wallet operations.

use crate::client::http::{AuthScheme, RestClient};
use crate::error::{ResourceKind, SdkError};
use crate::types::{Currency, Wallet};

use super::{required, wrap};

const WALLETS_PATH: &str = "/api/wallets";
const AUTH: AuthScheme = AuthScheme::Bearer;
const KIND: ResourceKind = ResourceKind::Wallet;

/// Wallet creation and lookup.
#[derive(Debug, Clone)]
pub struct WalletOperations {
    http: RestClient,
}

impl WalletOperations {
    /// Creates the group on top of an executor.
    #[must_use]
    pub fn new(http: RestClient) -> Self {
        Self { http }
    }

    /// Creates a new agent wallet.
    ///
    /// # Errors
    ///
    /// Returns a wallet error if the request fails or the reply has no
    /// `wallet` object.
    pub async fn create_wallet(&self) -> Result<Wallet, SdkError> {
        const CONTEXT: &str = "failed to create wallet";

        let mut reply = self
            .http
            .post_empty(WALLETS_PATH, AUTH)
            .await
            .map_err(wrap(KIND, CONTEXT))?;

        let wallet: Wallet = required(&mut reply, "wallet", KIND, CONTEXT, || {
            "invalid response: missing wallet data".to_string()
        })?;
        tracing::info!(wallet_id = %wallet.id, "wallet created");
        Ok(wallet)
    }

    /// Gets a wallet by id.
    ///
    /// # Errors
    ///
    /// Returns a wallet error if the request fails or the wallet is not found.
    pub async fn get_wallet(&self, wallet_id: &str) -> Result<Wallet, SdkError> {
        const CONTEXT: &str = "failed to get wallet";

        let mut reply = self
            .http
            .get(WALLETS_PATH, &[wallet_id], AUTH)
            .await
            .map_err(wrap(KIND, CONTEXT))?;

        required(&mut reply, "wallet", KIND, CONTEXT, || {
            format!("wallet {} not found", wallet_id)
        })
    }

    /// Gets the wallet balance for a currency code (`BSV` or `MNEE`, any case).
    ///
    /// A balance the platform did not report is returned as zero.
    ///
    /// # Errors
    ///
    /// Returns a wallet error for an unknown currency code (without issuing a
    /// request) or if the wallet cannot be fetched.
    pub async fn get_balance(&self, wallet_id: &str, currency: &str) -> Result<u64, SdkError> {
        let currency: Currency = currency
            .parse()
            .map_err(|_| SdkError::resource(KIND, format!("invalid currency: {}", currency)))?;

        let wallet = self.get_wallet(wallet_id).await?;
        Ok(wallet.balance_for(currency).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;

    #[test]
    fn test_get_balance_rejects_unknown_currency() {
        let http = RestClient::new(ClientConfig::new("http://127.0.0.1:9")).expect("client");
        let wallets = WalletOperations::new(http);

        let err = tokio_test::block_on(wallets.get_balance("wallet_123", "ETH"))
            .expect_err("unknown currency");
        assert_eq!(err.kind(), Some(ResourceKind::Wallet));
        assert_eq!(err.to_string(), "wallet error: invalid currency: ETH");
    }
}
