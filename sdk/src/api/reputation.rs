//! Agent reputation lookup.

use crate::client::http::{AuthScheme, RestClient};
use crate::error::{ResourceKind, SdkError};
use crate::types::ReputationScore;

use super::{required, wrap};

const AGENTS_PATH: &str = "/api/agents";

/// Reputation lookups.
#[derive(Debug, Clone)]
pub struct ReputationOperations {
    http: RestClient,
}

impl ReputationOperations {
    /// Creates the group on top of an executor.
    #[must_use]
    pub fn new(http: RestClient) -> Self {
        Self { http }
    }

    /// Gets the reputation score of an agent.
    ///
    /// # Errors
    ///
    /// Returns a reputation error if the request fails, the reply has no
    /// `reputation` object, or any of its fields is missing.
    pub async fn get_reputation(&self, agent_id: &str) -> Result<ReputationScore, SdkError> {
        const CONTEXT: &str = "failed to get reputation";
        let kind = ResourceKind::Reputation;

        let mut reply = self
            .http
            .get(AGENTS_PATH, &[agent_id, "reputation"], AuthScheme::Bearer)
            .await
            .map_err(wrap(kind, CONTEXT))?;

        required(&mut reply, "reputation", kind, CONTEXT, || {
            format!("reputation for agent {} not found", agent_id)
        })
    }
}
