//! Agent reputation metrics.

use serde::{Deserialize, Serialize};

/// Aggregated reputation of an agent, computed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationScore {
    /// Agent wallet id.
    pub agent_id: String,

    /// Number of executions the agent took part in.
    pub total_jobs: u64,

    /// Share of successful executions, 0 to 1.
    pub success_rate: f64,

    /// Mean provider response time in milliseconds.
    pub avg_response_time_ms: f64,

    /// Total earned as a provider, in satoshis.
    pub total_earned: u64,

    /// Total spent as a buyer, in satoshis.
    pub total_spent: u64,

    /// Rating, 1 to 5.
    pub rating: f64,
}

impl ReputationScore {
    /// Returns the success rate as a percentage.
    #[must_use]
    pub fn success_percent(&self) -> f64 {
        self.success_rate * 100.0
    }
}
