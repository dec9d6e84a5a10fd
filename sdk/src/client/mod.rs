//! HTTP client for the AgentPay REST API.
//!
//! # Example
//!
//! ```rust,ignore
//! use agentspay_sdk::client::{AgentPayClient, ClientConfig};
//! use agentspay_sdk::types::ServiceQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AgentPayClient::new(ClientConfig::new("http://localhost:3100"))?;
//!
//!     let wallet = client.create_wallet().await?;
//!     let services = client
//!         .search_services(&ServiceQuery::new().with_keyword("nlp").with_max_price(5000))
//!         .await?;
//!
//!     if let Some(service) = services.first() {
//!         let input = serde_json::json!({ "text": "Hello world" });
//!         let result = client.execute(&service.id, &wallet.id, &input).await?;
//!         println!("output: {}", result.output);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod agentpay;
pub mod config;
pub mod error;
pub mod http;

pub use agentpay::AgentPayClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::{AuthScheme, RestClient};
