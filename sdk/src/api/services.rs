//! Service registration and discovery.

use crate::client::http::{extract_list, AuthScheme, RestClient};
use crate::error::{ResourceKind, SdkError};
use crate::types::{RegisterServiceParams, Service, ServiceQuery};

use super::{required, wrap};

const SERVICES_PATH: &str = "/api/services";
const AUTH: AuthScheme = AuthScheme::Bearer;
const KIND: ResourceKind = ResourceKind::Service;

/// Service registration and search.
#[derive(Debug, Clone)]
pub struct ServiceOperations {
    http: RestClient,
}

impl ServiceOperations {
    /// Creates the group on top of an executor.
    #[must_use]
    pub fn new(http: RestClient) -> Self {
        Self { http }
    }

    /// Registers a new service.
    ///
    /// Currency and method are always sent uppercase; schemas only when set.
    ///
    /// # Errors
    ///
    /// Returns a service error if the request fails or the reply has no
    /// `service` object.
    pub async fn register_service(
        &self,
        params: &RegisterServiceParams,
    ) -> Result<Service, SdkError> {
        const CONTEXT: &str = "failed to register service";

        let mut reply = self
            .http
            .post(SERVICES_PATH, &[], params, AUTH)
            .await
            .map_err(wrap(KIND, CONTEXT))?;

        let service: Service = required(&mut reply, "service", KIND, CONTEXT, || {
            "invalid response: missing service data".to_string()
        })?;
        tracing::info!(service_id = %service.id, name = %service.name, "service registered");
        Ok(service)
    }

    /// Searches services.
    ///
    /// Only non-empty filters are sent. No match yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a service error if the request fails or a listed service is
    /// malformed.
    pub async fn search_services(&self, query: &ServiceQuery) -> Result<Vec<Service>, SdkError> {
        const CONTEXT: &str = "failed to search services";

        let mut reply = self
            .http
            .get_with_query(SERVICES_PATH, &query.to_pairs(), AUTH)
            .await
            .map_err(wrap(KIND, CONTEXT))?;

        extract_list(&mut reply, "services").map_err(wrap(KIND, CONTEXT))
    }

    /// Gets a service by id.
    ///
    /// # Errors
    ///
    /// Returns a service error if the request fails or the service is not
    /// found.
    pub async fn get_service(&self, service_id: &str) -> Result<Service, SdkError> {
        const CONTEXT: &str = "failed to get service";

        let mut reply = self
            .http
            .get(SERVICES_PATH, &[service_id], AUTH)
            .await
            .map_err(wrap(KIND, CONTEXT))?;

        required(&mut reply, "service", KIND, CONTEXT, || {
            format!("service {} not found", service_id)
        })
    }
}
