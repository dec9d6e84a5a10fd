//! HTTP request executor.
//!
//! [`RestClient`] sends one JSON request per call against the configured base
//! URL and returns the parsed JSON reply. Any network failure, timeout, or
//! non-2xx status becomes a [`ClientError`]. Requests are attempted once.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::config::ClientConfig;
use super::error::ClientError;

/// Header carrying the API key under the dual-header scheme.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Health endpoint path.
pub const HEALTH_PATH: &str = "/api/health";

/// How the configured credential is attached to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// No credential, even if one is configured.
    None,
    /// `Authorization: Bearer <key>`.
    Bearer,
    /// `Authorization: Bearer <key>` plus `x-api-key: <key>`.
    ///
    /// Payment, dispute and webhook routes on the platform read the key from
    /// `x-api-key`.
    BearerAndApiKey,
}

/// Single-attempt JSON request executor.
#[derive(Debug, Clone)]
pub struct RestClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl RestClient {
    /// Creates a new executor with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Request)?;

        Ok(Self { config, http })
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the absolute URL for `path` followed by `ids`.
    ///
    /// Each id becomes exactly one percent-encoded path segment, so `/`, `?`
    /// and `#` inside an id never change the route.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is not a valid URL or an id is empty,
    /// `.` or `..`.
    pub fn url(&self, path: &str, ids: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&format!("{}{}", self.config.base_url, path))
            .map_err(|e| ClientError::InvalidConfig(format!("invalid URL for {}: {}", path, e)))?;

        if let Some(id) = ids.iter().find(|id| matches!(**id, "" | "." | "..")) {
            return Err(ClientError::InvalidRequest(format!(
                "invalid path segment {:?} for {}",
                id, path
            )));
        }
        if !ids.is_empty() {
            url.path_segments_mut()
                .map_err(|()| {
                    ClientError::InvalidConfig(format!("base URL cannot carry a path: {}", path))
                })?
                .extend(ids);
        }
        Ok(url)
    }

    /// Makes a GET request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 2xx.
    pub async fn get(
        &self,
        path: &str,
        ids: &[&str],
        auth: AuthScheme,
    ) -> Result<Value, ClientError> {
        self.request(Method::GET, path, ids, &[], None, auth).await
    }

    /// Makes a GET request with query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 2xx.
    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
        auth: AuthScheme,
    ) -> Result<Value, ClientError> {
        self.request(Method::GET, path, &[], query, None, auth).await
    }

    /// Makes a POST request without a body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 2xx.
    pub async fn post_empty(&self, path: &str, auth: AuthScheme) -> Result<Value, ClientError> {
        self.request(Method::POST, path, &[], &[], None, auth).await
    }

    /// Makes a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized, the request fails,
    /// or the status is not 2xx.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        ids: &[&str],
        body: &B,
        auth: AuthScheme,
    ) -> Result<Value, ClientError> {
        let body = to_body(body)?;
        self.request(Method::POST, path, ids, &[], Some(body), auth).await
    }

    /// Makes a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized, the request fails,
    /// or the status is not 2xx.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        ids: &[&str],
        body: &B,
        auth: AuthScheme,
    ) -> Result<Value, ClientError> {
        let body = to_body(body)?;
        self.request(Method::PUT, path, ids, &[], Some(body), auth).await
    }

    /// Makes a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 2xx.
    pub async fn delete(
        &self,
        path: &str,
        ids: &[&str],
        auth: AuthScheme,
    ) -> Result<Value, ClientError> {
        self.request(Method::DELETE, path, ids, &[], None, auth).await
    }

    /// Sends one request and parses the JSON reply.
    ///
    /// An empty success body is returned as `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, timeout, non-2xx status, or an
    /// unparseable success body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        ids: &[&str],
        query: &[(&str, String)],
        body: Option<Value>,
        auth: AuthScheme,
    ) -> Result<Value, ClientError> {
        let mut url = self.url(path, ids)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        let path = url.path().to_string();
        tracing::debug!(method = %method, path = %path, ?auth, "sending request");

        let mut builder = self.authorize(self.http.request(method.clone(), url), auth);
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(method = %method, path = %path, error = %e, "request failed");
            ClientError::from(e)
        })?;

        let status = response.status();
        tracing::debug!(method = %method, path = %path, status = status.as_u16(), "received response");

        if status.is_success() {
            let text = response.text().await?;
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&text).map_err(ClientError::from);
        }

        let text = response.text().await.unwrap_or_default();
        tracing::warn!(method = %method, path = %path, status = status.as_u16(), "request rejected");

        Err(status_error(status, &path, &text))
    }

    /// Checks platform health.
    ///
    /// Sent without credentials. Returns `true` only for HTTP 200.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn health_check(&self) -> Result<bool, ClientError> {
        let url = self.url(HEALTH_PATH, &[])?;
        let response = self.http.get(url).send().await?;
        let healthy = response.status() == StatusCode::OK;
        tracing::debug!(status = response.status().as_u16(), healthy, "health check");
        Ok(healthy)
    }

    fn authorize(
        &self,
        builder: reqwest::RequestBuilder,
        auth: AuthScheme,
    ) -> reqwest::RequestBuilder {
        match (self.config.api_key.as_deref(), auth) {
            (Some(key), AuthScheme::Bearer) => builder.bearer_auth(key),
            (Some(key), AuthScheme::BearerAndApiKey) => {
                builder.bearer_auth(key).header(API_KEY_HEADER, key)
            }
            _ => builder,
        }
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, ClientError> {
    serde_json::to_value(body)
        .map_err(|e| ClientError::Deserialization(format!("failed to encode request body: {}", e)))
}

/// Maps a non-success status to an error.
fn status_error(status: StatusCode, path: &str, body: &str) -> ClientError {
    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(path.to_string()),
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        _ => ClientError::Api {
            status: status.as_u16(),
            message: error_message(status, body),
        },
    }
}

/// Extracts the platform's error message from a failure body.
///
/// Accepts `{"error": "..."}`, `{"error": {"message": "..."}}` and
/// `{"message": "..."}`; anything else is returned as-is.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let message = value
            .get("error")
            .and_then(|e| e.as_str().or_else(|| e.get("message").and_then(Value::as_str)))
            .or_else(|| value.get("message").and_then(Value::as_str));
        if let Some(message) = message {
            return message.to_string();
        }
    }

    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}

/// Takes `key` out of a reply and deserializes it.
///
/// An absent key, `null` or an empty object yields `Ok(None)`; a non-empty
/// value with a missing mandatory field is a deserialization error.
///
/// # Errors
///
/// Returns an error if the value does not match `T`.
pub fn extract<T: DeserializeOwned>(reply: &mut Value, key: &str) -> Result<Option<T>, ClientError> {
    match reply.get_mut(key).map(Value::take) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ClientError::Deserialization(format!("invalid `{}`: {}", key, e))),
    }
}

/// Takes the list under `key` out of a reply and deserializes every element.
///
/// An absent or `null` key yields an empty list.
///
/// # Errors
///
/// Returns an error if any element does not match `T`.
pub fn extract_list<T: DeserializeOwned>(reply: &mut Value, key: &str) -> Result<Vec<T>, ClientError> {
    Ok(extract(reply, key)?.unwrap_or_default())
}
