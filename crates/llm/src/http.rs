//! Shared HTTP transport for vendor adapters.
//!
//! `HttpProvider` wraps a `reqwest::Client` with pre-configured headers,
//! the endpoint URL, optional query parameters (for vendors that take the
//! key in the URL) and a per-request timeout. `send()` performs one POST and
//! classifies every failure into an [`ErrorKind`].

use crate::{ErrorKind, ProviderError};
use anyhow::Result;
use compact_str::CompactString;
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

/// Upper bound on a single adapter call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared HTTP transport for all vendors.
#[derive(Clone)]
pub struct HttpProvider {
    client: Client,
    headers: HeaderMap,
    endpoint: String,
    query: Vec<(CompactString, String)>,
    timeout: Duration,
}

impl HttpProvider {
    /// Create a provider with Bearer token authentication.
    pub fn bearer(client: Client, key: &str, endpoint: &str) -> Result<Self> {
        let mut provider = Self::no_auth(client, endpoint);
        provider
            .headers
            .insert(header::AUTHORIZATION, format!("Bearer {key}").parse()?);
        Ok(provider)
    }

    /// Create a provider without authentication headers.
    pub fn no_auth(client: Client, endpoint: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
            query: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a provider with a custom header for authentication.
    ///
    /// Used by vendors that don't use Bearer tokens (e.g. Anthropic
    /// uses `x-api-key`).
    pub fn custom_header(
        client: Client,
        header_name: &str,
        header_value: &str,
        endpoint: &str,
    ) -> Result<Self> {
        Self::no_auth(client, endpoint).with_header(header_name, header_value)
    }

    /// Create a provider that passes its key as a URL query parameter
    /// (e.g. Gemini's `?key=`).
    pub fn query_key(client: Client, param: &str, key: &str, endpoint: &str) -> Self {
        let mut provider = Self::no_auth(client, endpoint);
        provider.query.push((param.into(), key.to_owned()));
        provider
    }

    /// Add a static header sent with every request.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        self.headers
            .insert(name.parse::<HeaderName>()?, value.parse::<HeaderValue>()?);
        Ok(self)
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// POST `body` and deserialize a 2xx response as `T`.
    ///
    /// Failures are attributed to `provider`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        provider: &str,
        body: &impl Serialize,
    ) -> Result<T, ProviderError> {
        if let Ok(body) = serde_json::to_string(body) {
            tracing::trace!("{provider} request: {body}");
        }

        let mut request = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .timeout(self.timeout)
            .json(body);
        if !self.query.is_empty() {
            request = request.query(&self.query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::new(provider, self.classify(e)))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::new(provider, self.classify(e)))?;
        tracing::trace!("{provider} response {status}: {text}");

        if !status.is_success() {
            return Err(ProviderError::new(
                provider,
                ErrorKind::Http {
                    status: status.as_u16(),
                    body: text,
                },
            ));
        }

        serde_json::from_str(&text).map_err(|e| ProviderError::malformed(provider, e.to_string()))
    }

    fn classify(&self, error: reqwest::Error) -> ErrorKind {
        if error.is_timeout() {
            ErrorKind::Timeout(self.timeout)
        } else {
            // Strip the URL: it may carry a query-string key.
            ErrorKind::Transport(error.without_url().to_string())
        }
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get a reference to the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
