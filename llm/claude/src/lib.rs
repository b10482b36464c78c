//! Claude (Anthropic) provider.
//!
//! Implements the Anthropic Messages API: key in `x-api-key`, a pinned
//! `anthropic-version` header, and the system prompt in its own top-level
//! field rather than in the messages array.

use llm::{Client, General, HttpProvider};
pub use request::{Request, Response};
use std::time::Duration;

mod provider;
mod request;

/// The Anthropic Messages API endpoint.
pub const ENDPOINT: &str = "https://api.anthropic.com/v1/messages";

/// The default model identifier.
pub const MODEL: &str = "claude-3-5-sonnet-20241022";

/// The Anthropic API version header value.
const API_VERSION: &str = "2023-06-01";

/// The Claude provider.
#[derive(Clone)]
pub struct Claude {
    /// Transport with x-api-key and anthropic-version headers.
    http: HttpProvider,
    /// Model and sampling.
    config: General,
}

impl Claude {
    /// Create a provider targeting the Anthropic API.
    pub fn anthropic(client: Client, key: &str) -> anyhow::Result<Self> {
        Self::custom(client, key, ENDPOINT)
    }

    /// Create a provider targeting a custom Anthropic-compatible endpoint.
    pub fn custom(client: Client, key: &str, endpoint: &str) -> anyhow::Result<Self> {
        let http = HttpProvider::custom_header(client, "x-api-key", key, endpoint)?
            .with_header("anthropic-version", API_VERSION)?;
        Ok(Self {
            http,
            config: General::new(MODEL),
        })
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: &str) -> Self {
        self.config.model = model.into();
        self
    }

    /// Override the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = self.http.with_timeout(timeout);
        self
    }

    /// The target endpoint.
    pub fn endpoint(&self) -> &str {
        self.http.endpoint()
    }
}
