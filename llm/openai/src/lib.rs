//! Chat-completions provider.
//!
//! Covers OpenAI, DeepSeek, Grok (xAI), Copilot and Perplexity, and any
//! other service exposing the OpenAI chat completions API. Perplexity is
//! the search-grounded variant: it takes the system prompt inline in a
//! single user turn and no token cap.

use compact_str::CompactString;
use llm::{Client, General, HttpProvider};
pub use request::{Request, Response};
use std::time::Duration;

mod provider;
mod request;

/// Chat completions endpoint URLs.
pub mod endpoint {
    /// OpenAI chat completions.
    pub const OPENAI: &str = "https://api.openai.com/v1/chat/completions";
    /// DeepSeek chat completions.
    pub const DEEPSEEK: &str = "https://api.deepseek.com/v1/chat/completions";
    /// Grok (xAI) chat completions.
    pub const GROK: &str = "https://api.x.ai/v1/chat/completions";
    /// Copilot chat completions.
    pub const COPILOT: &str = "https://api.copilot.microsoft.com/v1/chat/completions";
    /// Perplexity chat completions.
    pub const PERPLEXITY: &str = "https://api.perplexity.ai/chat/completions";
}

/// Default model identifiers.
pub mod model {
    /// OpenAI.
    pub const OPENAI: &str = "gpt-4o-mini";
    /// DeepSeek.
    pub const DEEPSEEK: &str = "deepseek-chat";
    /// Grok.
    pub const GROK: &str = "grok-beta";
    /// Copilot.
    pub const COPILOT: &str = "gpt-4";
    /// Perplexity.
    pub const PERPLEXITY: &str = "sonar-small-chat";
}

/// How the system prompt is placed in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Separate `system` message followed by the user turn.
    Chat,
    /// System prompt interpolated into a single user turn.
    Search,
}

/// A chat-completions provider.
#[derive(Clone)]
pub struct OpenAI {
    /// Vendor name.
    name: CompactString,
    /// Transport with bearer auth.
    http: HttpProvider,
    /// Model and sampling.
    config: General,
    /// System prompt placement.
    style: Style,
}

impl OpenAI {
    /// Create a provider targeting the OpenAI API.
    pub fn api(client: Client, key: &str) -> anyhow::Result<Self> {
        Self::custom(client, "openai", key, endpoint::OPENAI, General::new(model::OPENAI))
    }

    /// Create a provider targeting the DeepSeek API.
    pub fn deepseek(client: Client, key: &str) -> anyhow::Result<Self> {
        Self::custom(
            client,
            "deepseek",
            key,
            endpoint::DEEPSEEK,
            General::new(model::DEEPSEEK),
        )
    }

    /// Create a provider targeting the Grok (xAI) API.
    pub fn grok(client: Client, key: &str) -> anyhow::Result<Self> {
        Self::custom(client, "grok", key, endpoint::GROK, General::new(model::GROK))
    }

    /// Create a provider targeting Copilot, optionally at a custom endpoint.
    pub fn copilot(client: Client, key: &str, endpoint: Option<&str>) -> anyhow::Result<Self> {
        Self::custom(
            client,
            "copilot",
            key,
            endpoint.unwrap_or(endpoint::COPILOT),
            General::new(model::COPILOT),
        )
    }

    /// Create a provider targeting the search-grounded Perplexity API.
    pub fn perplexity(client: Client, key: &str) -> anyhow::Result<Self> {
        Ok(Self::custom(
            client,
            "perplexity",
            key,
            endpoint::PERPLEXITY,
            General::new(model::PERPLEXITY).without_max_tokens(),
        )?
        .with_style(Style::Search))
    }

    /// Create a provider targeting a custom chat completions endpoint.
    pub fn custom(
        client: Client,
        name: &str,
        key: &str,
        endpoint: &str,
        config: General,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            name: name.into(),
            http: HttpProvider::bearer(client, key, endpoint)?,
            config,
            style: Style::Chat,
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

    /// Override the system prompt placement.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The generation config.
    pub fn config(&self) -> &General {
        &self.config
    }

    /// The target endpoint.
    pub fn endpoint(&self) -> &str {
        self.http.endpoint()
    }
}
