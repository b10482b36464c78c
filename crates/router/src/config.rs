//! Provider configuration
//!
//! One slot per supported vendor. Slots come either from the environment
//! (`ProviderConfig::from_env`) or from a config file, where the vendor is
//! named by the `provider` field. A slot without a credential never becomes
//! a live provider.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Supported vendors, declared in registry priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// OpenAI chat completions.
    #[serde(rename = "openai")]
    OpenAI,
    /// Google Gemini `generateContent`.
    Gemini,
    /// Anthropic Messages API.
    Claude,
    /// DeepSeek, chat completions.
    DeepSeek,
    /// Grok (xAI), chat completions.
    Grok,
    /// Copilot, chat completions at a configurable endpoint.
    Copilot,
    /// Perplexity, search-grounded chat completions.
    Perplexity,
}

/// Request/response shape a vendor speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wire {
    /// `{model, messages, temperature, max_tokens}` → `choices[0].message.content`.
    ChatCompletions,
    /// `{contents, generationConfig}` with the key in the URL →
    /// `candidates[0].content.parts[0].text`.
    GenerativeContent,
    /// `{model, max_tokens, messages, system}` with key and version headers →
    /// `content[0].text`.
    Messages,
    /// Chat completions with the system prompt inline and no token cap.
    SearchGrounded,
}

impl ProviderKind {
    /// All vendors in priority order.
    pub const ALL: [Self; 7] = [
        Self::OpenAI,
        Self::Gemini,
        Self::Claude,
        Self::DeepSeek,
        Self::Grok,
        Self::Copilot,
        Self::Perplexity,
    ];

    /// Vendor name for logs and errors.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Gemini => "gemini",
            Self::Claude => "claude",
            Self::DeepSeek => "deepseek",
            Self::Grok => "grok",
            Self::Copilot => "copilot",
            Self::Perplexity => "perplexity",
        }
    }

    /// Registry position; lower is tried first.
    pub const fn priority(self) -> usize {
        self as usize
    }

    /// Environment variables holding the credential, preferred first.
    pub const fn env_keys(self) -> &'static [&'static str] {
        match self {
            Self::OpenAI => &["OPENAI_API_KEY"],
            Self::Gemini => &["GEMINI_API_KEY", "GOOGLE_GEMINI_API_KEY"],
            Self::Claude => &["ANTHROPIC_API_KEY"],
            Self::DeepSeek => &["DEEPSEEK_API_KEY"],
            Self::Grok => &["GROK_API_KEY"],
            Self::Copilot => &["COPILOT_API_KEY"],
            Self::Perplexity => &["PERPLEXITY_API_KEY"],
        }
    }

    /// Environment variable overriding the endpoint, if the vendor has one.
    pub const fn env_endpoint(self) -> Option<&'static str> {
        match self {
            Self::Copilot => Some("COPILOT_ENDPOINT"),
            _ => None,
        }
    }

    /// Wire protocol.
    pub const fn wire(self) -> Wire {
        match self {
            Self::Gemini => Wire::GenerativeContent,
            Self::Claude => Wire::Messages,
            Self::Perplexity => Wire::SearchGrounded,
            Self::OpenAI | Self::DeepSeek | Self::Grok | Self::Copilot => Wire::ChatCompletions,
        }
    }

    /// Declared model identifier.
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::OpenAI => openai::model::OPENAI,
            Self::Gemini => gemini::MODEL,
            Self::Claude => claude::MODEL,
            Self::DeepSeek => openai::model::DEEPSEEK,
            Self::Grok => openai::model::GROK,
            Self::Copilot => openai::model::COPILOT,
            Self::Perplexity => openai::model::PERPLEXITY,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One vendor slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Which vendor this slot configures.
    pub provider: ProviderKind,
    /// API key (supports `${ENV_VAR}` expansion at the gateway layer).
    #[serde(default)]
    pub api_key: String,
    /// Optional endpoint override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Optional model override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<CompactString>,
}

impl ProviderConfig {
    /// A slot with only a credential.
    pub fn new(provider: ProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            base_url: None,
            model: None,
        }
    }

    /// Whether the credential is present and not blank.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// The model this slot will use.
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// One slot per vendor, read from the process environment.
    pub fn from_env() -> Vec<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// One slot per vendor, read through `lookup`.
    ///
    /// Slots are returned for every vendor, configured or not; blank values
    /// count as absent.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Vec<Self> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        ProviderKind::ALL
            .into_iter()
            .map(|kind| Self {
                provider: kind,
                api_key: kind
                    .env_keys()
                    .iter()
                    .find_map(|key| read(key))
                    .unwrap_or_default(),
                base_url: kind.env_endpoint().and_then(|key| read(key)),
                model: None,
            })
            .collect()
    }
}
