//! Provider implementation
//!
//! Unified `Provider` enum with enum dispatch over the three wire
//! protocols. `build_provider()` turns a configured slot into a live
//! adapter, picking the variant from the vendor's [`Wire`].

use crate::config::{ProviderConfig, ProviderKind, Wire};
use anyhow::{Result, bail};
use claude::Claude;
use gemini::Gemini;
use llm::{Client, General, LLM, Language, ProviderError};
use openai::{OpenAI, Style};

/// Unified provider enum.
///
/// The registry constructs the appropriate variant from each slot's
/// `ProviderKind`. The router is monomorphized on `Provider`.
#[derive(Clone)]
pub enum Provider {
    /// Chat completions API (OpenAI, DeepSeek, Grok, Copilot, Perplexity).
    OpenAI(OpenAI),
    /// Gemini `generateContent` API.
    Gemini(Gemini),
    /// Anthropic Messages API.
    Claude(Claude),
}

/// Construct a `Provider` from a slot and a shared HTTP client.
///
/// Fails when the slot has no credential or the credential cannot be sent
/// as a header.
pub fn build_provider(config: &ProviderConfig, client: Client) -> Result<Provider> {
    if !config.is_configured() {
        bail!("{} has no api key", config.provider);
    }

    let key = config.api_key.trim();
    let model = config.model();
    let url = config.base_url.as_deref();
    let provider = match config.provider.wire() {
        Wire::GenerativeContent => {
            let endpoint = url.map_or_else(|| gemini::endpoint(model), str::to_owned);
            Provider::Gemini(Gemini::custom(client, key, &endpoint, model))
        }
        Wire::Messages => {
            let claude = match url {
                Some(url) => Claude::custom(client, key, url)?,
                None => Claude::anthropic(client, key)?,
            };
            Provider::Claude(claude.with_model(model))
        }
        Wire::SearchGrounded => {
            let search = match url {
                Some(url) => {
                    let general = General::new(model).without_max_tokens();
                    OpenAI::custom(client, config.provider.as_str(), key, url, general)?
                        .with_style(Style::Search)
                }
                None => OpenAI::perplexity(client, key)?,
            };
            Provider::OpenAI(search.with_model(model))
        }
        Wire::ChatCompletions => {
            Provider::OpenAI(build_chat(config.provider, key, url, client)?.with_model(model))
        }
    };
    Ok(provider)
}

fn build_chat(kind: ProviderKind, key: &str, url: Option<&str>, client: Client) -> Result<OpenAI> {
    let provider = match (kind, url) {
        (ProviderKind::Copilot, url) => OpenAI::copilot(client, key, url)?,
        (_, Some(url)) => {
            let config = General::new(kind.default_model());
            OpenAI::custom(client, kind.as_str(), key, url, config)?
        }
        (ProviderKind::DeepSeek, None) => OpenAI::deepseek(client, key)?,
        (ProviderKind::Grok, None) => OpenAI::grok(client, key)?,
        (_, None) => OpenAI::api(client, key)?,
    };
    Ok(provider)
}

impl LLM for Provider {
    fn name(&self) -> &str {
        match self {
            Self::OpenAI(p) => p.name(),
            Self::Gemini(p) => p.name(),
            Self::Claude(p) => p.name(),
        }
    }

    fn model(&self) -> &str {
        match self {
            Self::OpenAI(p) => p.model(),
            Self::Gemini(p) => p.model(),
            Self::Claude(p) => p.model(),
        }
    }

    async fn generate(
        &self,
        prompt: &str,
        context: Option<&str>,
        language: Language,
    ) -> Result<String, ProviderError> {
        match self {
            Self::OpenAI(p) => p.generate(prompt, context, language).await,
            Self::Gemini(p) => p.generate(prompt, context, language).await,
            Self::Claude(p) => p.generate(prompt, context, language).await,
        }
    }
}
