//! Startup registry of live providers.

use crate::{
    config::ProviderConfig,
    provider::{Provider, build_provider},
};
use llm::{Client, LLM};

/// The ordered, filtered set of providers built once at startup.
///
/// Slots without a credential are dropped and the rest are sorted by vendor
/// priority. Construction never fails: a slot that cannot be built is logged
/// and skipped, and an empty registry is a valid fallback-only state.
#[derive(Clone, Default)]
pub struct Registry {
    providers: Vec<Provider>,
}

impl Registry {
    /// Build from configured slots.
    pub fn from_configs(configs: impl IntoIterator<Item = ProviderConfig>, client: Client) -> Self {
        let mut configs: Vec<_> = configs
            .into_iter()
            .filter(ProviderConfig::is_configured)
            .collect();
        configs.sort_by_key(|config| config.provider.priority());

        let providers: Vec<_> = configs
            .iter()
            .filter_map(|config| match build_provider(config, client.clone()) {
                Ok(provider) => Some(provider),
                Err(e) => {
                    tracing::warn!("skipping provider {}: {e}", config.provider);
                    None
                }
            })
            .collect();

        let registry = Self { providers };
        if registry.is_empty() {
            tracing::warn!("no providers configured, serving local fallback replies only");
        } else {
            tracing::info!(
                "registry initialized with {} provider(s): {}",
                registry.len(),
                registry.names().join(", ")
            );
        }
        registry
    }

    /// Build from the process environment.
    pub fn from_env(client: Client) -> Self {
        Self::from_configs(ProviderConfig::from_env(), client)
    }

    /// Provider names in registry order.
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(LLM::name).collect()
    }

    /// Live providers in registry order.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Number of live providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider is live.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Take the providers out of the registry.
    pub fn into_providers(self) -> Vec<Provider> {
        self.providers
    }
}
