//! Rotating failover across providers.

use crate::{fallback, provider::Provider, registry::Registry};
use compact_str::CompactString;
use llm::{LLM, Language};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Where a generated text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A remote provider, by name.
    Provider(CompactString),
    /// The offline fallback generator.
    Fallback,
}

/// Generated text tagged with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// The text. Never empty.
    pub text: String,
    /// Who produced it.
    pub source: Source,
}

impl Generation {
    /// Whether the text came from the fallback generator.
    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }

    fn fallback(prompt: &str, language: Language) -> Self {
        Self {
            text: fallback::reply(prompt, language),
            source: Source::Fallback,
        }
    }
}

/// Single entry point for text generation.
///
/// Each call makes one pass over the providers, starting at the rotation
/// cursor and wrapping around, trying every provider at most once. The first
/// success ends the pass and moves the cursor to the provider after the one
/// that answered; failures never move it. When passes overlap, each success
/// still advances the cursor exactly once: a pass whose starting position
/// was already moved by another steps the cursor by one instead. When the pass is exhausted, or
/// there are no providers at all, the caller gets a fallback reply instead
/// of an error.
pub struct Router<P = Provider> {
    providers: Vec<P>,
    cursor: AtomicUsize,
}

impl Router<Provider> {
    /// Build a router over a startup registry.
    pub fn from_registry(registry: Registry) -> Self {
        Self::new(registry.into_providers())
    }
}

impl<P: LLM> Router<P> {
    /// Build a router over providers in priority order.
    pub fn new(providers: Vec<P>) -> Self {
        Self {
            providers,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Providers in registry order.
    pub fn providers(&self) -> &[P] {
        &self.providers
    }

    /// Where the next pass starts.
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    /// Generate text. Never fails and never returns an empty string.
    pub async fn generate(&self, prompt: &str, context: Option<&str>, language: Language) -> String {
        self.generate_traced(prompt, context, language).await.text
    }

    /// Generate text and report which provider, if any, produced it.
    pub async fn generate_traced(
        &self,
        prompt: &str,
        context: Option<&str>,
        language: Language,
    ) -> Generation {
        let len = self.providers.len();
        if len == 0 {
            tracing::warn!("no providers configured, using local fallback");
            return Generation::fallback(prompt, language);
        }

        let start = self.cursor() % len;
        for index in (start..len).chain(0..start) {
            let provider = &self.providers[index];
            tracing::debug!("attempting with {}", provider.name());
            match provider.generate(prompt, context, language).await {
                Ok(text) => {
                    self.advance(start, index, len);
                    tracing::debug!("{} succeeded", provider.name());
                    return Generation {
                        text,
                        source: Source::Provider(provider.name().into()),
                    };
                }
                Err(e) => tracing::warn!("provider failed: {e}"),
            }
        }

        tracing::warn!("all {len} providers failed, using local fallback");
        Generation::fallback(prompt, language)
    }

    /// Move the cursor past the provider at `index` after a pass that
    /// started at `start`. If another pass moved the cursor in the meantime,
    /// step it by one from wherever it is so no success is lost.
    fn advance(&self, start: usize, index: usize, len: usize) {
        let next = (index + 1) % len;
        if self
            .cursor
            .compare_exchange(start, next, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            let _ = self
                .cursor
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cursor| {
                    Some((cursor + 1) % len)
                });
        }
    }

    /// Generate up to `count` texts, one sequential call each, capped at the
    /// number of providers. Always returns at least one text.
    pub async fn generate_many(
        &self,
        prompt: &str,
        context: Option<&str>,
        language: Language,
        count: usize,
    ) -> Vec<String> {
        let mut texts = Vec::with_capacity(count.min(self.providers.len()));
        for _ in 0..count.min(self.providers.len()) {
            texts.push(self.generate(prompt, context, language).await);
        }
        if texts.is_empty() {
            texts.push(fallback::reply(prompt, language));
        }
        texts
    }
}
