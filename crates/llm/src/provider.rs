//! Provider abstraction shared by every vendor adapter.

use crate::{Language, ProviderError};

/// A text-generation vendor.
///
/// Implementations hold only their credential and wire-format knowledge and
/// are safe to call from many requests at once. An adapter makes exactly one
/// network call per [`LLM::generate`] and never retries; retrying across
/// vendors is the router's job.
pub trait LLM: Send + Sync {
    /// Vendor name used in logs and errors, e.g. `"openai"`.
    fn name(&self) -> &str;

    /// Declared model identifier.
    fn model(&self) -> &str;

    /// Generate text for `prompt`, with `context` composed ahead of it.
    ///
    /// The system prompt is chosen by `language`. Network errors, non-2xx
    /// statuses, timeouts and responses missing the text field all surface
    /// as [`ProviderError`]; no partial text is returned on those paths.
    fn generate(
        &self,
        prompt: &str,
        context: Option<&str>,
        language: Language,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;
}
