//! Gemini provider.
//!
//! Implements the `generateContent` API: key in the `?key=` query
//! parameter, and the system prompt interpolated into the single user part.

use llm::{Client, General, HttpProvider};
pub use request::{Request, Response};
use std::time::Duration;

mod provider;
mod request;

/// The default model identifier.
pub const MODEL: &str = "gemini-1.5-flash";

/// The `generateContent` endpoint for `model`.
pub fn endpoint(model: &str) -> String {
    format!("https://generativelanguage.googleapis.com/v1/models/{model}:generateContent")
}

/// The Gemini provider.
#[derive(Clone)]
pub struct Gemini {
    /// Transport with the key in the query string.
    http: HttpProvider,
    /// Model and sampling.
    config: General,
}

impl Gemini {
    /// Create a provider targeting the Google API with the default model.
    pub fn api(client: Client, key: &str) -> Self {
        Self::custom(client, key, &endpoint(MODEL), MODEL)
    }

    /// Create a provider targeting a custom endpoint.
    pub fn custom(client: Client, key: &str, endpoint: &str, model: &str) -> Self {
        Self {
            http: HttpProvider::query_key(client, "key", key, endpoint),
            config: General::new(model),
        }
    }

    /// Override the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = self.http.with_timeout(timeout);
        self
    }

    /// The target endpoint, without the key.
    pub fn endpoint(&self) -> &str {
        self.http.endpoint()
    }
}
