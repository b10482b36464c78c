//! Generation parameters.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Sampling temperature sent to every vendor.
pub const DEFAULT_TEMPERATURE: f64 = 0.8;

/// Output token cap for vendors that accept one.
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Per-adapter generation configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct General {
    /// The model to use
    pub model: CompactString,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Output token cap, `None` to let the vendor decide
    #[serde(default = "default_max_tokens")]
    pub max_tokens: Option<u32>,
}

impl General {
    /// Create a configuration with default sampling for `model`.
    pub fn new(model: impl Into<CompactString>) -> Self {
        Self {
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: default_max_tokens(),
        }
    }

    /// Drop the output token cap.
    pub fn without_max_tokens(mut self) -> Self {
        self.max_tokens = None;
        self
    }
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> Option<u32> {
    Some(DEFAULT_MAX_TOKENS)
}
