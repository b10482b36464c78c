//! Messages API wire types.

use compact_str::CompactString;
use llm::{General, Message};
use serde::{Deserialize, Serialize};

/// The request body for the Anthropic Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// The messages array, user turns only.
    pub messages: Vec<Message>,
    /// System prompt (top-level, not in messages array).
    pub system: String,
    /// Temperature.
    pub temperature: f64,
}

impl Request {
    /// Build a single-turn request.
    pub fn new(config: &General, system: &str, user: String) -> Self {
        Self {
            model: config.model.to_string(),
            max_tokens: config.max_tokens.unwrap_or(llm::DEFAULT_MAX_TOKENS),
            messages: vec![Message::user(user)],
            system: system.to_owned(),
            temperature: config.temperature,
        }
    }
}

/// Raw Anthropic non-streaming response, reduced to content blocks.
#[derive(Debug, Default, Deserialize)]
pub struct Response {
    /// Content blocks in order.
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// One content block.
#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    /// Block type, `"text"` for generated text.
    #[serde(rename = "type", default)]
    pub kind: CompactString,
    /// Text of a text block.
    #[serde(default)]
    pub text: Option<String>,
}

impl Response {
    /// `content[0].text`, if present and non-empty.
    pub fn into_text(self) -> Option<String> {
        self.content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .filter(|text| !text.trim().is_empty())
    }
}
