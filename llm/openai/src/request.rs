//! Chat completions wire types.

use llm::{General, Message};
use serde::{Deserialize, Serialize};

/// The request body for the chat completions API.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: String,
    /// The messages array.
    pub messages: Vec<Message>,
    /// Sampling temperature.
    pub temperature: f64,
    /// Output token cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Request {
    /// Build a request from the generation config and messages.
    pub fn new(config: &General, messages: Vec<Message>) -> Self {
        Self {
            model: config.model.to_string(),
            messages,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// The response body, reduced to the text path.
#[derive(Debug, Default, Deserialize)]
pub struct Response {
    /// Completion choices.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion choice.
#[derive(Debug, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ChoiceMessage,
}

/// The message inside a choice.
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text.
    #[serde(default)]
    pub content: Option<String>,
}

impl Response {
    /// `choices[0].message.content`, if present and non-empty.
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
    }
}
