//! `generateContent` wire types.

use llm::General;
use serde::{Deserialize, Serialize};

/// The request body for the `generateContent` API.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// Conversation contents, one user entry.
    pub contents: Vec<Content>,
    /// Sampling configuration.
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

/// A content entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Text parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A text part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// The text.
    #[serde(default)]
    pub text: Option<String>,
}

/// Sampling configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature.
    pub temperature: f64,
    /// Output token cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl Request {
    /// Build a single-part request.
    pub fn new(config: &General, text: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(text) }],
            }],
            generation_config: GenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_tokens,
            },
        }
    }
}

/// The response body, reduced to candidates.
#[derive(Debug, Default, Deserialize)]
pub struct Response {
    /// Generated candidates.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One candidate.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    /// The candidate content.
    #[serde(default)]
    pub content: Content,
}

impl Response {
    /// `candidates[0].content.parts[0].text`, if present and non-empty.
    pub fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.trim().is_empty())
    }
}
