//! Chat messages and prompt composition.

use serde::{Deserialize, Serialize};

/// A message in a chat-style request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
    /// The role of the message
    pub role: Role,

    /// The content of the message
    pub content: String,
}

impl Message {
    /// Create a new system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// The role of a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The system instructions
    System,
    /// The user turn
    #[default]
    User,
    /// The model's reply
    Assistant,
}

/// Prefix `prompt` with `context` and a blank line, when a non-blank
/// context is given.
pub fn compose(prompt: &str, context: Option<&str>) -> String {
    match context.filter(|c| !c.trim().is_empty()) {
        Some(context) => format!("{context}\n\n{prompt}"),
        None => prompt.to_owned(),
    }
}
