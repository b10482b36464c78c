//! Localized prompt assembly.
//!
//! Every reading the router serves is built here: a fixed system prompt per
//! language and [`Domain`], plus a user prompt interpolated from structured
//! request fields. Also carries the static reading data (zodiac signs, the
//! major arcana) and request language resolution.

pub use chat::{ChatAsk, ChatTurn, DailyGuidance, HISTORY_WINDOW, SpiritualAdvice, Speaker};
pub use compatibility::{CompatibilityReading, SoulmateInsight};
pub use domain::Domain;
pub use dream::{DreamReading, SymbolAnalysis};
pub use horoscope::{HoroscopeReading, SignCompatibility, Timeframe};
pub use language::Language;
pub use tarot::{Card, DECK, DrawnCard, Spread, TarotReading, draw, draw_cards};
pub use zodiac::Sign;

mod chat;
mod compatibility;
mod domain;
mod dream;
mod horoscope;
mod language;
pub mod tarot;
mod zodiac;

/// An assembled prompt: the persona system prompt and the user prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Fixed system prompt for the language and domain.
    pub system: &'static str,
    /// User prompt with the caller's fields interpolated.
    pub user: String,
}

impl Prompt {
    /// Create a prompt for a domain.
    pub fn new(domain: Domain, language: Language, user: impl Into<String>) -> Self {
        Self {
            system: domain.system_prompt(language),
            user: user.into(),
        }
    }

    /// The single text handed to the router: system prompt, a blank line,
    /// then the user prompt.
    pub fn text(&self) -> String {
        format!("{}\n\n{}", self.system, self.user)
    }
}

/// Join non-empty lines with `\n`.
pub(crate) fn lines(parts: impl IntoIterator<Item = Option<String>>) -> String {
    parts
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Some(value)` when the optional field is present and not blank.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
