//! Request errors and their JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use prompt::Language;
use serde_json::json;

/// A missing or invalid request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    DreamDescription,
    Symbol,
    Sign,
    SignPair,
    TarotQuestion,
    CompatibilityPair,
    Name,
    Message,
    SituationOrQuestion,
}

impl Invalid {
    /// Localized error message.
    pub const fn message(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::DreamDescription, Language::En) => "Dream description required",
            (Self::DreamDescription, Language::Tr) => "Rüya açıklaması gerekli",
            (Self::Symbol, Language::En) => "Symbol required",
            (Self::Symbol, Language::Tr) => "Sembol gerekli",
            (Self::Sign, Language::En) => "Valid zodiac sign required",
            (Self::Sign, Language::Tr) => "Geçerli bir burç adı gerekli",
            (Self::SignPair, Language::En) => "Two valid zodiac signs required",
            (Self::SignPair, Language::Tr) => "İki geçerli burç adı gerekli",
            (Self::TarotQuestion, Language::En) => "Question required for tarot reading",
            (Self::TarotQuestion, Language::Tr) => "Tarot okuması için soru gerekli",
            (Self::CompatibilityPair, Language::En) => "Two names or two zodiac signs required",
            (Self::CompatibilityPair, Language::Tr) => "İki isim veya iki burç adı gerekli",
            (Self::Name, Language::En) => "Name required",
            (Self::Name, Language::Tr) => "İsim gerekli",
            (Self::Message, Language::En) => "Message required",
            (Self::Message, Language::Tr) => "Mesaj gerekli",
            (Self::SituationOrQuestion, Language::En) => "Situation or question required",
            (Self::SituationOrQuestion, Language::Tr) => "Durum veya soru gerekli",
        }
    }
}

/// An error response: a status and an `{"error": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    /// 400 with a localized message.
    pub fn invalid(reason: Invalid, language: Language) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: reason.message(language),
        }
    }

    /// 404 for unknown paths.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Endpoint not found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// `Ok(value)` when the field is present and not blank.
pub(crate) fn required(
    value: Option<&str>,
    reason: Invalid,
    language: Language,
) -> Result<&str, ApiError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::invalid(reason, language))
}
