//! HTTP routes.
//!
//! Every reading handler resolves the request language, validates its
//! fields, assembles a prompt and hands it to the router. Generation never
//! fails, so the only error responses are validation 400s and the 404
//! fallback.

use crate::{error::ApiError, state::AppState};
use axum::{
    Json,
    extract::{FromRequestParts, Query},
    http::request::Parts,
    routing::{get, post},
};
use chrono::{SecondsFormat, Utc};
use llm::LLM;
use prompt::Language;
use serde::Deserialize;
use serde_json::{Value, json};
use std::convert::Infallible;

mod chat;
mod compatibility;
mod dreams;
mod horoscope;
mod tarot;

/// Build the axum router with every endpoint.
pub fn router<P: LLM + 'static>(state: AppState<P>) -> axum::Router {
    axum::Router::new()
        .route("/health", get(health))
        .route("/api/dreams/interpret", post(dreams::interpret::<P>))
        .route("/api/dreams/symbol-analysis", post(dreams::symbol::<P>))
        .route("/api/horoscope/generate", post(horoscope::generate::<P>))
        .route(
            "/api/horoscope/compatibility",
            post(horoscope::compatibility::<P>),
        )
        .route("/api/horoscope/all-signs", get(horoscope::all_signs))
        .route("/api/tarot/draw", post(tarot::draw::<P>))
        .route("/api/tarot/cards", get(tarot::cards))
        .route(
            "/api/compatibility/analyze",
            post(compatibility::analyze::<P>),
        )
        .route(
            "/api/compatibility/soulmate-insight",
            post(compatibility::soulmate::<P>),
        )
        .route("/api/chat/test", get(chat::test::<P>))
        .route("/api/chat/ask", post(chat::ask::<P>))
        .route("/api/chat/daily-guidance", post(chat::daily_guidance::<P>))
        .route(
            "/api/chat/spiritual-advice",
            post(chat::spiritual_advice::<P>),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "Kismetly is running ✨" }))
}

async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// A JSON body with an optional `lang` field next to the request fields.
#[derive(Debug, Deserialize)]
pub(crate) struct Localized<T> {
    #[serde(default)]
    lang: Option<String>,
    #[serde(flatten)]
    body: T,
}

/// Language signals carried outside the body: `?lang=` and the
/// `x-lang`/`x-language` headers.
#[derive(Debug, Default)]
pub(crate) struct Signals {
    query: Option<String>,
    header: Option<String>,
}

#[derive(Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

impl Signals {
    /// Resolve the language, preferring the body field.
    pub(crate) fn language(&self, body: Option<&str>) -> Language {
        Language::resolve(body, self.query.as_deref(), self.header.as_deref())
    }

    /// Split a localized body into its language and fields.
    pub(crate) fn open<T>(&self, request: Localized<T>) -> (Language, T) {
        (self.language(request.lang.as_deref()), request.body)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Signals {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<LangQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.lang);
        let header = ["x-lang", "x-language"].into_iter().find_map(|name| {
            parts
                .headers
                .get(name)?
                .to_str()
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(str::to_owned)
        });
        Ok(Self { query, header })
    }
}

/// Current time as RFC 3339 with millisecond precision.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::{Localized, Signals};
    use prompt::{DreamReading, Language};

    #[test]
    fn body_lang_wins() {
        let signals = Signals {
            query: Some("en".into()),
            header: Some("tr".into()),
        };
        let request: Localized<DreamReading> =
            serde_json::from_str(r#"{"lang":"tr-TR","description":"a river"}"#).unwrap();
        let (language, dream) = signals.open(request);
        assert_eq!(language, Language::Tr);
        assert_eq!(dream.description, "a river");
        assert_eq!(signals.language(None), Language::En);
    }

    #[test]
    fn header_is_last_resort() {
        let signals = Signals {
            query: None,
            header: Some("TR".into()),
        };
        assert_eq!(signals.language(Some(" ")), Language::Tr);
        assert_eq!(Signals::default().language(None), Language::En);
    }
}
