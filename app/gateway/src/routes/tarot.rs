//! Tarot draws.

use super::{Localized, Signals, timestamp};
use crate::{
    error::{ApiError, Invalid, required},
    state::AppState,
};
use axum::{Json, extract::State};
use llm::LLM;
use prompt::{DECK, Spread, TarotReading};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(super) struct DrawRequest {
    question: Option<String>,
    spread_type: Option<String>,
}

pub(super) async fn draw<P: LLM + 'static>(
    State(state): State<AppState<P>>,
    signals: Signals,
    Json(request): Json<Localized<DrawRequest>>,
) -> Result<Json<Value>, ApiError> {
    let (language, request) = signals.open(request);
    let question = required(
        request.question.as_deref(),
        Invalid::TarotQuestion,
        language,
    )?;
    let spread_type = request.spread_type.unwrap_or_else(|| "single".to_owned());
    let spread = Spread::parse(&spread_type);
    tracing::info!("tarot reading in {language}");

    let reading = TarotReading::draw(question, spread);
    let prompt = reading.prompt(language);
    let text = state.router.generate(&prompt.text(), None, language).await;
    let cards: Vec<_> = reading.cards.iter().map(|drawn| drawn.card).collect();
    Ok(Json(json!({
        "question": reading.question,
        "spreadType": spread_type,
        "spreadName": spread.name(language),
        "cards": cards,
        "reversedCards": reading.labels(),
        "reading": text,
        "timestamp": timestamp(),
    })))
}

pub(super) async fn cards() -> Json<Value> {
    Json(json!({ "cards": DECK }))
}
