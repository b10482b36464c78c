//! Kismet chat, daily guidance and spiritual advice.

use super::{Localized, Signals, timestamp};
use crate::{
    error::{ApiError, Invalid, required},
    state::AppState,
};
use axum::{Json, extract::State};
use chrono::Utc;
use llm::LLM;
use prompt::{ChatAsk, DailyGuidance, Language, SpiritualAdvice};
use serde_json::{Value, json};

/// Prompt sent by the connectivity probe.
const PROBE: &str = "Hello! Test message.";

pub(super) async fn test<P: LLM + 'static>(State(state): State<AppState<P>>) -> Json<Value> {
    let message = state.router.generate(PROBE, None, Language::En).await;
    Json(json!({
        "ok": true,
        "providerCount": state.router.providers().len(),
        "message": message,
    }))
}

pub(super) async fn ask<P: LLM + 'static>(
    State(state): State<AppState<P>>,
    signals: Signals,
    Json(request): Json<Localized<ChatAsk>>,
) -> Result<Json<Value>, ApiError> {
    let (language, ask) = signals.open(request);
    required(Some(ask.message.as_str()), Invalid::Message, language)?;
    tracing::info!(
        "chat ask in {language} with {} prior turn(s)",
        ask.conversation_history.len()
    );

    let prompt = ask.prompt(language);
    let context = ask.context(language);
    let message = state
        .router
        .generate(&prompt.user, Some(&context), language)
        .await;
    Ok(Json(json!({
        "message": message,
        "timestamp": Utc::now().timestamp_millis(),
        "conversationUpdated": true,
    })))
}

pub(super) async fn daily_guidance<P: LLM + 'static>(
    State(state): State<AppState<P>>,
    signals: Signals,
    Json(request): Json<Localized<DailyGuidance>>,
) -> Json<Value> {
    let (language, guidance) = signals.open(request);
    tracing::info!("daily guidance in {language}");

    let prompt = guidance.prompt(language);
    let text = state.router.generate(&prompt.text(), None, language).await;
    Json(json!({ "guidance": text, "date": timestamp() }))
}

pub(super) async fn spiritual_advice<P: LLM + 'static>(
    State(state): State<AppState<P>>,
    signals: Signals,
    Json(request): Json<Localized<SpiritualAdvice>>,
) -> Result<Json<Value>, ApiError> {
    let (language, advice) = signals.open(request);
    if advice.topic().is_none() {
        return Err(ApiError::invalid(Invalid::SituationOrQuestion, language));
    }
    tracing::info!("spiritual advice in {language}");

    let prompt = advice.prompt(language);
    let text = state.router.generate(&prompt.text(), None, language).await;
    Ok(Json(json!({ "advice": text, "timestamp": timestamp() })))
}
