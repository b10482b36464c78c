//! Love compatibility and soulmate insight.

use super::{Localized, Signals, timestamp};
use crate::{
    error::{ApiError, Invalid, required},
    state::AppState,
};
use axum::{Json, extract::State};
use llm::LLM;
use prompt::{CompatibilityReading, SoulmateInsight};
use serde_json::{Value, json};

fn upper(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::to_uppercase)
}

pub(super) async fn analyze<P: LLM + 'static>(
    State(state): State<AppState<P>>,
    signals: Signals,
    Json(request): Json<Localized<CompatibilityReading>>,
) -> Result<Json<Value>, ApiError> {
    let (language, pair) = signals.open(request);
    if !pair.is_complete() {
        return Err(ApiError::invalid(Invalid::CompatibilityPair, language));
    }
    tracing::info!("compatibility analysis in {language}");

    let prompt = pair.prompt(language);
    let analysis = state.router.generate(&prompt.text(), None, language).await;
    Ok(Json(json!({
        "person1": pair.name1.clone().or_else(|| upper(&pair.sign1)),
        "person2": pair.name2.clone().or_else(|| upper(&pair.sign2)),
        "sign1": upper(&pair.sign1),
        "sign2": upper(&pair.sign2),
        "analysis": analysis,
        "timestamp": timestamp(),
    })))
}

pub(super) async fn soulmate<P: LLM + 'static>(
    State(state): State<AppState<P>>,
    signals: Signals,
    Json(request): Json<Localized<SoulmateInsight>>,
) -> Result<Json<Value>, ApiError> {
    let (language, seeker) = signals.open(request);
    required(Some(seeker.name.as_str()), Invalid::Name, language)?;
    tracing::info!("soulmate insight in {language}");

    let prompt = seeker.prompt(language);
    let insight = state.router.generate(&prompt.text(), None, language).await;
    Ok(Json(json!({
        "person": seeker.name,
        "insight": insight,
        "timestamp": timestamp(),
    })))
}
