//! Dream interpretation and symbol analysis.

use super::{Localized, Signals, timestamp};
use crate::{
    error::{ApiError, Invalid, required},
    state::AppState,
};
use axum::{Json, extract::State};
use llm::LLM;
use prompt::{DreamReading, SymbolAnalysis};
use serde_json::{Value, json};

pub(super) async fn interpret<P: LLM + 'static>(
    State(state): State<AppState<P>>,
    signals: Signals,
    Json(request): Json<Localized<DreamReading>>,
) -> Result<Json<Value>, ApiError> {
    let (language, dream) = signals.open(request);
    required(Some(dream.description.as_str()), Invalid::DreamDescription, language)?;
    tracing::info!("dream interpretation in {language}");

    let prompt = dream.prompt(language);
    let interpretation = state.router.generate(&prompt.text(), None, language).await;
    Ok(Json(json!({
        "interpretation": interpretation,
        "dream": dream.description,
        "timestamp": timestamp(),
    })))
}

pub(super) async fn symbol<P: LLM + 'static>(
    State(state): State<AppState<P>>,
    signals: Signals,
    Json(request): Json<Localized<SymbolAnalysis>>,
) -> Result<Json<Value>, ApiError> {
    let (language, analysis) = signals.open(request);
    required(Some(analysis.symbol.as_str()), Invalid::Symbol, language)?;
    tracing::info!("symbol analysis in {language}");

    let prompt = analysis.prompt(language);
    let text = state.router.generate(&prompt.text(), None, language).await;
    Ok(Json(json!({
        "symbol": analysis.symbol,
        "analysis": text,
        "timestamp": timestamp(),
    })))
}
