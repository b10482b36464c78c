//! Horoscopes and sign-to-sign compatibility.

use super::{Localized, Signals, timestamp};
use crate::{
    error::{ApiError, Invalid},
    state::AppState,
};
use axum::{Json, extract::State};
use llm::LLM;
use prompt::{HoroscopeReading, Sign, SignCompatibility, Timeframe};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct GenerateRequest {
    sign: Option<String>,
    timeframe: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct PairRequest {
    sign1: Option<String>,
    sign2: Option<String>,
}

fn parse(sign: Option<&str>) -> Option<Sign> {
    sign?.parse().ok()
}

pub(super) async fn generate<P: LLM + 'static>(
    State(state): State<AppState<P>>,
    signals: Signals,
    Json(request): Json<Localized<GenerateRequest>>,
) -> Result<Json<Value>, ApiError> {
    let (language, request) = signals.open(request);
    let sign = parse(request.sign.as_deref())
        .ok_or_else(|| ApiError::invalid(Invalid::Sign, language))?;
    let timeframe = request.timeframe.unwrap_or_else(|| "daily".to_owned());
    tracing::info!("horoscope generation in {language}");

    let reading = HoroscopeReading {
        sign,
        timeframe: Timeframe::parse(&timeframe),
    };
    let prompt = reading.prompt(language);
    let horoscope = state.router.generate(&prompt.text(), None, language).await;
    Ok(Json(json!({
        "sign": sign.upper(),
        "timeframe": timeframe,
        "horoscope": horoscope,
        "date": timestamp(),
    })))
}

pub(super) async fn compatibility<P: LLM + 'static>(
    State(state): State<AppState<P>>,
    signals: Signals,
    Json(request): Json<Localized<PairRequest>>,
) -> Result<Json<Value>, ApiError> {
    let (language, request) = signals.open(request);
    let (Some(first), Some(second)) = (
        parse(request.sign1.as_deref()),
        parse(request.sign2.as_deref()),
    ) else {
        return Err(ApiError::invalid(Invalid::SignPair, language));
    };
    tracing::info!("horoscope compatibility in {language}");

    let prompt = SignCompatibility { first, second }.prompt(language);
    let compatibility = state.router.generate(&prompt.text(), None, language).await;
    Ok(Json(json!({
        "sign1": first.upper(),
        "sign2": second.upper(),
        "compatibility": compatibility,
        "timestamp": timestamp(),
    })))
}

pub(super) async fn all_signs() -> Json<Value> {
    let signs: Vec<_> = Sign::ALL
        .into_iter()
        .map(|sign| json!({ "name": sign.display_name(), "value": sign.as_str() }))
        .collect();
    Json(json!({ "signs": signs }))
}
