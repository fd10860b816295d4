use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::models::detection::{DetectBatchResponse, DetectResponse, SUPPORTED_LANGUAGES};

use super::AppContext;

pub async fn detect_single(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<Value>,
) -> Result<Json<DetectResponse>, ApiError> {
    let text = body.get("text").and_then(Value::as_str).unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ApiError::Validation("Text is required".to_string()));
    }

    let result = ctx.detection_service.detect(text)?;

    Ok(Json(DetectResponse {
        language: result.language,
        confidence: result.confidence,
        detected_text: text.to_string(),
    }))
}

pub async fn detect_batch(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<Value>,
) -> Result<Json<DetectBatchResponse>, ApiError> {
    let texts = match body.get("texts").and_then(Value::as_array) {
        Some(texts) if !texts.is_empty() => texts,
        _ => {
            return Err(ApiError::Validation(
                "Please provide an array of texts to detect languages".to_string(),
            ))
        }
    };

    // Non-string elements degrade to the empty-text marker rather than
    // failing the whole batch.
    let texts = texts
        .iter()
        .map(|value| value.as_str().unwrap_or_default().to_string())
        .collect::<Vec<String>>();

    let results = ctx.detection_service.detect_batch(&texts);

    Ok(Json(DetectBatchResponse { results }))
}

pub async fn supported_languages() -> Json<Value> {
    Json(json!({ "languages": SUPPORTED_LANGUAGES }))
}

pub async fn health_check(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime": ctx.started_at.elapsed().as_secs(),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
