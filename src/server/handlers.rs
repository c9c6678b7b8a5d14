// HTTP request handlers

use super::routes::AppState;
use crate::error::{Result, ServiceError};
use crate::metrics;
use crate::models::{Direction, HealthResponse, TranslationRequest, TranslationResponse};
use axum::extract::State;
use axum::Json;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Handler for GET /health: unconditional liveness signal.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Handler for GET /metrics: Prometheus text exposition.
pub async fn metrics_handler() -> String {
    metrics::gather_metrics()
}

/// Handler for POST /translate.
///
/// The body is deserialized by hand so malformed JSON and unknown direction
/// codes both surface through the service's own error shape, before any
/// model work happens.
pub async fn translate_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<TranslationResponse>> {
    let request: TranslationRequest = serde_json::from_str(&body).map_err(|e| {
        debug!("failed to deserialize translate request: {e}");
        ServiceError::InvalidRequest(e.to_string())
    })?;

    let direction: Direction = request.direction.parse()?;

    info!(
        direction = %direction,
        chars = request.text.chars().count(),
        "translate request"
    );

    let started = Instant::now();
    let translated = state
        .translator
        .translate(&request.text, direction)
        .await
        .inspect(|_| metrics::record_translation(direction.code(), true))
        .inspect_err(|e| {
            metrics::record_translation(direction.code(), false);
            warn!(direction = %direction, "translation failed: {e}");
        })?;

    debug!(
        direction = %direction,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "translation complete"
    );

    Ok(Json(TranslationResponse {
        original_text: request.text,
        translated_text: translated,
        direction,
    }))
}
