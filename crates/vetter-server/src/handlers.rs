//! API route handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::models::{ClassifyRequest, ClassifyResponse};
use crate::state::AppState;

/// POST /v1/sanitized/input/ - Classify an input string.
///
/// The body is taken as a rejection-aware extraction so that every
/// read/parse failure lands in the same error branch and answers 500
/// with the message in the body. A parsed request always answers 200;
/// an unsanitized verdict is a normal result, not an error.
pub async fn classify_input(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>> {
    let Json(req) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    debug!(input_len = req.input.len(), "Classifying input");

    let classification = state.classifier.classify(&req.input);

    info!(
        verdict = %classification.verdict,
        matched_pattern = ?classification.matched_pattern,
        duration_us = classification.duration_us,
        "Input classified"
    );

    Ok(Json(ClassifyResponse {
        result: classification.verdict,
    }))
}
