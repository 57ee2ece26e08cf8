//! API route handlers.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use tracing::{debug, info, warn};

use toxiguard_core::build_classification_prompt;

use crate::error::{ApiError, Result};
use crate::models::{DetectRequest, DetectResponse, HealthResponse, HealthStatus};
use crate::page::INDEX_HTML;
use crate::state::AppState;

/// GET / - Serve the detector page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /detect - Classify text with the model.
///
/// The body is parsed as JSON whatever the declared content type. Body read
/// failures are reported as JSON errors too.
pub async fn detect(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<DetectResponse>> {
    let body = body.map_err(|rejection| {
        debug!(status = %rejection.status(), "Rejecting unreadable body");
        ApiError::from(rejection)
    })?;

    let req: DetectRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let Some(text) = req.trimmed_text() else {
        debug!("Rejecting request without text");
        return Err(ApiError::no_text());
    };

    debug!(text_len = text.len(), model = %state.model, "Classifying text");

    let prompt = build_classification_prompt(text);

    let raw = match state.inference.generate(&state.model, &prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "Inference failed");
            return Err(ApiError::Inference(e));
        }
    };

    debug!(raw = %raw, "Model response");

    let label = state.extractor.extract(Some(&raw));

    info!(%label, unknown = label.is_unknown(), text_len = text.len(), "Detection complete");

    Ok(Json(DetectResponse { label }))
}

/// GET /health - Report whether the inference service is reachable.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.inference.health().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: HealthStatus::Ok,
                model: state.model.to_string(),
                error: None,
            }),
        ),
        Err(e) => {
            warn!(error = %e, "Inference service health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: HealthStatus::Unavailable,
                    model: state.model.to_string(),
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
