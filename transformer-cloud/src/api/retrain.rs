//! Model retraining trigger endpoint

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use shared::models::RetrainRequest;

use crate::state::AppState;

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": msg })))
}

// ── POST /api/retrain ──

/// Body is optional; an empty body triggers with the trigger's defaults.
pub async fn trigger(State(state): State<AppState>, body: Bytes) -> Response {
    let req = if body.is_empty() {
        RetrainRequest::default()
    } else {
        match serde_json::from_slice::<RetrainRequest>(&body) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(%e, "Invalid retrain request body");
                let msg = format!("Invalid request body: {e}");
                return error_response(StatusCode::BAD_REQUEST, &msg).into_response();
            }
        }
    };

    match state.retrain.trigger(&req).await {
        Ok(triggered) => Json(triggered).into_response(),
        Err(e) => {
            tracing::error!(%e, "Retraining trigger failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()).into_response()
        }
    }
}
