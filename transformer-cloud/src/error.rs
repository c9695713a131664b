//! Service-layer error type
//!
//! `ServiceError` carries either a Supabase failure or a business-rule
//! `AppError` so handlers can use `?` throughout. Upstream status failures are
//! forwarded with the remote status code; everything else maps through
//! `ErrorCode::http_status`.

use axum::Json;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use shared::error::{ApiResponse, AppError, ErrorCode};
use thiserror::Error;

use crate::supabase::{RestResponse, SupabaseError};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Supabase transport/status/decode failure
    #[error(transparent)]
    Upstream(#[from] SupabaseError),
    /// Business-rule error (already an AppError with the correct ErrorCode)
    #[error(transparent)]
    App(#[from] AppError),
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Upstream(SupabaseError::Http(err)) => {
                tracing::warn!(error = %err, "Supabase unreachable");
                let code = if err.is_timeout() {
                    ErrorCode::TimeoutError
                } else {
                    ErrorCode::NetworkError
                };
                AppError::with_message(code, err.to_string())
            }
            ServiceError::Upstream(SupabaseError::Status { status, body }) => {
                tracing::warn!(%status, body = %body, "Supabase request failed");
                AppError::with_message(
                    ErrorCode::UpstreamError,
                    format!("Supabase request failed with status {status}"),
                )
                .with_detail("upstream_status", status.as_u16())
                .with_detail("upstream_body", upstream_body(&body))
            }
            ServiceError::Upstream(SupabaseError::Decode(err)) => {
                tracing::error!(error = %err, "Unexpected Supabase response");
                AppError::with_message(ErrorCode::UpstreamInvalidResponse, err.to_string())
            }
        }
    }
}

/// Remote body as JSON when it parses, otherwise as a string
fn upstream_body(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let forwarded = match &self {
            ServiceError::Upstream(err) => err.status(),
            ServiceError::App(_) => None,
        };
        let app_error: AppError = self.into();

        match forwarded {
            Some(status) => (status, Json(ApiResponse::<()>::error(&app_error))).into_response(),
            None => app_error.into_response(),
        }
    }
}

/// Pass-through of a Supabase response
impl IntoResponse for RestResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
