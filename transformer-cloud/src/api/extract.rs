//! JSON body extractor that rejects with the `ApiResponse` envelope

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use shared::error::{AppError, ErrorCode};

/// Like [`Json`], but any rejection (syntax error, wrong type, missing
/// content type) becomes a 400 `InvalidRequest`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "Rejected request body");
                Err(AppError::with_message(
                    ErrorCode::InvalidRequest,
                    rejection.body_text(),
                ))
            }
        }
    }
}
