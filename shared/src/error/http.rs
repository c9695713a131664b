//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            Self::InvalidRequest | Self::InspectionNumberRequired => StatusCode::BAD_REQUEST,

            // 404 Not Found
            Self::MaintenanceNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            Self::MaintenanceNumberExhausted => StatusCode::INTERNAL_SERVER_ERROR,

            // 502 Bad Gateway (Supabase misbehaved)
            Self::UpstreamError | Self::UpstreamInvalidResponse => StatusCode::BAD_GATEWAY,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}
