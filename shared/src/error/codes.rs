//! Unified error codes for the maintenance service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Maintenance record errors
//! - 5xxx: Upstream (Supabase, retraining trigger) errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values so the frontend can switch on them without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Request body could not be parsed
    InvalidRequest = 5,

    // ==================== 4xxx: Maintenance ====================
    /// Maintenance record does not exist
    MaintenanceNotFound = 4001,
    /// No free maintenance number found within the attempt cap
    MaintenanceNumberExhausted = 4002,
    /// Create request without an inspection number
    InspectionNumberRequired = 4003,

    // ==================== 5xxx: Upstream ====================
    /// Supabase answered with a non-success status
    UpstreamError = 5001,
    /// Supabase answered with a body that could not be decoded
    UpstreamInvalidResponse = 5002,

    // ==================== 9xxx: System ====================
    /// Network error talking to an upstream service
    NetworkError = 9003,
    /// Upstream request timed out
    TimeoutError = 9004,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::InvalidRequest => "Invalid request",

            // Maintenance
            ErrorCode::MaintenanceNotFound => "Maintenance record not found",
            ErrorCode::MaintenanceNumberExhausted => {
                "Unable to generate a unique maintenance number"
            }
            ErrorCode::InspectionNumberRequired => "Inspection number is required",

            // Upstream
            ErrorCode::UpstreamError => "Upstream service returned an error",
            ErrorCode::UpstreamInvalidResponse => "Upstream service returned an invalid response",

            // System
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            5 => Ok(ErrorCode::InvalidRequest),

            // Maintenance
            4001 => Ok(ErrorCode::MaintenanceNotFound),
            4002 => Ok(ErrorCode::MaintenanceNumberExhausted),
            4003 => Ok(ErrorCode::InspectionNumberRequired),

            // Upstream
            5001 => Ok(ErrorCode::UpstreamError),
            5002 => Ok(ErrorCode::UpstreamInvalidResponse),

            // System
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::MaintenanceNotFound.code(), 4001);
        assert_eq!(ErrorCode::UpstreamError.code(), 5001);
        assert_eq!(ErrorCode::NetworkError.code(), 9003);
    }

    #[test]
    fn test_try_from_u16() {
        assert_eq!(ErrorCode::try_from(4002), Ok(ErrorCode::MaintenanceNumberExhausted));
        assert_eq!(ErrorCode::try_from(9004), Ok(ErrorCode::TimeoutError));
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::MaintenanceNotFound).unwrap();
        assert_eq!(json, "4001");

        let json = serde_json::to_string(&ErrorCode::InvalidRequest).unwrap();
        assert_eq!(json, "5");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("4003").unwrap();
        assert_eq!(code, ErrorCode::InspectionNumberRequired);

        let code: ErrorCode = serde_json::from_str("5001").unwrap();
        assert_eq!(code, ErrorCode::UpstreamError);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::MaintenanceNotFound), "4001");
        assert_eq!(format!("{}", ErrorCode::TimeoutError), "9004");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::InvalidRequest.message(), "Invalid request");
        assert_eq!(
            ErrorCode::MaintenanceNotFound.message(),
            "Maintenance record not found"
        );
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }
}
