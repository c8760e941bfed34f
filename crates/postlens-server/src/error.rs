//! Error handling for the HTTP API.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use postlens_core::AnalysisError;
use serde::Serialize;
use std::fmt;
use tracing::{error, warn};

/// Generic message for any failure on our side. Details go to the log only.
pub const PROCESSING_ERROR_MESSAGE: &str = "Error processing file";

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn no_file() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "NO_FILE", "No file uploaded")
    }

    pub fn unsupported_format() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "UNSUPPORTED_FORMAT",
            "Unsupported file format",
        )
    }

    pub fn payload_too_large(limit: usize) -> Self {
        Self::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            "PAYLOAD_TOO_LARGE",
            format!("File exceeds the {} byte upload limit", limit),
        )
    }

    pub fn processing() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "PROCESSING_ERROR",
            PROCESSING_ERROR_MESSAGE,
        )
    }

    /// Map a multipart read failure, keeping the body-limit case distinct.
    pub fn from_multipart(err: MultipartError, limit: usize) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::payload_too_large(limit)
        } else {
            warn!(error = %err, "Malformed multipart upload");
            Self::bad_request(err.body_text())
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            code: self.code,
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::UnsupportedFormat(media_type) => {
                warn!(media_type = %media_type, "Rejected unsupported upload");
                ApiError::unsupported_format()
            }
            AnalysisError::UploadTooLarge { limit } => ApiError::payload_too_large(limit),
            other => {
                error!(error = %other, source = ?std::error::Error::source(&other), "Failed to process upload");
                ApiError::processing()
            }
        }
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use postlens_core::ExtractError;

    #[test]
    fn test_analysis_error_mapping() {
        let err = ApiError::from(AnalysisError::UnsupportedFormat("video/mp4".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "UNSUPPORTED_FORMAT");

        let err = ApiError::from(AnalysisError::UploadTooLarge { limit: 10 });
        assert_eq!(err.status, StatusCode::PAYLOAD_TOO_LARGE);

        let err = ApiError::from(AnalysisError::ExtractionFailure(ExtractError::Ocr(
            "tesseract not found at /usr/bin/tesseract".into(),
        )));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, PROCESSING_ERROR_MESSAGE);
        assert!(!err.message.contains("tesseract"));
    }

    #[test]
    fn test_display() {
        let err = ApiError::no_file();
        assert_eq!(err.to_string(), "[400 Bad Request] NO_FILE: No file uploaded");
    }
}
