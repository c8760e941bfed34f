//! Error types for postlens analysis.

use postlens_extractors::ExtractError;
use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, AnalysisError>;

/// Errors surfaced by the analysis pipeline.
///
/// The suggestion engine never fails, so every variant originates either in
/// extraction or in handling the uploaded bytes.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Declared media type has no extraction backend. Caller error.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Backend could not produce text.
    #[error("Extraction failed: {0}")]
    ExtractionFailure(#[source] ExtractError),

    /// Upload exceeded the configured size cap while being stored.
    #[error("Upload exceeds the {limit} byte limit")]
    UploadTooLarge { limit: usize },

    /// IO error while storing or reading the upload.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    /// Whether the caller can fix this by sending a different request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::UnsupportedFormat(_) | AnalysisError::UploadTooLarge { .. }
        )
    }
}

impl From<ExtractError> for AnalysisError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedType(media_type) => AnalysisError::UnsupportedFormat(media_type),
            other => AnalysisError::ExtractionFailure(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unsupported_maps_to_client_error() {
        let err: AnalysisError = ExtractError::UnsupportedType("video/mp4".into()).into();
        assert!(matches!(err, AnalysisError::UnsupportedFormat(ref t) if t == "video/mp4"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_backend_errors_map_to_extraction_failure() {
        let err: AnalysisError = ExtractError::Ocr("engine crashed".into()).into();
        assert!(matches!(err, AnalysisError::ExtractionFailure(_)));
        assert!(!err.is_client_error());
        assert!(err.source().is_some());

        let err: AnalysisError =
            ExtractError::Timeout(std::time::Duration::from_secs(30)).into();
        assert!(matches!(err, AnalysisError::ExtractionFailure(ExtractError::Timeout(_))));
    }

    #[test]
    fn test_upload_too_large_is_client_error() {
        let err = AnalysisError::UploadTooLarge { limit: 1024 };
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Upload exceeds the 1024 byte limit");
    }
}
