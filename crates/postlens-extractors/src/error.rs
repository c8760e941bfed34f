//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during text extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Declared media type is neither a PDF nor an image.
    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),

    /// Extraction process failed.
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// PDF-specific extraction error.
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// OCR-specific extraction error.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// The backend for this media kind was not compiled in.
    #[error("No {0} backend available in this build")]
    BackendUnavailable(&'static str),

    /// Extraction did not finish before the caller's deadline.
    #[error("Extraction timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// IO error during extraction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Task join error from spawn_blocking (includes backend panics).
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ExtractError {
    /// Whether the error is the caller's fault (wrong media type) rather than
    /// a failure of the backend.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ExtractError::UnsupportedType(_))
    }
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
