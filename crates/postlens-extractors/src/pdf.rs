//! PDF text extraction using pdf-extract.

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ExtractedContent, MediaKind, PDF_MEDIA_TYPE};
use crate::Extractor;
use async_trait::async_trait;
use tracing::debug;

/// PDF text-layer extractor using the pdf-extract library.
///
/// Reads the whole buffer and concatenates the text of every page in
/// document order. A PDF without a text layer (a scan) yields an empty
/// string; there is no OCR fallback. The synchronous parser runs inside
/// spawn_blocking, so a parser panic surfaces as a join error instead of
/// taking down the worker.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text synchronously (called within spawn_blocking).
    fn extract_sync(content: &[u8]) -> ExtractResult<String> {
        pdf_extract::extract_text_from_mem(content)
            .map_err(|e| ExtractError::Pdf(format!("Failed to read PDF text layer: {}", e)))
    }
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent> {
        if !content.starts_with(b"%PDF") {
            debug!(
                size = content.len(),
                "Declared {} without a %PDF header", PDF_MEDIA_TYPE
            );
        }

        let owned = content.to_vec();
        let text = tokio::task::spawn_blocking(move || Self::extract_sync(&owned)).await??;

        Ok(ExtractedContent::new(text, MediaKind::Pdf))
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Pdf
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_identity() {
        let extractor = PdfExtractor::new();
        assert_eq!(extractor.kind(), MediaKind::Pdf);
        assert_eq!(extractor.name(), "pdf-extract");
    }

    #[tokio::test]
    async fn test_garbage_bytes_fail() {
        let extractor = PdfExtractor::new();
        let result = extractor.extract(b"definitely not a pdf").await;
        assert!(matches!(
            result,
            Err(ExtractError::Pdf(_)) | Err(ExtractError::TaskJoin(_))
        ));
    }
}
