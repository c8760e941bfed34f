//! Factory for creating extractors.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ExtractedContent, MediaKind};
use crate::Extractor;

#[cfg(feature = "pdf")]
use crate::PdfExtractor;

#[cfg(feature = "ocr")]
use crate::ocr::OcrExtractor;

/// Factory for creating extraction backends.
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create the PDF backend.
    #[cfg(feature = "pdf")]
    pub fn pdf() -> Arc<dyn Extractor> {
        Arc::new(PdfExtractor::new())
    }

    #[cfg(not(feature = "pdf"))]
    pub fn pdf() -> Arc<dyn Extractor> {
        Arc::new(UnavailableExtractor::new(MediaKind::Pdf))
    }

    /// Create the OCR backend with the default language.
    #[cfg(feature = "ocr")]
    pub fn ocr() -> Arc<dyn Extractor> {
        Arc::new(OcrExtractor::new())
    }

    #[cfg(not(feature = "ocr"))]
    pub fn ocr() -> Arc<dyn Extractor> {
        Arc::new(UnavailableExtractor::new(MediaKind::Image))
    }

    /// Create the backend for a declared media type.
    pub fn for_mime_type(mime_type: &str) -> ExtractResult<Arc<dyn Extractor>> {
        match MediaKind::classify(mime_type) {
            MediaKind::Pdf => Ok(Self::pdf()),
            MediaKind::Image => Ok(Self::ocr()),
            MediaKind::Unsupported => Err(ExtractError::UnsupportedType(mime_type.to_string())),
        }
    }
}

/// Stand-in for a backend whose cargo feature is disabled.
#[derive(Debug, Clone)]
pub struct UnavailableExtractor {
    kind: MediaKind,
}

impl UnavailableExtractor {
    pub fn new(kind: MediaKind) -> Self {
        Self { kind }
    }
}

#[async_trait]
impl Extractor for UnavailableExtractor {
    async fn extract(&self, _content: &[u8]) -> ExtractResult<ExtractedContent> {
        Err(ExtractError::BackendUnavailable(self.kind.as_str()))
    }

    fn kind(&self) -> MediaKind {
        self.kind
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_for_mime_type() {
        let pdf = ExtractorFactory::for_mime_type("application/pdf").unwrap();
        assert_eq!(pdf.kind(), MediaKind::Pdf);

        let png = ExtractorFactory::for_mime_type("image/png").unwrap();
        assert_eq!(png.kind(), MediaKind::Image);

        let jpeg = ExtractorFactory::for_mime_type("image/jpeg").unwrap();
        assert_eq!(jpeg.kind(), MediaKind::Image);
    }

    #[test]
    fn test_factory_for_mime_type_unsupported() {
        let result = ExtractorFactory::for_mime_type("video/mp4");
        assert!(matches!(result, Err(ExtractError::UnsupportedType(t)) if t == "video/mp4"));
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_factory_pdf() {
        assert_eq!(ExtractorFactory::pdf().name(), "pdf-extract");
    }

    #[cfg(feature = "ocr")]
    #[test]
    fn test_factory_ocr() {
        assert_eq!(ExtractorFactory::ocr().name(), "tesseract");
    }

    #[test]
    fn test_unavailable_extractor() {
        let extractor = UnavailableExtractor::new(MediaKind::Image);
        let result = tokio_test::block_on(extractor.extract(b"pixels"));
        assert!(matches!(result, Err(ExtractError::BackendUnavailable("image"))));
        assert_eq!(extractor.kind(), MediaKind::Image);
    }
}
