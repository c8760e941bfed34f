//! Extraction pipeline routing a document to its backend.

use std::sync::Arc;

use tracing::debug;

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ExtractedContent, MediaKind};
use crate::Extractor;

/// Pipeline holding one backend per supported media kind.
///
/// Routing is an exhaustive match on [`MediaKind`]; an unsupported media
/// type fails before any backend sees the bytes.
#[derive(Clone)]
pub struct ExtractionPipeline {
    pdf: Arc<dyn Extractor>,
    image: Arc<dyn Extractor>,
}

impl ExtractionPipeline {
    /// Create pipeline from explicit backends.
    pub fn new(pdf: Arc<dyn Extractor>, image: Arc<dyn Extractor>) -> Self {
        Self { pdf, image }
    }

    /// Create pipeline with the compiled-in backends.
    pub fn with_defaults() -> Self {
        Self::new(crate::ExtractorFactory::pdf(), crate::ExtractorFactory::ocr())
    }

    /// Replace the PDF backend.
    pub fn with_pdf(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.pdf = extractor;
        self
    }

    /// Replace the image backend.
    pub fn with_image(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.image = extractor;
        self
    }

    /// Backend responsible for a media kind, if any.
    pub fn backend_for(&self, kind: MediaKind) -> Option<&Arc<dyn Extractor>> {
        match kind {
            MediaKind::Pdf => Some(&self.pdf),
            MediaKind::Image => Some(&self.image),
            MediaKind::Unsupported => None,
        }
    }

    /// Check if the pipeline can handle a given media type.
    pub fn supports(&self, mime_type: &str) -> bool {
        self.backend_for(MediaKind::classify(mime_type)).is_some()
    }

    /// Extract text using the backend for the declared media type.
    ///
    /// The returned text is trimmed of leading and trailing whitespace.
    pub async fn extract(
        &self,
        content: &[u8],
        mime_type: &str,
    ) -> ExtractResult<ExtractedContent> {
        let kind = MediaKind::classify(mime_type);
        let extractor = self
            .backend_for(kind)
            .ok_or_else(|| ExtractError::UnsupportedType(mime_type.to_string()))?;

        debug!(
            mime_type,
            backend = extractor.name(),
            size = content.len(),
            "Dispatching extraction"
        );

        let content = extractor.extract(content).await?;
        Ok(content.trimmed())
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}
