//! Extraction followed by suggestion, once per document.

use std::sync::Arc;
use std::time::{Duration, Instant};

use postlens_extractors::{ExtractError, ExtractionPipeline, MediaKind};
use tracing::{debug, info};

use crate::error::CoreResult;
use crate::types::{AnalysisResult, InputDocument};

/// Runs a document through extraction and the suggestion rules.
///
/// Cheap to clone; holds no per-request state, so one instance serves
/// concurrent requests.
#[derive(Clone)]
pub struct Analyzer {
    pipeline: Arc<ExtractionPipeline>,
    timeout: Option<Duration>,
}

impl Analyzer {
    pub fn new(pipeline: ExtractionPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            timeout: None,
        }
    }

    /// Analyzer over the compiled-in PDF and OCR backends.
    pub fn with_defaults() -> Self {
        Self::new(ExtractionPipeline::with_defaults())
    }

    /// Bound the time spent waiting for extraction.
    ///
    /// On expiry the request fails with [`ExtractError::Timeout`]; the
    /// blocking backend work itself runs to completion in the background.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Extract the trimmed text of a document.
    pub async fn extract_text(&self, doc: &InputDocument) -> CoreResult<String> {
        let media_type = doc.declared_media_type();
        let extraction = self.pipeline.extract(doc.bytes(), media_type);

        let content = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, extraction)
                .await
                .map_err(|_| ExtractError::Timeout(limit))??,
            None => extraction.await?,
        };

        Ok(content.text)
    }

    /// Extract text from `doc` and evaluate the suggestion rules over it.
    pub async fn analyze(&self, doc: &InputDocument) -> CoreResult<AnalysisResult> {
        let start = Instant::now();
        let kind = MediaKind::classify(doc.declared_media_type());

        debug!(
            media_type = doc.declared_media_type(),
            kind = %kind,
            size_bytes = doc.size_bytes(),
            "Analyzing document"
        );

        let text = self.extract_text(doc).await?;
        let result = AnalysisResult::from_text(text);

        info!(
            kind = %kind,
            size_bytes = doc.size_bytes(),
            text_chars = result.extracted_text.chars().count(),
            suggestions = result.suggestions.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Document analyzed"
        );

        Ok(result)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
