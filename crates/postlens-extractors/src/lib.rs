//! postlens-extractors - Text extraction for uploaded documents.
//!
//! Turns the raw bytes of an uploaded PDF or raster image into plain text.
//! Dispatch is driven by the declared media type only; the bytes are never
//! sniffed to pick a backend.
//!
//! # Features
//!
//! - `pdf` (default) - PDF text-layer extraction via pdf-extract
//! - `ocr` (default) - Image OCR via tesseract (requires tesseract installed)
//!
//! # Example
//!
//! ```ignore
//! use postlens_extractors::ExtractionPipeline;
//!
//! let pipeline = ExtractionPipeline::with_defaults();
//! let result = pipeline.extract(&pdf_bytes, "application/pdf").await?;
//! println!("{}", result.text);
//! ```

mod error;
mod factory;
mod pipeline;
mod types;

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "ocr")]
mod ocr;

pub use error::{ExtractError, ExtractResult};
pub use factory::{ExtractorFactory, UnavailableExtractor};
pub use pipeline::ExtractionPipeline;
pub use types::{ExtractedContent, MediaKind, PDF_MEDIA_TYPE};

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

#[cfg(feature = "ocr")]
pub use ocr::{OcrConfig, OcrExtractor, DEFAULT_OCR_LANGUAGE};

use async_trait::async_trait;

/// Core Extractor trait - every text extraction backend implements this.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract text content from bytes.
    ///
    /// Implementations make a single attempt and either return the full
    /// (possibly empty) text or fail; partial results are never returned.
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent>;

    /// The media kind this backend handles.
    fn kind(&self) -> MediaKind;

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
