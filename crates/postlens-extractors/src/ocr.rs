//! Image text extraction via Tesseract OCR.

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ExtractedContent, MediaKind};
use crate::Extractor;
use async_trait::async_trait;
use rusty_tesseract::{Args, Image};
use tracing::debug;

/// Language passed to Tesseract.
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

/// Configuration for the OCR backend.
///
/// Fixed for the lifetime of the extractor; requests cannot change it.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Tesseract language code (default: "eng").
    pub language: String,
    /// Convert to grayscale before recognition (default: true).
    pub grayscale: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_OCR_LANGUAGE.to_string(),
            grayscale: true,
        }
    }
}

/// Raster image extractor backed by Tesseract.
///
/// OCR is CPU-bound and can take seconds per image, so recognition runs in
/// spawn_blocking and is never re-entered for the same request.
#[derive(Debug, Clone, Default)]
pub struct OcrExtractor {
    config: OcrConfig,
}

impl OcrExtractor {
    /// Create OCR extractor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and recognize synchronously (called within spawn_blocking).
    fn recognize_sync(content: &[u8], config: &OcrConfig) -> ExtractResult<String> {
        let mut img = image::load_from_memory(content)
            .map_err(|e| ExtractError::Ocr(format!("Failed to decode image: {}", e)))?;

        if config.grayscale {
            img = image::DynamicImage::ImageLuma8(img.to_luma8());
        }

        let tesseract_image = Image::from_dynamic_image(&img)
            .map_err(|e| ExtractError::Ocr(format!("Failed to prepare image: {}", e)))?;

        let args = Args {
            lang: config.language.clone(),
            ..Args::default()
        };

        rusty_tesseract::image_to_string(&tesseract_image, &args)
            .map_err(|e| ExtractError::Ocr(format!("Tesseract failed: {}", e)))
    }
}

#[async_trait]
impl Extractor for OcrExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent> {
        let owned = content.to_vec();
        let config = self.config.clone();

        debug!(size = content.len(), language = %config.language, "Running OCR");

        let text =
            tokio::task::spawn_blocking(move || Self::recognize_sync(&owned, &config)).await??;

        Ok(ExtractedContent::new(text, MediaKind::Image))
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Image
    }

    fn name(&self) -> &str {
        "tesseract"
    }
}
