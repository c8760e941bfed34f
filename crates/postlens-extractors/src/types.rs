//! Core types for text extraction.

use std::fmt;

/// The only media type routed to the PDF backend.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Classification of a declared media type.
///
/// Every declared type maps to exactly one variant, so dispatch over it is
/// exhaustive and `Unsupported` is an explicit outcome rather than a fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// `application/pdf`, matched exactly.
    Pdf,
    /// Any `image/*` type.
    Image,
    /// Everything else.
    Unsupported,
}

impl MediaKind {
    /// Classify a declared media type. Matching is case-sensitive.
    pub fn classify(media_type: &str) -> Self {
        if media_type == PDF_MEDIA_TYPE {
            MediaKind::Pdf
        } else if media_type.starts_with("image/") {
            MediaKind::Image
        } else {
            MediaKind::Unsupported
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Pdf => "pdf",
            MediaKind::Image => "image",
            MediaKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Extracted plain text.
    pub text: String,

    /// Kind of the source document.
    pub kind: MediaKind,
}

impl ExtractedContent {
    /// Create new extracted content.
    pub fn new(text: String, kind: MediaKind) -> Self {
        Self { text, kind }
    }

    /// Strip leading and trailing whitespace from the text.
    pub fn trimmed(mut self) -> Self {
        let trimmed = self.text.trim();
        if trimmed.len() != self.text.len() {
            self.text = trimmed.to_string();
        }
        self
    }

    /// Check if extraction produced any non-whitespace text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
