//! Request and result types for analysis.

use serde::{Deserialize, Serialize};

/// An uploaded document awaiting extraction.
///
/// Owned by a single request and dropped once analysis finishes.
#[derive(Debug, Clone)]
pub struct InputDocument {
    bytes: Vec<u8>,
    declared_media_type: String,
}

impl InputDocument {
    pub fn new(bytes: Vec<u8>, declared_media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            declared_media_type: declared_media_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Media type as declared by the uploader, never sniffed.
    pub fn declared_media_type(&self) -> &str {
        &self.declared_media_type
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

/// Extracted text together with its suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Trimmed text pulled from the document; may be empty.
    pub extracted_text: String,
    /// Never empty; ordered by rule table position.
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    /// Run the suggestion rules over `text` after trimming it.
    pub fn from_text(text: impl AsRef<str>) -> Self {
        let extracted_text = text.as_ref().trim().to_string();
        let suggestions = crate::suggestions::suggest(&extracted_text);
        Self {
            extracted_text,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_document_size() {
        let doc = InputDocument::new(vec![1, 2, 3], "image/png");
        assert_eq!(doc.size_bytes(), 3);
        assert_eq!(doc.declared_media_type(), "image/png");
    }

    #[test]
    fn test_from_text_trims_before_rules() {
        let result = AnalysisResult::from_text("\n\n   Check this out   \n");
        assert_eq!(result.extracted_text, "Check this out");
        assert_eq!(result.suggestions.len(), 5);
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = AnalysisResult::from_text("Check this out");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["extractedText"], "Check this out");
        assert!(json["suggestions"].is_array());
        assert!(json.get("extracted_text").is_none());
    }
}
