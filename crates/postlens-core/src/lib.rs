//! postlens-core - Engagement suggestions for uploaded posts.
//!
//! Composes text extraction (see `postlens-extractors`) with a fixed,
//! ordered table of suggestion rules:
//!
//! ```ignore
//! use postlens_core::{Analyzer, InputDocument};
//!
//! let analyzer = Analyzer::with_defaults();
//! let doc = InputDocument::new(pdf_bytes, "application/pdf");
//! let result = analyzer.analyze(&doc).await?;
//! for suggestion in &result.suggestions {
//!     println!("- {suggestion}");
//! }
//! ```

pub mod analyzer;
pub mod error;
pub mod suggestions;
pub mod types;
pub mod upload;

pub use analyzer::Analyzer;
pub use error::{AnalysisError, CoreResult};
pub use suggestions::{rules, suggest, SuggestionRule, ALREADY_OPTIMIZED};
pub use types::{AnalysisResult, InputDocument};
pub use upload::TempUpload;

pub use postlens_extractors::{ExtractError, ExtractionPipeline, Extractor, MediaKind};
