//! Server state management.

use std::sync::Arc;

use postlens_core::Analyzer;

use crate::config::ServerConfig;

/// Shared application state.
///
/// Read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create state with the compiled-in extraction backends.
    pub fn new(config: ServerConfig) -> Self {
        let analyzer = match config.extraction_timeout() {
            Some(timeout) => Analyzer::with_defaults().with_timeout(timeout),
            None => Analyzer::with_defaults(),
        };
        Self::with_analyzer(config, analyzer)
    }

    /// Create state around a custom analyzer.
    pub fn with_analyzer(config: ServerConfig, analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
