//! Route definitions for the HTTP API.

mod health;
mod upload;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(health::root))
        .route("/api/health", get(health::health_check))
        // Document analysis
        .route("/api/upload", post(upload::upload_document))
        // Attach state
        .with_state(state)
}

pub use health::*;
pub use upload::*;
