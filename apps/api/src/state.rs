use std::sync::Arc;

use crate::llm_client::DocumentReviewer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Reviewer backing `POST /api/v1/review`. Default: the Anthropic `LlmClient`.
    pub reviewer: Arc<dyn DocumentReviewer>,
    /// Request body cap applied to the upload routes.
    pub max_upload_bytes: usize,
}
