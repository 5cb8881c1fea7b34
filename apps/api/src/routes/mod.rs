pub mod health;
pub mod index;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::review::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        // Review API
        .route("/api/v1/review", post(handlers::handle_review))
        .route("/api/v1/review/inspect", post(handlers::handle_inspect))
        .route("/api/v1/review/download", post(handlers::handle_download))
        .layer(upload_limit)
        .with_state(state)
}
