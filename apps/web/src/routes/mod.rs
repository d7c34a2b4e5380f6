pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(pages::handle_index))
        .route("/upload", post(pages::handle_select))
        .route("/review", post(pages::handle_submit))
        .route("/reset", post(pages::handle_reset))
        .route("/preview/:id", get(pages::handle_preview))
        // JSON
        .route("/api/v1/review", get(pages::handle_get_review))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
