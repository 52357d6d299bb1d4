//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use chat_client::GenerationOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::BaseTextGenerator;
use crate::server::routes::{health_handler, upload_handler};

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn BaseTextGenerator>,
    pub refine_options: GenerationOptions,
    pub max_upload_bytes: usize,
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/file/upload", post(upload_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
