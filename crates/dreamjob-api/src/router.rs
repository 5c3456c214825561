//! Route definitions for the DreamJob HTTP API.
//!
//! Candidate and health routes are mounted under `/api`; raw file content
//! is served from `/files/{id}`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = usize::try_from(state.config.storage.max_upload_size_bytes)
        .unwrap_or(usize::MAX);

    let api_routes = Router::new()
        .merge(candidate_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(file_routes())
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Candidate CRUD with multipart upload
fn candidate_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/candidates",
            get(handlers::candidate::list_candidates).post(handlers::candidate::create_candidate),
        )
        .route(
            "/candidates/{id}",
            get(handlers::candidate::get_candidate)
                .put(handlers::candidate::update_candidate)
                .delete(handlers::candidate::delete_candidate),
        )
}

/// Raw file content
fn file_routes() -> Router<AppState> {
    Router::new().route("/files/{id}", get(handlers::file::download_file))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
