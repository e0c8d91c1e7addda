//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Default request body limit when none is configured.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    create_router_with_limit(state, DEFAULT_BODY_LIMIT)
}

/// Same as [`create_router`] with an explicit request body limit in bytes.
pub fn create_router_with_limit(state: AppState, body_limit: usize) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Stations
        .route(
            "/stations",
            get(handlers::list_stations).post(handlers::create_station),
        )
        .route("/stations/{station_id}", delete(handlers::delete_station))
        // Lines
        .route(
            "/lines",
            get(handlers::list_lines).post(handlers::create_line),
        )
        .route(
            "/lines/{line_id}",
            get(handlers::get_line)
                .put(handlers::update_line)
                .delete(handlers::delete_line),
        )
        // Sections
        .route(
            "/lines/{line_id}/sections",
            get(handlers::list_sections)
                .post(handlers::add_section)
                .delete(handlers::remove_section),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(api)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::FullRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRepository::new()) as Arc<dyn FullRepository>;
        let state = AppState::new(repo);
        let _router = create_router(state);
    }
}
