use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Intake form and rendering
        .route("/", get(handlers::intake_form))
        .route("/minutes", post(handlers::render_minutes_page))
        .route("/api/minutes", post(handlers::render_minutes_fragment))
        // Health check
        .route("/health", get(handlers::health_check))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
