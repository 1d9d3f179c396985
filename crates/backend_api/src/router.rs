use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, repository::RecordStore};

/// Create the main application router with all API endpoints
pub fn create_router(store: Arc<dyn RecordStore>) -> Router {
    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dashboard payload
        .route("/api/dashboard", get(handlers::get_dashboard))
        // Chart widget endpoints
        .route("/api/charts/expenses", get(handlers::get_expense_chart))
        .route(
            "/api/charts/investments",
            get(handlers::get_investment_chart),
        )
        // Add shared state
        .with_state(store)
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
