//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/users`, `/users/{id}` - User CRUD (JSON, error-translated)
//! - `GET /health`           - Health check (reports its own body on failure)
//!
//! # Middleware
//!
//! - **Error translation** - Every user route failure becomes a structured
//!   JSON error body with the request path
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{error_translator, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let user_router =
        api::routes::user_routes().layer(middleware::from_fn(error_translator::layer));

    Router::new()
        .merge(user_router)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}
