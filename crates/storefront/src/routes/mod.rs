//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Banner
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (document store)
//! GET  /test                   - Store diagnostics
//!
//! # Products
//! GET  /api/products           - Product listing (?limit=&category=)
//! GET  /api/products/featured  - Featured shelf (4 products)
//! ```

pub mod diagnostics;
pub mod health;
pub mod home;
pub mod products;

use axum::{Router, middleware::from_fn, routing::get};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_layer, request_id_middleware};
use crate::state::AppState;

/// Create the product API routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/featured", get(products::featured))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/test", get(diagnostics::store_diagnostics))
        .nest("/api/products", product_routes())
}

/// Build the complete application: routes, state and middleware.
pub fn app(state: AppState) -> Router {
    routes()
        .with_state(state)
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .layer(cors_layer())
}
