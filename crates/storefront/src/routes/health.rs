//! Health check handlers.

use axum::{extract::State, http::StatusCode};

use crate::catalog::PRODUCT_COLLECTION;
use crate::db::Filter;
use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the document store answers a count before returning OK.
/// Returns 503 Service Unavailable if the store is unreachable or not configured.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    let Some(store) = state.store() else {
        return StatusCode::SERVICE_UNAVAILABLE;
    };

    match store.count_documents(PRODUCT_COLLECTION, &Filter::new()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
