//! Product listing handlers.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::instrument;

use stride_core::Product;

use crate::catalog::DEFAULT_LIMIT;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for `GET /api/products`.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    /// Maximum number of products (default 20).
    pub limit: Option<i64>,
    /// Only products in this category; empty means all.
    pub category: Option<String>,
}

impl ListProductsQuery {
    /// Resolve the requested limit.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for a negative limit.
    pub fn limit(&self) -> Result<usize> {
        match self.limit {
            None => Ok(DEFAULT_LIMIT),
            Some(limit) => usize::try_from(limit).map_err(|_| {
                AppError::BadRequest(format!("limit must not be negative (got {limit})"))
            }),
        }
    }
}

/// List products, optionally filtered by category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let limit = query.limit()?;

    let listing = state
        .catalog()
        .list(limit, query.category.as_deref())
        .await?;

    tracing::debug!(
        count = listing.products.len(),
        source = ?listing.source,
        "Listed products"
    );
    Ok(Json(listing.products))
}

/// List the featured shelf.
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let listing = state.catalog().featured().await?;

    tracing::debug!(
        count = listing.products.len(),
        source = ?listing.source,
        "Listed featured products"
    );
    Ok(Json(listing.products))
}
