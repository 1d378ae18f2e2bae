//! Root route handler.

use axum::Json;
use serde::Serialize;

/// Banner returned by `GET /`.
pub const BANNER: &str = "Shoe Store Backend Running";

/// Body of the root response.
#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: &'static str,
}

/// Report that the backend is up.
pub async fn home() -> Json<Banner> {
    Json(Banner { message: BANNER })
}
