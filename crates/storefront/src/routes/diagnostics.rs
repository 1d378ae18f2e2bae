//! Store diagnostics handler (`GET /test`).
//!
//! Always answers 200; problems are reported as status strings.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Maximum number of collection names reported.
const MAX_COLLECTIONS: usize = 10;

/// Maximum length of an error message embedded in a status string.
const MAX_ERROR_CHARS: usize = 50;

/// Diagnostic report on the backend and its document store.
#[derive(Debug, Serialize)]
pub struct StoreDiagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Report store reachability, configuration and collection names.
pub async fn store_diagnostics(State(state): State<AppState>) -> Json<StoreDiagnostics> {
    let config = state.config();

    let (database, connection_status, collections) = match state.store() {
        None => (
            "⚠️  Available but not initialized".to_string(),
            "Not Connected",
            Vec::new(),
        ),
        Some(store) => match store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                ("✅ Connected & Working".to_string(), "Connected", names)
            }
            Err(e) => {
                tracing::warn!(error = %e, database = store.name(), "Collection listing failed");
                (
                    format!("⚠️  Connected but Error: {}", truncate_chars(&e.to_string())),
                    "Connected",
                    Vec::new(),
                )
            }
        },
    };

    Json(StoreDiagnostics {
        backend: "✅ Running".to_string(),
        database,
        database_url: set_or_not(config.database_url.is_some()),
        database_name: set_or_not(config.database_name.is_some()),
        connection_status: connection_status.to_string(),
        collections,
    })
}

fn set_or_not(is_set: bool) -> String {
    if is_set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

fn truncate_chars(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
