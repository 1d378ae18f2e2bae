//! Document store used by the catalog.
//!
//! Products are kept as schemaless JSON documents grouped into named
//! collections. The [`DocumentStore`] trait is the only surface the catalog
//! sees; two backends implement it:
//!
//! - [`PgDocumentStore`] - `PostgreSQL` with a single JSONB `documents` table
//! - [`MemoryDocumentStore`] - process-local, for tests
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p stride-cli -- migrate
//! ```

pub mod memory;
pub mod postgres;

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use thiserror::Error;

use stride_core::DocumentId;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// A stored document: a JSON object.
pub type Document = Map<String, Value>;

/// Top-level field equality filter. An empty filter matches everything.
pub type Filter = Map<String, Value>;

/// Field holding the store-assigned identity on documents read back.
pub const ID_FIELD: &str = "_id";

/// Migrations for the `PostgreSQL` document store.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot be reached right now.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A document could not be encoded or decoded.
    #[error("malformed document: {0}")]
    Malformed(String),
}

/// A collection-oriented document database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the underlying database, for diagnostics.
    fn name(&self) -> &str;

    /// Insert a document and return its freshly assigned identity.
    ///
    /// `created_at` and `updated_at` are stamped on the stored copy.
    async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<DocumentId, StoreError>;

    /// Fetch documents matching `filter` in insertion order.
    ///
    /// `limit` of `None` returns every match. Each returned document carries
    /// its identity under [`ID_FIELD`].
    async fn get_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError>;

    /// Count documents matching `filter`.
    async fn count_documents(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError>;

    /// Names of every non-empty collection, sorted.
    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}

/// Serialize a value into a document.
///
/// # Errors
///
/// Returns `StoreError::Malformed` if the value does not serialize to a JSON object.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(other) => Err(StoreError::Malformed(format!(
            "expected a JSON object, got {other}"
        ))),
        Err(e) => Err(StoreError::Malformed(e.to_string())),
    }
}

/// Stamp creation and update times on a document about to be inserted.
fn stamp_timestamps(document: &mut Document) {
    let now = Value::String(chrono::Utc::now().to_rfc3339());
    document.insert("created_at".to_string(), now.clone());
    document.insert("updated_at".to_string(), now);
}

/// Parse connection options, applying the optional database name override.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection string cannot be parsed.
pub fn connect_options(
    database_url: &SecretString,
    database_name: Option<&str>,
) -> Result<PgConnectOptions, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url.expose_secret())?;
    Ok(match database_name {
        Some(name) => options.database(name),
        None => options,
    })
}

/// Create a lazily connecting `PostgreSQL` pool.
///
/// No connection is attempted until the first query, so an unreachable
/// database never blocks startup. Must be called from within a Tokio runtime.
#[must_use]
pub fn create_pool(options: PgConnectOptions) -> PgPool {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(options)
}

/// Build the document store described by the configuration, if any.
///
/// Returns `None` when no database URL is configured, or when it cannot be
/// parsed (logged as an error); the catalog then serves sample data.
#[must_use]
pub fn store_from_config(
    database_url: Option<&SecretString>,
    database_name: Option<&str>,
) -> Option<Arc<dyn DocumentStore>> {
    let database_url = database_url?;

    match connect_options(database_url, database_name) {
        Ok(options) => {
            let name = options.get_database().unwrap_or("postgres").to_string();
            let store = PgDocumentStore::new(create_pool(options), name);
            tracing::info!(database = store.name(), "Document store configured");
            Some(Arc::new(store))
        }
        Err(e) => {
            tracing::error!(error = %e, "Invalid DATABASE_URL, running without a document store");
            None
        }
    }
}

/// Whether `document` matches every field of `filter`.
fn matches_filter(document: &Document, filter: &Filter) -> bool {
    filter
        .iter()
        .all(|(field, expected)| document.get(field) == Some(expected))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_to_document_rejects_non_objects() {
        let err = to_document(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[test]
    fn test_stamp_timestamps() {
        let mut document = Document::new();
        stamp_timestamps(&mut document);
        assert!(document.contains_key("created_at"));
        assert_eq!(document.get("created_at"), document.get("updated_at"));
    }

    #[test]
    fn test_matches_filter() {
        let document = to_document(&json!({"title": "Trail", "category": "trail"})).unwrap();

        assert!(matches_filter(&document, &Filter::new()));
        assert!(matches_filter(
            &document,
            &to_document(&json!({"category": "trail"})).unwrap()
        ));
        assert!(!matches_filter(
            &document,
            &to_document(&json!({"category": "running"})).unwrap()
        ));
        assert!(!matches_filter(
            &document,
            &to_document(&json!({"brand": "Storm"})).unwrap()
        ));
    }

    #[test]
    fn test_store_from_config_without_url() {
        assert!(store_from_config(None, None).is_none());
    }

    #[test]
    fn test_connect_options_rejects_garbage_url() {
        let url = SecretString::from("not a url");
        assert!(connect_options(&url, None).is_err());
    }

    #[test]
    fn test_connect_options_database_override() {
        let url = SecretString::from("postgres://stride@localhost:5432/stride_dev");

        let options = connect_options(&url, None).unwrap();
        assert_eq!(options.get_database(), Some("stride_dev"));

        let options = connect_options(&url, Some("stride_test")).unwrap();
        assert_eq!(options.get_database(), Some("stride_test"));
    }

    #[tokio::test]
    async fn test_store_from_config_is_lazy() {
        let url = SecretString::from("postgres://stride@127.0.0.1:1/stride");
        let store = store_from_config(Some(&url), Some("catalog")).unwrap();
        assert_eq!(store.name(), "catalog");
    }
}
