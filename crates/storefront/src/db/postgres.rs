//! `PostgreSQL` backend for the document store.
//!
//! Every collection shares one table; see the `documents` migration. Filters
//! use JSONB containment, which for scalar fields is plain equality.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use stride_core::DocumentId;

use super::{Document, DocumentStore, Filter, ID_FIELD, StoreError, stamp_timestamps};

/// Document store backed by a `PostgreSQL` JSONB table.
pub struct PgDocumentStore {
    pool: PgPool,
    name: String,
}

impl PgDocumentStore {
    /// Create a new store over an existing pool.
    #[must_use]
    pub fn new(pool: PgPool, name: impl Into<String>) -> Self {
        Self {
            pool,
            name: name.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<DocumentId, StoreError> {
        stamp_timestamps(&mut document);
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(Json(Value::Object(document)))
            .execute(&self.pool)
            .await?;

        Ok(DocumentId::new(id.to_string()))
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError> {
        let limit = limit
            .map(i64::try_from)
            .transpose()
            .map_err(|e| StoreError::Malformed(format!("limit out of range: {e}")))?;

        // LIMIT NULL is no limit
        let rows: Vec<(Uuid, Json<Value>)> = sqlx::query_as(
            r"
            SELECT id, body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY seq
            LIMIT $3
            ",
        )
        .bind(collection)
        .bind(Json(Value::Object(filter.clone())))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, Json(body))| match body {
                Value::Object(mut document) => {
                    document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
                    Ok(document)
                }
                other => Err(StoreError::Malformed(format!(
                    "document {id} is not an object: {other}"
                ))),
            })
            .collect()
    }

    async fn count_documents(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM documents WHERE collection = $1 AND body @> $2",
        )
        .bind(collection)
        .bind(Json(Value::Object(filter.clone())))
        .fetch_one(&self.pool)
        .await?;

        u64::try_from(count).map_err(|e| StoreError::Malformed(format!("negative count: {e}")))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        let names: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT collection FROM documents ORDER BY collection")
                .fetch_all(&self.pool)
                .await?;

        Ok(names.into_iter().map(|(name,)| name).collect())
    }
}
