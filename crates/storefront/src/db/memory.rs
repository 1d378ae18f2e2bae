//! In-memory document store.
//!
//! This module provides [`MemoryDocumentStore`], a process-local implementation
//! of the [`DocumentStore`] trait used by tests.
//!
//! ## Limitations
//!
//! - **No persistence**: All documents are lost when the process exits
//! - **Single-process only**: Nothing is shared across process boundaries

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use stride_core::DocumentId;

use super::{Document, DocumentStore, Filter, ID_FIELD, StoreError, matches_filter, stamp_timestamps};

/// In-memory document store.
///
/// Can be switched unavailable with [`MemoryDocumentStore::set_available`],
/// after which every operation fails with [`StoreError::Unavailable`].
#[derive(Debug)]
pub struct MemoryDocumentStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
    available: AtomicBool,
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

/// Converts a lock poison error to a store error.
fn poison_err<T>(_: PoisonError<T>) -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

impl MemoryDocumentStore {
    /// Creates an empty, available store.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(BTreeMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Mark the store reachable or unreachable.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable(format!(
                "memory store `{}` is offline",
                self.name
            )))
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<DocumentId, StoreError> {
        self.check_available()?;
        stamp_timestamps(&mut document);

        let id = Uuid::new_v4().to_string();
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        self.collections
            .write()
            .map_err(poison_err)?
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(DocumentId::new(id))
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError> {
        self.check_available()?;
        let collections = self.collections.read().map_err(poison_err)?;

        let matching = collections
            .get(collection)
            .into_iter()
            .flatten()
            .filter(|document| matches_filter(document, filter))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(matching)
    }

    async fn count_documents(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        self.check_available()?;
        let collections = self.collections.read().map_err(poison_err)?;

        let count = collections
            .get(collection)
            .into_iter()
            .flatten()
            .filter(|document| matches_filter(document, filter))
            .count();

        Ok(count as u64)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.check_available()?;
        let collections = self.collections.read().map_err(poison_err)?;

        Ok(collections
            .iter()
            .filter(|(_, documents)| !documents.is_empty())
            .map(|(name, _)| name.clone())
            .collect())
    }
}
