//! Product catalog: seed guard and listing reads.
//!
//! Both listing operations run the seed guard first, then query the `product`
//! collection. When no store is configured, or the store fails, they serve the
//! built-in sample catalog instead. Fallback mode ignores the category filter.
//!
//! The seed guard is a count-then-insert and is not atomic: concurrent first
//! requests against an empty store can each insert the samples.

pub mod normalize;
pub mod samples;

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::instrument;

use stride_core::Product;

use crate::db::{DocumentStore, Filter, StoreError, to_document};

pub use normalize::normalize_document;
pub use samples::{SAMPLE_COUNT, sample_products};

/// Collection holding product documents.
pub const PRODUCT_COLLECTION: &str = "product";

/// Limit used by the product listing when none is given.
pub const DEFAULT_LIMIT: usize = 20;

/// Number of products on the featured shelf.
pub const FEATURED_LIMIT: usize = 4;

/// Errors that fail a catalog read.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A stored document could not be coerced into a product.
    #[error("invalid product field `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl CatalogError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Where a listing's products came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    /// Read from the document store.
    Store,
    /// Served from the built-in sample catalog.
    Fallback,
}

/// Result of a listing read.
#[derive(Debug, Clone)]
pub struct Listing {
    pub products: Vec<Product>,
    pub source: ListingSource,
}

/// What the seed guard did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No store is configured.
    NoStore,
    /// The collection already held documents.
    AlreadySeeded { count: u64 },
    /// The collection was empty and the samples were inserted.
    Seeded { inserted: usize },
}

/// Read access to the product catalog.
///
/// Cheaply cloneable; the store handle is shared.
#[derive(Clone)]
pub struct Catalog {
    store: Option<Arc<dyn DocumentStore>>,
}

impl Catalog {
    /// Create a catalog over an optional document store.
    #[must_use]
    pub fn new(store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { store }
    }

    /// Get the document store, if one is configured.
    #[must_use]
    pub fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        self.store.as_ref()
    }

    /// Insert the sample catalog if the product collection is empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the count or any insert fails. Samples inserted
    /// before a failing insert stay in the store.
    pub async fn ensure_seed(&self) -> Result<SeedOutcome, StoreError> {
        let Some(store) = &self.store else {
            return Ok(SeedOutcome::NoStore);
        };

        let count = store
            .count_documents(PRODUCT_COLLECTION, &Filter::new())
            .await?;
        if count > 0 {
            return Ok(SeedOutcome::AlreadySeeded { count });
        }

        let products = sample_products();
        for product in &products {
            store
                .create_document(PRODUCT_COLLECTION, to_document(product)?)
                .await?;
        }

        tracing::info!(inserted = products.len(), "Seeded sample catalog");
        Ok(SeedOutcome::Seeded {
            inserted: products.len(),
        })
    }

    /// Run the seed guard, logging and discarding any failure.
    async fn seed_quietly(&self) {
        if let Err(e) = self.ensure_seed().await {
            tracing::warn!(error = %e, "Catalog seeding failed, will retry on next request");
        }
    }

    /// List up to `limit` products, optionally restricted to one category.
    ///
    /// An empty category is treated as no filter.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if a stored document cannot be normalized.
    #[instrument(skip(self))]
    pub async fn list(&self, limit: usize, category: Option<&str>) -> Result<Listing, CatalogError> {
        self.seed_quietly().await;

        let mut filter = Filter::new();
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            filter.insert("category".to_string(), Value::String(category.to_string()));
        }

        self.read(&filter, limit).await
    }

    /// List the featured shelf: the first [`FEATURED_LIMIT`] products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if a stored document cannot be normalized.
    #[instrument(skip(self))]
    pub async fn featured(&self) -> Result<Listing, CatalogError> {
        self.seed_quietly().await;
        self.read(&Filter::new(), FEATURED_LIMIT).await
    }

    async fn read(&self, filter: &Filter, limit: usize) -> Result<Listing, CatalogError> {
        let documents = match &self.store {
            Some(store) => match store
                .get_documents(PRODUCT_COLLECTION, filter, Some(limit))
                .await
            {
                Ok(documents) => documents,
                Err(e) => {
                    tracing::warn!(error = %e, "Product query failed, serving sample catalog");
                    return Ok(Self::fallback(limit));
                }
            },
            None => {
                tracing::debug!("No document store configured, serving sample catalog");
                return Ok(Self::fallback(limit));
            }
        };

        let products = documents
            .iter()
            .map(normalize_document)
            .collect::<Result<_, _>>()?;

        Ok(Listing {
            products,
            source: ListingSource::Store,
        })
    }

    /// The first `limit` sample products. Category filters do not apply.
    fn fallback(limit: usize) -> Listing {
        Listing {
            products: sample_products()
                .into_iter()
                .take(limit)
                .map(|product| Product::from_new(product, None))
                .collect(),
            source: ListingSource::Fallback,
        }
    }
}
