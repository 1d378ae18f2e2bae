//! Seed the product collection with the sample catalog.
//!
//! Runs the same guard the server runs before each listing request, but
//! reports failures instead of swallowing them.

use stride_storefront::catalog::{Catalog, SeedOutcome};
use stride_storefront::db::store_from_config;

use super::{CommandError, database_settings};

/// Seed the catalog once.
///
/// # Errors
///
/// Returns `CommandError` if `DATABASE_URL` is missing or invalid, or if the
/// store rejects the count or an insert.
pub async fn run() -> Result<(), CommandError> {
    let (database_url, database_name) = database_settings()?;
    let store = store_from_config(Some(&database_url), database_name.as_deref())
        .ok_or(CommandError::InvalidDatabaseUrl)?;

    match Catalog::new(Some(store)).ensure_seed().await? {
        SeedOutcome::Seeded { inserted } => {
            tracing::info!(inserted, "Sample catalog inserted");
        }
        SeedOutcome::AlreadySeeded { count } => {
            tracing::info!(count, "Product collection already populated, nothing to do");
        }
        SeedOutcome::NoStore => {
            tracing::warn!("No document store configured");
        }
    }

    Ok(())
}
