//! Print the catalog as the listing endpoints would serve it.
//!
//! Works without a database: the built-in sample catalog is printed instead,
//! which makes this a quick check of the fallback path.

use stride_storefront::catalog::{Catalog, ListingSource};
use stride_storefront::config::StorefrontConfig;
use stride_storefront::db::store_from_config;

use super::CommandError;

/// Print a listing as pretty JSON on stdout.
///
/// # Errors
///
/// Returns `CommandError` if configuration is invalid or a stored product
/// cannot be normalized.
pub async fn run(limit: usize, category: Option<&str>, featured: bool) -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let store = store_from_config(
        config.database_url.as_ref(),
        config.database_name.as_deref(),
    );
    let catalog = Catalog::new(store);

    let listing = if featured {
        catalog.featured().await?
    } else {
        catalog.list(limit, category).await?
    };

    if listing.source == ListingSource::Fallback {
        tracing::warn!("Store unavailable, showing the sample catalog");
    }

    #[allow(clippy::print_stdout)]
    {
        println!("{}", serde_json::to_string_pretty(&listing.products)?);
    }

    Ok(())
}
