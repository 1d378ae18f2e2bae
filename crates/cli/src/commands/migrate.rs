//! Document store migrations.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string
//! - `DATABASE_NAME` - Optional database name override
//!
//! Migration files live in `crates/storefront/migrations/`.

use sqlx::PgPool;

use stride_storefront::db::{MIGRATOR, connect_options};

use super::{CommandError, database_settings};

/// Run the storefront migrations.
///
/// # Errors
///
/// Returns `CommandError` if `DATABASE_URL` is missing, the database cannot be
/// reached, or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let (database_url, database_name) = database_settings()?;
    let options = connect_options(&database_url, database_name.as_deref())?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect_with(options).await?;

    tracing::info!("Running storefront migrations...");
    MIGRATOR.run(&pool).await?;

    tracing::info!("Storefront migrations complete!");
    Ok(())
}
