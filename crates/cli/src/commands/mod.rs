//! CLI command implementations.

pub mod migrate;
pub mod products;
pub mod seed;

use secrecy::SecretString;
use thiserror::Error;

use stride_storefront::catalog::CatalogError;
use stride_storefront::config::{ConfigError, StorefrontConfig};
use stride_storefront::db::StoreError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// `DATABASE_URL` could not be parsed.
    #[error("DATABASE_URL is not a valid PostgreSQL connection string")]
    InvalidDatabaseUrl,

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Document store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Catalog read failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Output could not be encoded.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Load the database URL and optional name override from the environment.
fn database_settings() -> Result<(SecretString, Option<String>), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let database_url = config
        .database_url
        .ok_or(CommandError::MissingEnvVar("DATABASE_URL"))?;
    Ok((database_url, config.database_name))
}
