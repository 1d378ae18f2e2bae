//! Stride CLI - Database migrations and catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the document store tables
//! stride-cli migrate
//!
//! # Insert the sample catalog if the product collection is empty
//! stride-cli seed
//!
//! # Print what the listing endpoint would return
//! stride-cli products --limit 5 --category running
//! stride-cli products --featured
//! ```
//!
//! All commands read `DATABASE_URL` and `DATABASE_NAME` like the server does.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "stride-cli")]
#[command(author, version, about = "Stride shoe store CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run document store migrations
    Migrate,
    /// Seed the product collection with the sample catalog if it is empty
    Seed,
    /// Print the product listing as JSON
    Products {
        /// Maximum number of products
        #[arg(short, long, default_value_t = 20)]
        limit: usize,

        /// Only products in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Print the featured shelf instead (ignores limit and category)
        #[arg(long)]
        featured: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Products {
            limit,
            category,
            featured,
        } => commands::products::run(limit, category.as_deref(), featured).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_products_defaults() {
        let cli = Cli::try_parse_from(["stride-cli", "products"]).expect("parse");
        match cli.command {
            Commands::Products {
                limit,
                category,
                featured,
            } => {
                assert_eq!(limit, 20);
                assert!(category.is_none());
                assert!(!featured);
            }
            _ => panic!("expected products command"),
        }
    }
}
