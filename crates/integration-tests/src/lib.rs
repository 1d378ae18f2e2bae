//! Integration tests for the Stride storefront.
//!
//! These tests talk to a running server over HTTP and are ignored by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server (with or without DATABASE_URL)
//! cargo run -p stride-storefront
//!
//! # Run integration tests
//! cargo test -p stride-integration-tests -- --ignored
//! ```
//!
//! Set `STOREFRONT_BASE_URL` to target a server other than `http://localhost:8000`.

use reqwest::Client;

/// Base URL for the storefront API (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Build an absolute URL for a path on the storefront.
#[must_use]
pub fn url(path: &str) -> String {
    format!("{}{path}", storefront_base_url().trim_end_matches('/'))
}

/// Create an HTTP client for the tests.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}
