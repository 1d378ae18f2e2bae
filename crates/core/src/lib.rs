//! Stride Core - Shared types library.
//!
//! This crate provides common types used across all Stride components:
//! - `storefront` - Product listing HTTP backend
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product shapes and the opaque document identity

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
