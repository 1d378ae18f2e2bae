//! Stride Storefront library.
//!
//! Product listing backend for the Stride shoe store. This crate provides the
//! storefront functionality as a library, allowing it to be tested and reused
//! by the CLI.
//!
//! # Modules
//!
//! - [`catalog`] - Seed guard, listing reads, normalization, sample catalog
//! - [`db`] - Document store trait with `PostgreSQL` and in-memory backends
//! - [`routes`] - HTTP handlers and the application router
//! - [`config`], [`error`], [`middleware`], [`state`] - Service plumbing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
