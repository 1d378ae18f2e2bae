//! Core types for Stride.
//!
//! This module provides the product shapes served by the catalog and the
//! identity type assigned by the document store.

pub mod id;
pub mod product;

pub use id::DocumentId;
pub use product::{DEFAULT_CATEGORY, NewProduct, Product};
