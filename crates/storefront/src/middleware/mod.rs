//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (only when a DSN is configured, added in `main`)
//! 2. CORS (every origin, method and header; credentials allowed)
//! 3. `TraceLayer` (request tracing)
//! 4. Request ID (add unique ID to each request)

pub mod cors;
pub mod request_id;

pub use cors::cors_layer;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
