//! CORS policy for the public API.
//!
//! Browsers reject `Access-Control-Allow-Origin: *` on credentialed requests,
//! so the request's origin, method and headers are mirrored back instead.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Allow every origin, method and header, with credentials.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
