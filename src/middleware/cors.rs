use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS, mirroring the upstream function's wide-open OPTIONS
/// preflight handling.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}
