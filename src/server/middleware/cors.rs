use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// CORS middleware for the read-only portal API
pub struct CorsMiddleware;

impl CorsMiddleware {
    /// Create a CORS middleware that allows any origin
    pub fn allow_all() -> CorsLayer {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
            .allow_headers(Any)
    }
}
