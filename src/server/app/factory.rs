use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::handlers::{api_not_found, navigation, page, with_frontend};
use crate::server::middleware::CorsMiddleware;
use crate::server::types::AppState;

/// Routes under `/api`
fn api_router() -> Router<AppState> {
    Router::new()
        .route("/navigation", get(navigation))
        .route("/page/{*path}", get(page))
        .fallback(api_not_found)
}

/// Create the Axum Router for the portal: JSON API plus frontend fallback
pub fn create_app(state: AppState) -> Router {
    let router = Router::new().nest("/api", api_router());

    with_frontend(router, &state.frontend_dir.clone())
        .layer(TraceLayer::new_for_http())
        .layer(CorsMiddleware::allow_all())
        .with_state(state)
}
