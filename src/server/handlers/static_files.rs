use std::path::Path;

use axum::{http::StatusCode, response::IntoResponse, Router};
use log::debug;
use tower_http::services::{ServeDir, ServeFile};

use crate::server::types::AppState;

/// Entry document of the single-page frontend
const INDEX_FILE: &str = "index.html";

/// Attach frontend serving to `router` as its fallback.
///
/// Files are served from `directory`; any path that is not a file gets the
/// frontend's `index.html` so client-side routes resolve. Without a frontend
/// directory the fallback is a plain 404.
pub fn with_frontend(router: Router<AppState>, directory: &Path) -> Router<AppState> {
    if directory.is_dir() {
        debug!("Serving frontend from {}", directory.display());
        let serve_dir = ServeDir::new(directory)
            .append_index_html_on_directories(true)
            .fallback(ServeFile::new(directory.join(INDEX_FILE)));
        router.fallback_service(serve_dir)
    } else {
        router.fallback(handle_not_found)
    }
}

/// Handle 404 errors when no frontend is available
pub async fn handle_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Page not found")
}
