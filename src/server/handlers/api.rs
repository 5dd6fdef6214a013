use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, error};
use serde_json::json;

use crate::catalog::get_catalog;
use crate::server::types::AppState;
use crate::utils::path::resolve_document;

/// JSON error body with the given status
pub fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// `GET /api/navigation`: the product catalog
pub async fn navigation(State(state): State<AppState>) -> Response {
    let root = state.content_dir.clone();

    match tokio::task::spawn_blocking(move || get_catalog(root)).await {
        Ok(catalog) => Json(catalog).into_response(),
        Err(e) => {
            error!("Catalog scan failed: {}", e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load catalog")
        }
    }
}

/// `GET /api/page/<path>`: one rendered markdown page with its ToC
pub async fn page(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let Some(file) = resolve_document(&state.content_dir, &path) else {
        debug!("No document for '{}'", path);
        return json_error(StatusCode::NOT_FOUND, "Page not found");
    };

    let content = match tokio::fs::read_to_string(&file).await {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read {}: {}", file.display(), e);
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page");
        }
    };

    let renderer = state.renderer.clone();
    match tokio::task::spawn_blocking(move || renderer.render(&content)).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            error!("Rendering {} failed: {}", file.display(), e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page")
        }
    }
}

/// Any other `/api` path
pub async fn api_not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "Not found")
}
