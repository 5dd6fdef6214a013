use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::markdown::MarkdownRenderer;

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// Root holding product manifests and markdown pages
    pub content_dir: PathBuf,
    /// Single-page frontend served for non-API paths
    pub frontend_dir: PathBuf,
    /// Immutable renderer; each render call keeps its own slug state
    pub renderer: Arc<MarkdownRenderer>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        AppState {
            content_dir: config.content_dir.clone(),
            frontend_dir: config.frontend_dir.clone(),
            renderer: Arc::new(MarkdownRenderer::new(config.markdown.clone())),
        }
    }
}
