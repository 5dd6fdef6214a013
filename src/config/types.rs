use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::markdown::RenderOptions;

/// Portal configuration: where content lives, how it is served and rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Address to bind to (e.g., "127.0.0.1", "0.0.0.0")
    #[serde(default = "defaults::default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "defaults::default_port")]
    pub port: u16,

    /// Root directory scanned for product manifests and markdown pages
    #[serde(default = "defaults::default_content_dir")]
    pub content_dir: PathBuf,

    /// Directory holding the single-page frontend, served when present
    #[serde(default = "defaults::default_frontend_dir")]
    pub frontend_dir: PathBuf,

    /// Markdown rendering options
    #[serde(default)]
    pub markdown: RenderOptions,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: defaults::default_host(),
            port: defaults::default_port(),
            content_dir: defaults::default_content_dir(),
            frontend_dir: defaults::default_frontend_dir(),
            markdown: RenderOptions::default(),
        }
    }
}

impl Config {
    /// Get the full address string (e.g., "127.0.0.1:3000")
    pub fn address_string(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Get the full URL (e.g., "http://localhost:3000/")
    pub fn url(&self) -> String {
        let address = if self.host == "127.0.0.1" {
            "localhost".to_string()
        } else if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };

        format!("http://{}:{}/", address, self.port)
    }
}
