use std::path::PathBuf;

use log::info;

use crate::config::{validate_config, Config};
use crate::server;
use crate::utils::error::BoxResult;

/// Command-line values that take precedence over configuration files
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub content_dir: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub frontend: Option<PathBuf>,
}

impl ServeOverrides {
    /// Apply the overrides on top of a loaded configuration
    pub fn apply(self, config: &mut Config) {
        if let Some(content_dir) = self.content_dir {
            info!("Scoped to content directory {}", content_dir.display());
            config.content_dir = content_dir;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(frontend) = self.frontend {
            config.frontend_dir = frontend;
        }
    }
}

/// Handle the serve command
pub async fn handle_serve_command(
    overrides: ServeOverrides,
    config_files: Vec<PathBuf>,
) -> BoxResult<()> {
    let mut config = super::load_config(config_files)?;
    overrides.apply(&mut config);

    validate_config(&config)?;

    server::serve(&config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = Config {
            port: 3000,
            ..Config::default()
        };
        ServeOverrides {
            content_dir: Some(PathBuf::from("products/cloud")),
            host: None,
            port: Some(9000),
            frontend: Some(PathBuf::from("dist")),
        }
        .apply(&mut config);

        assert_eq!(config.content_dir, PathBuf::from("products/cloud"));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.frontend_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let original = Config {
            port: 3000,
            ..Config::default()
        };
        let mut config = original.clone();
        ServeOverrides::default().apply(&mut config);
        assert_eq!(config, original);
    }
}
