use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::defaults;
use crate::config::types::Config;
use crate::markdown::RenderOptions;
use crate::utils::error::{BoxResult, PortalError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["portal.yml", "portal.yaml", "portal.toml"];

/// Load portal configuration from config files.
///
/// With no explicit files, the default names are looked up in `source_dir`;
/// missing files there just mean defaults. Later files override earlier ones.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<Config> {
    let mut config = Config::default();

    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut Config, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(PortalError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        ))
        .into());
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        PortalError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    // Assume YAML if no extension
    let file_config: Config = match ext.as_str() {
        "yml" | "yaml" | "" => parse_yaml_config(&content, config_path)?,
        "toml" => parse_toml_config(&content, config_path)?,
        "json" => parse_json_config(&content, config_path)?,
        other => {
            return Err(PortalError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            ))
            .into());
        }
    };

    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    merge_configs(config, &file_config, base_dir);

    Ok(())
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<Config> {
    // An empty YAML document is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content).map_err(|e| {
        PortalError::Config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
        .into()
    })
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<Config> {
    toml::from_str(content).map_err(|e| {
        PortalError::Config(format!(
            "Failed to parse TOML configuration ({}): {}",
            path.display(),
            e
        ))
        .into()
    })
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<Config> {
    serde_json::from_str(content).map_err(|e| {
        PortalError::Config(format!(
            "Failed to parse JSON configuration ({}): {}",
            path.display(),
            e
        ))
        .into()
    })
}

/// Merge two configurations.
///
/// Only values that differ from the defaults override the target. Relative
/// directories are taken relative to the file that named them.
fn merge_configs(target: &mut Config, source: &Config, base_dir: &Path) {
    if source.host != defaults::default_host() {
        target.host = source.host.clone();
    }

    if source.port != defaults::default_port() {
        target.port = source.port;
    }

    if source.content_dir != defaults::default_content_dir() {
        target.content_dir = resolve_relative(base_dir, &source.content_dir);
    }

    if source.frontend_dir != defaults::default_frontend_dir() {
        target.frontend_dir = resolve_relative(base_dir, &source.frontend_dir);
    }

    if source.markdown != RenderOptions::default() {
        target.markdown = source.markdown.clone();
    }
}

fn resolve_relative(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || base_dir.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.content_dir, PathBuf::from("products"));
        assert_eq!(config.markdown, RenderOptions::default());
    }

    #[test]
    fn test_yaml_config_discovered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("portal.yml"),
            "host: 0.0.0.0\nport: 8088\ncontent_dir: docs\nmarkdown:\n  diagram_language: plantuml\n  toc:\n    max_level: 4\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8088);
        assert_eq!(config.content_dir, dir.path().join("docs"));
        assert_eq!(config.markdown.diagram_language, "plantuml");
        assert_eq!(config.markdown.diagram_class, "mermaid");
        assert_eq!(config.markdown.toc.min_level, 2);
        assert_eq!(config.markdown.toc.max_level, 4);
    }

    #[test]
    fn test_explicit_toml_and_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("a.toml");
        let json_path = dir.path().join("b.json");
        fs::write(&toml_path, "frontend_dir = \"/srv/ui\"\n[markdown]\nhard_breaks = false\n").unwrap();
        fs::write(&json_path, r#"{"host": "10.0.0.5"}"#).unwrap();

        let config = load_config(dir.path(), Some(vec![toml_path, json_path])).unwrap();
        assert_eq!(config.frontend_dir, PathBuf::from("/srv/ui"));
        assert!(!config.markdown.hard_breaks);
        assert_eq!(config.host, "10.0.0.5");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path(), Some(vec![dir.path().join("nope.yml")])).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("portal.yaml"), "port: [not a port\n").unwrap();

        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML configuration"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.ini");
        fs::write(&path, "port=1").unwrap();

        let err = load_config(dir.path(), Some(vec![path])).unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration file format"));
    }
}
