use log::{info, warn};

use crate::config::Config;
use crate::markdown::RenderOptions;
use crate::utils::error::{BoxResult, PortalError};

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_port(config)?;
    validate_content_directory(config)?;
    validate_frontend_directory(config);
    validate_render_options(&config.markdown)?;

    Ok(())
}

fn validate_port(config: &Config) -> BoxResult<()> {
    if config.port == 0 {
        return Err(PortalError::Config("Port must not be 0".to_string()).into());
    }
    Ok(())
}

/// Validate the content directory
fn validate_content_directory(config: &Config) -> BoxResult<()> {
    let content_dir = &config.content_dir;

    if !content_dir.exists() {
        return Err(PortalError::Config(format!(
            "Content directory does not exist: {}",
            content_dir.display()
        ))
        .into());
    }

    if !content_dir.is_dir() {
        return Err(PortalError::Config(format!(
            "Content path is not a directory: {}",
            content_dir.display()
        ))
        .into());
    }

    info!("Content directory: {}", content_dir.display());
    Ok(())
}

/// The frontend is optional; without it only the API is served
fn validate_frontend_directory(config: &Config) {
    if !config.frontend_dir.is_dir() {
        warn!(
            "Frontend directory {} not found, serving API only",
            config.frontend_dir.display()
        );
    }
}

/// Validate markdown rendering options on their own
pub fn validate_render_options(options: &RenderOptions) -> BoxResult<()> {
    let toc = &options.toc;
    if toc.min_level < 1 || toc.max_level > 6 || toc.min_level > toc.max_level {
        return Err(PortalError::Config(format!(
            "Invalid table of contents levels: {}..={} (expected 1 <= min <= max <= 6)",
            toc.min_level, toc.max_level
        ))
        .into());
    }

    if options.diagram_language.trim().is_empty() {
        return Err(PortalError::Config("Diagram language must not be empty".to_string()).into());
    }

    if options.diagram_class.trim().is_empty() {
        return Err(PortalError::Config("Diagram class must not be empty".to_string()).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::toc::TocOptions;

    fn valid_config(dir: &std::path::Path) -> Config {
        Config {
            port: 3000,
            content_dir: dir.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_config(&valid_config(dir.path())).is_ok());
    }

    #[test]
    fn test_missing_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = valid_config(&dir.path().join("missing"));

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Content directory does not exist"));
    }

    #[test]
    fn test_content_path_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.md");
        std::fs::write(&file, "# x").unwrap();

        let err = validate_config(&valid_config(&file)).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_zero_port_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            port: 0,
            ..valid_config(dir.path())
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_toc_band_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for (min_level, max_level) in [(0, 3), (4, 2), (2, 7)] {
            let mut config = valid_config(dir.path());
            config.markdown.toc = TocOptions { min_level, max_level };
            assert!(validate_config(&config).is_err(), "{}..={} accepted", min_level, max_level);
        }
    }

    #[test]
    fn test_empty_diagram_language_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = valid_config(dir.path());
        config.markdown.diagram_language = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_render_options_checked_without_content_dir() {
        assert!(validate_render_options(&RenderOptions::default()).is_ok());

        let options = RenderOptions {
            diagram_language: String::new(),
            ..RenderOptions::default()
        };
        let err = validate_render_options(&options).unwrap_err();
        assert!(err.to_string().contains("Diagram language must not be empty"));
    }
}
