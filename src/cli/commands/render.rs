use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::validate_render_options;
use crate::markdown::toc::extract;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::{BoxResult, PortalError};

/// What the render command prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutput {
    /// The complete `{html, toc}` JSON document
    Full,
    /// The table of contents as JSON
    Toc,
    /// Sanitized HTML only
    Html,
}

/// Handle the render command: print the render result of one file
pub fn handle_render_command(
    file: &Path,
    output: RenderOutput,
    config_files: Vec<PathBuf>,
) -> BoxResult<()> {
    let config = super::load_config(config_files)?;
    validate_render_options(&config.markdown)?;

    let content = fs::read_to_string(file).map_err(|e| {
        PortalError::Generic(format!("Failed to read {}: {}", file.display(), e))
    })?;

    let renderer = MarkdownRenderer::new(config.markdown);
    println!("{}", render_output(&renderer, &content, output)?);

    debug!("Rendered {}", file.display());
    Ok(())
}

fn render_output(renderer: &MarkdownRenderer, content: &str, output: RenderOutput) -> BoxResult<String> {
    let text = match output {
        RenderOutput::Full => serde_json::to_string_pretty(&renderer.render(content))?,
        RenderOutput::Toc => {
            let tokens = renderer.tokenize(content);
            serde_json::to_string_pretty(&extract(&tokens, &renderer.options().toc))?
        }
        RenderOutput::Html => renderer.render_html(content),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{RenderResult, TocEntry};

    const PAGE: &str = "# Guide\n\n## Install\n\nRun it.\n\n## Install\n";

    #[test]
    fn test_full_output_is_render_result() {
        let renderer = MarkdownRenderer::default();
        let text = render_output(&renderer, PAGE, RenderOutput::Full).unwrap();

        let result: RenderResult = serde_json::from_str(&text).unwrap();
        assert_eq!(result, renderer.render(PAGE));
    }

    #[test]
    fn test_toc_output_matches_rendered_toc() {
        let renderer = MarkdownRenderer::default();
        let text = render_output(&renderer, PAGE, RenderOutput::Toc).unwrap();

        let toc: Vec<TocEntry> = serde_json::from_str(&text).unwrap();
        assert_eq!(toc, renderer.render(PAGE).toc);
        assert_eq!(toc[1].id, "install-1");
    }

    #[test]
    fn test_invalid_render_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("portal.yml");
        let page = dir.path().join("page.md");
        fs::write(&config, "markdown:\n  diagram_language: \"\"\n").unwrap();
        fs::write(&page, "```\nplain\n```\n").unwrap();

        let err = handle_render_command(&page, RenderOutput::Html, vec![config]).unwrap_err();
        assert!(err.to_string().contains("Diagram language must not be empty"));
    }

    #[test]
    fn test_html_output() {
        let renderer = MarkdownRenderer::default();
        let html = render_output(&renderer, PAGE, RenderOutput::Html).unwrap();
        assert!(html.starts_with("<h1 id=\"guide\">Guide</h1>"));
    }
}
