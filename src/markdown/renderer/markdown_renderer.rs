use ::comrak::nodes::{AstNode, NodeValue};
use ::comrak::{Arena, Options};
use serde::{Deserialize, Serialize};

use log::debug;
use uuid::Uuid;

use crate::markdown::engine::{
    create_comrak_options, info_language, parse, plain_text, tokenize, unclosed_dropped_tag,
};
use crate::markdown::sanitize::Sanitizer;
use crate::markdown::toc::{TocBuilder, TocOptions};
use crate::markdown::types::{RenderResult, Token};

/// Per-renderer configuration; never changed by a render call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Heading levels that appear in the table of contents
    pub toc: TocOptions,
    /// Code block language rendered as a diagram container
    pub diagram_language: String,
    /// CSS class of the diagram container
    pub diagram_class: String,
    /// Render soft line breaks as `<br />`
    pub hard_breaks: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            toc: TocOptions::default(),
            diagram_language: "mermaid".to_string(),
            diagram_class: "mermaid".to_string(),
            hard_breaks: true,
        }
    }
}

/// Markdown renderer producing sanitized HTML and its table of contents
pub struct MarkdownRenderer {
    options: RenderOptions,
}

/// What the emission pass does with a node
enum Rewrite {
    Heading(u8),
    Diagram(String),
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        MarkdownRenderer { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Parse into block tokens with this renderer's grammar profile
    pub fn tokenize(&self, content: &str) -> Vec<Token> {
        tokenize(content, &self.options)
    }

    /// Render a full document.
    ///
    /// Heading anchors and ToC entries come out of one walk over the AST
    /// using a single slug generator, so every ToC id names a heading in the
    /// returned HTML. Issued ids carry a per-render marker until sanitizing,
    /// which drops every heading id raw HTML brought in.
    pub fn render(&self, content: &str) -> RenderResult {
        let arena = Arena::new();
        let options = create_comrak_options(&self.options);
        let root = parse(&arena, content, &options);
        close_dropped_tags(&arena, root);

        let marker = format!("{}-", Uuid::new_v4().simple());
        let mut toc = TocBuilder::new(&self.options.toc);

        // Collect first: rewriting detaches heading children mid-walk
        let nodes: Vec<&AstNode> = root.descendants().collect();
        for node in nodes {
            match self.rewrite_for(node) {
                Some(Rewrite::Heading(level)) => {
                    let text = plain_text(node);
                    let id = toc.heading(level, &text);
                    let html = heading_html(node, level, &format!("{}{}", marker, id), &options);
                    replace_with_raw(node, html);
                }
                Some(Rewrite::Diagram(body)) => {
                    let html = format!(
                        "<div class=\"{}\">{}</div>\n",
                        html_escape::encode_double_quoted_attribute(&self.options.diagram_class),
                        html_escape::encode_text(&body)
                    );
                    replace_with_raw(node, html);
                }
                None => {}
            }
        }

        let html = format_node(root, &options);
        let sanitized = Sanitizer::new(Some(marker.as_str())).sanitize(&html);

        let mut toc = toc.finish();
        toc.retain(|entry| {
            let kept = sanitized.anchors.contains(&entry.id);
            if !kept {
                debug!("Heading '{}' did not survive sanitizing, left out of the ToC", entry.id);
            }
            kept
        });

        RenderResult {
            html: sanitized.html,
            toc,
        }
    }

    /// Render to HTML only, discarding the table of contents
    pub fn render_html(&self, content: &str) -> String {
        self.render(content).html
    }

    fn rewrite_for<'a>(&self, node: &'a AstNode<'a>) -> Option<Rewrite> {
        match node.data.borrow().value {
            NodeValue::Heading(ref heading) => Some(Rewrite::Heading(heading.level)),
            NodeValue::CodeBlock(ref block)
                if info_language(&block.info) == self.options.diagram_language =>
            {
                let body = block.literal.strip_suffix('\n').unwrap_or(&block.literal);
                Some(Rewrite::Diagram(body.to_string()))
            }
            _ => None,
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Render markdown with the default options - convenience function
pub fn render(content: &str) -> RenderResult {
    MarkdownRenderer::default().render(content)
}

fn format_node<'a>(node: &'a AstNode<'a>, options: &Options) -> String {
    let mut output = Vec::new();
    if let Err(e) = ::comrak::format_html(node, options, &mut output) {
        log::warn!("Markdown formatting failed: {}", e);
    }
    String::from_utf8_lossy(&output).into_owned()
}

/// Render a heading with its anchor id in the opening tag
fn heading_html<'a>(node: &'a AstNode<'a>, level: u8, id: &str, options: &Options) -> String {
    let rendered = format_node(node, options);
    let open = format!("<h{}>", level);

    match rendered.strip_prefix(&open) {
        Some(rest) => format!("<h{} id=\"{}\">{}", level, id, rest),
        None => format!(
            "<h{level} id=\"{id}\">{}</h{level}>\n",
            html_escape::encode_text(&plain_text(node))
        ),
    }
}

/// Close raw `<script>`-like elements left open at the end of a block so
/// the HTML parser cannot swallow the blocks that follow
fn close_dropped_tags<'a>(arena: &'a Arena<AstNode<'a>>, root: &'a AstNode<'a>) {
    let blocks: Vec<&AstNode> = root
        .descendants()
        .filter(|node| {
            let data = node.data.borrow();
            matches!(data.value, NodeValue::HtmlBlock(_)) || data.value.contains_inlines()
        })
        .collect();

    for node in blocks {
        let Some(tag) = unclosed_dropped_tag(node) else {
            continue;
        };
        let closing = format!("</{}>", tag);

        if let NodeValue::HtmlBlock(ref mut block) = node.data.borrow_mut().value {
            block.literal.push_str(&closing);
            continue;
        }
        node.append(arena.alloc(NodeValue::HtmlInline(closing).into()));
    }
}

/// Swap a node for pre-rendered HTML, dropping its subtree
fn replace_with_raw<'a>(node: &'a AstNode<'a>, html: String) {
    let children: Vec<&AstNode> = node.children().collect();
    for child in children {
        child.detach();
    }
    node.data.borrow_mut().value = NodeValue::Raw(html);
}
