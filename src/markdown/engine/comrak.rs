use ::comrak::nodes::{AstNode, NodeValue};
use ::comrak::{Arena, Options};

use crate::markdown::renderer::RenderOptions;
use crate::markdown::sanitize::open_dropped_tag;
use crate::markdown::types::Token;

/// Create ComrakOptions with the GitHub Flavored Markdown profile
pub fn create_comrak_options<'a>(render_options: &RenderOptions) -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    // Script-capable tags are removed by the sanitizer instead of escaped
    options.extension.tagfilter = false;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    // Anchors are assigned by the renderer, not by comrak
    options.extension.header_ids = None;

    // Render options
    options.render.hardbreaks = render_options.hard_breaks;
    options.render.github_pre_lang = false;
    // Raw HTML is passed through here and cleaned by the sanitizer
    options.render.unsafe_ = true;

    options
}

/// Parse markdown into a comrak AST allocated in `arena`
pub fn parse<'a>(
    arena: &'a Arena<AstNode<'a>>,
    content: &str,
    options: &Options,
) -> &'a AstNode<'a> {
    ::comrak::parse_document(arena, content, options)
}

/// Parse markdown into the ordered sequence of block tokens
pub fn tokenize(content: &str, render_options: &RenderOptions) -> Vec<Token> {
    let arena = Arena::new();
    let options = create_comrak_options(render_options);
    let root = parse(&arena, content, &options);
    let lines: Vec<&str> = content.lines().collect();

    root.descendants()
        .skip(1)
        .filter_map(|node| block_token(node, &lines))
        .collect()
}

fn block_token<'a>(node: &'a AstNode<'a>, lines: &[&str]) -> Option<Token> {
    let ast = node.data.borrow();
    match ast.value {
        NodeValue::Heading(ref heading) => {
            let start = ast.sourcepos.start.line.saturating_sub(1);
            let end = ast.sourcepos.end.line.min(lines.len());
            let raw = lines.get(start..end).map(|l| l.join("\n")).unwrap_or_default();
            Some(Token::Heading {
                depth: heading.level,
                text: plain_text(node),
                raw,
            })
        }
        NodeValue::CodeBlock(ref block) => Some(Token::CodeBlock {
            language: info_language(&block.info).to_string(),
            text: block.literal.clone(),
        }),
        ref value if value.block() => Some(Token::Other {
            kind: block_kind(value),
        }),
        _ => None,
    }
}

/// Name of a block node kind, as reported in `Token::Other`
fn block_kind(value: &NodeValue) -> &'static str {
    match value {
        NodeValue::Document => "document",
        NodeValue::BlockQuote | NodeValue::MultilineBlockQuote(_) => "block_quote",
        NodeValue::List(..) => "list",
        NodeValue::Item(..) => "item",
        NodeValue::TaskItem(..) => "tasklist",
        NodeValue::DescriptionList => "description_list",
        NodeValue::DescriptionItem(_) => "description_item",
        NodeValue::DescriptionTerm => "description_term",
        NodeValue::DescriptionDetails => "description_details",
        NodeValue::FootnoteDefinition(_) => "footnote_definition",
        NodeValue::HtmlBlock(..) => "html_block",
        NodeValue::Paragraph => "paragraph",
        NodeValue::ThematicBreak => "thematic_break",
        NodeValue::Table(..) => "table",
        NodeValue::TableRow(..) => "table_row",
        NodeValue::TableCell => "table_cell",
        NodeValue::Alert(_) => "alert",
        _ => "block",
    }
}

/// First word of a code block info string
pub fn info_language(info: &str) -> &str {
    info.split_whitespace().next().unwrap_or("")
}

/// Collect the visible text of an inline subtree (heading content, links, ...).
///
/// Text inside raw `<script>`-like elements is skipped, matching what the
/// sanitizer leaves in the rendered page.
pub fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    let mut open = None;
    collect_text(node, &mut text, &mut open);
    text
}

fn collect_text<'a>(node: &'a AstNode<'a>, text: &mut String, open: &mut Option<&'static str>) {
    for child in node.children() {
        match child.data.borrow().value {
            NodeValue::HtmlInline(ref raw) => *open = open_dropped_tag(*open, raw),
            NodeValue::Text(ref t) if open.is_none() => text.push_str(t),
            NodeValue::Code(ref code) if open.is_none() => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak if open.is_none() => text.push(' '),
            NodeValue::Text(_) | NodeValue::Code(_) | NodeValue::SoftBreak | NodeValue::LineBreak => {}
            // Image alt text is an attribute, not visible text
            NodeValue::Image(..) => {}
            _ => collect_text(child, text, open),
        }
    }
}

/// Content-dropping element left open by the raw HTML inside `node`
pub fn unclosed_dropped_tag<'a>(node: &'a AstNode<'a>) -> Option<&'static str> {
    let data = node.data.borrow();
    if let NodeValue::HtmlBlock(ref block) = data.value {
        return open_dropped_tag(None, &block.literal);
    }

    node.descendants().skip(1).fold(None, |open, child| match child.data.borrow().value {
        NodeValue::HtmlInline(ref raw) => open_dropped_tag(open, raw),
        _ => open,
    })
}
