use serde::{Deserialize, Serialize};

/// A block-level structural unit of a parsed document, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// ATX or setext heading
    Heading {
        /// Heading level, 1 through 6
        depth: u8,
        /// Plain visible text of the heading
        text: String,
        /// Source lines the heading was parsed from
        raw: String,
    },
    /// Indented or fenced code block
    CodeBlock {
        /// First word of the info string, empty when none was given
        language: String,
        text: String,
    },
    /// Any other block (paragraph, list, table, ...), passed through untouched
    Other {
        kind: &'static str,
    },
}

/// One navigable heading of a rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    pub depth: u8,
}

/// Output of a single render call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    pub html: String,
    pub toc: Vec<TocEntry>,
}
