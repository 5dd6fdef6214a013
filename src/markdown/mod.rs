pub mod engine;
pub mod renderer;
pub mod sanitize;
pub mod slug;
pub mod toc;
pub mod types;

pub use renderer::{render, MarkdownRenderer, RenderOptions};
pub use types::{RenderResult, Token, TocEntry};
