mod generator;

pub use generator::{extract, TocBuilder};

use serde::{Deserialize, Serialize};

/// Options for table of contents generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocOptions {
    /// Minimum heading level to include (h1 = 1, h2 = 2, etc.)
    pub min_level: u8,
    /// Maximum heading level to include
    pub max_level: u8,
}

impl Default for TocOptions {
    fn default() -> Self {
        // h1 is the page title, h4 and deeper stay off the navigator
        Self {
            min_level: 2,
            max_level: 3,
        }
    }
}

impl TocOptions {
    /// Whether a heading of this level gets a ToC entry
    pub fn includes(&self, level: u8) -> bool {
        level >= self.min_level && level <= self.max_level
    }
}
