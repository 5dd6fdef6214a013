use crate::markdown::slug::Slugger;
use crate::markdown::toc::TocOptions;
use crate::markdown::types::{Token, TocEntry};

/// Assigns heading anchors and collects the entries that belong in the ToC.
///
/// Every heading of every level must go through [`TocBuilder::heading`] in
/// document order, whether or not it ends up in the ToC, so anchors stay
/// aligned with the rendered page.
#[derive(Debug)]
pub struct TocBuilder<'o> {
    options: &'o TocOptions,
    slugger: Slugger,
    entries: Vec<TocEntry>,
}

impl<'o> TocBuilder<'o> {
    pub fn new(options: &'o TocOptions) -> Self {
        TocBuilder {
            options,
            slugger: Slugger::new(),
            entries: Vec::new(),
        }
    }

    /// Register the next heading and return its anchor id
    pub fn heading(&mut self, level: u8, text: &str) -> String {
        let id = self.slugger.slug(text);

        if self.options.includes(level) {
            self.entries.push(TocEntry {
                id: id.clone(),
                text: text.to_string(),
                depth: level,
            });
        }

        id
    }

    pub fn finish(self) -> Vec<TocEntry> {
        self.entries
    }
}

/// Build the table of contents from an already tokenized document
pub fn extract(tokens: &[Token], options: &TocOptions) -> Vec<TocEntry> {
    let mut builder = TocBuilder::new(options);

    for token in tokens {
        if let Token::Heading { depth, text, .. } = token {
            builder.heading(*depth, text);
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(depth: u8, text: &str) -> Token {
        Token::Heading {
            depth,
            text: text.to_string(),
            raw: format!("{} {}", "#".repeat(depth as usize), text),
        }
    }

    #[test]
    fn test_depth_filtering() {
        let tokens = vec![
            heading(1, "Title"),
            heading(2, "Setup"),
            Token::Other { kind: "paragraph" },
            heading(3, "Requirements"),
            heading(4, "Details"),
            heading(2, "Usage"),
        ];

        let toc = extract(&tokens, &TocOptions::default());
        let summary: Vec<(&str, u8)> = toc.iter().map(|e| (e.id.as_str(), e.depth)).collect();
        assert_eq!(summary, vec![("setup", 2), ("requirements", 3), ("usage", 2)]);
    }

    #[test]
    fn test_excluded_levels_still_consume_slugs() {
        let tokens = vec![heading(1, "Intro"), heading(2, "Intro"), heading(4, "Intro"), heading(3, "Intro")];

        let toc = extract(&tokens, &TocOptions::default());
        let ids: Vec<&str> = toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["intro-1", "intro-3"]);
    }

    #[test]
    fn test_custom_band() {
        let options = TocOptions {
            min_level: 1,
            max_level: 1,
        };
        let tokens = vec![heading(1, "Only Me"), heading(2, "Not Me")];

        let toc = extract(&tokens, &options);
        assert_eq!(
            toc,
            vec![TocEntry {
                id: "only-me".to_string(),
                text: "Only Me".to_string(),
                depth: 1
            }]
        );
    }

    #[test]
    fn test_non_heading_tokens_ignored() {
        let tokens = vec![
            Token::CodeBlock {
                language: "text".to_string(),
                text: "## not a heading".to_string(),
            },
            Token::Other { kind: "list" },
        ];
        assert!(extract(&tokens, &TocOptions::default()).is_empty());
    }
}
