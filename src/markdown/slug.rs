//! Heading anchor generation.
//!
//! A [`Slugger`] lives for exactly one render. It lower-cases and trims the
//! heading text, collapses every run of non-word characters into a single
//! hyphen and strips hyphens from both ends. Repeated candidates get a
//! `-N` suffix; the counter for a candidate only ever moves forward, so a
//! suffixed slug is never handed out twice.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD_REGEX: Regex = Regex::new(r"[^\w]+").unwrap();
}

/// Identifier used when a heading has no word characters at all
pub const FALLBACK_SLUG: &str = "section";

/// Stateful generator of unique heading identifiers
#[derive(Debug, Default)]
pub struct Slugger {
    /// Every identifier handed out so far, mapped to its collision counter
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next unique identifier for `text`
    pub fn slug(&mut self, text: &str) -> String {
        let base = Self::normalize(text);
        self.next_unique(base)
    }

    /// Normalize heading text into a candidate identifier
    pub fn normalize(text: &str) -> String {
        let lowered = text.to_lowercase();
        let replaced = NON_WORD_REGEX.replace_all(lowered.trim(), "-");
        let candidate = replaced.trim_matches('-');

        if candidate.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            candidate.to_string()
        }
    }

    fn next_unique(&mut self, base: String) -> String {
        let mut counter = match self.seen.get(&base) {
            Some(count) => *count,
            None => {
                self.seen.insert(base.clone(), 0);
                return base;
            }
        };

        let mut slug;
        loop {
            counter += 1;
            slug = format!("{}-{}", base, counter);
            if !self.seen.contains_key(&slug) {
                break;
            }
        }

        self.seen.insert(base, counter);
        self.seen.insert(slug.clone(), 0);
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_basic_heading() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Getting Started"), "getting-started");
    }

    #[test]
    fn test_collision_suffixing() {
        let mut slugger = Slugger::new();
        let slugs: Vec<String> = ["Intro", "Intro", "Intro"]
            .iter()
            .map(|t| slugger.slug(t))
            .collect();
        assert_eq!(slugs, vec!["intro", "intro-1", "intro-2"]);
    }

    #[test]
    fn test_suffix_never_reused() {
        let mut slugger = Slugger::new();
        // A heading literally named like a generated suffix takes its slot first
        assert_eq!(slugger.slug("Intro 1"), "intro-1");
        assert_eq!(slugger.slug("Intro"), "intro");
        assert_eq!(slugger.slug("Intro"), "intro-2");
        assert_eq!(slugger.slug("Intro"), "intro-3");
        assert_eq!(slugger.slug("Intro 1"), "intro-1-1");
    }

    #[test]
    fn test_punctuation_runs_collapse() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("  What's new?  (v2.0) "), "what-s-new-v2-0");
        assert_eq!(slugger.slug("--Leading & trailing--"), "leading-trailing");
    }

    #[test]
    fn test_unicode_word_characters_kept() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Héllo Wörld"), "héllo-wörld");
        assert_eq!(slugger.slug("snake_case name"), "snake_case-name");
    }

    #[test]
    fn test_empty_text_falls_back() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug(""), "section");
        assert_eq!(slugger.slug("!!!"), "section-1");
        assert_eq!(slugger.slug("Section"), "section-2");
    }

    #[test]
    fn test_determinism() {
        let inputs = ["Setup", "Usage", "Setup", "", "Usage", "FAQ"];
        let run = || {
            let mut slugger = Slugger::new();
            inputs.iter().map(|t| slugger.slug(t)).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_uniqueness() {
        let mut slugger = Slugger::new();
        let inputs = ["a", "a", "a-1", "A", "a 1", "a-2", "a", "", "-", "section-1"];
        let mut seen = HashSet::new();
        for input in inputs {
            assert!(seen.insert(slugger.slug(input)), "duplicate slug for {:?}", input);
        }
    }
}
