use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use ammonia::Builder;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9-]*)").unwrap();
    static ref COMMENT_REGEX: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
}

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Elements removed together with everything inside them.
///
/// All of them are raw-text or escapable raw-text elements for the HTML
/// parser, so nothing inside them is ever visible markup.
pub const DROPPED_CONTENT_TAGS: [&str; 10] = [
    "script", "style", "textarea", "title", "xmp", "iframe", "noembed", "noframes", "noscript",
    "plaintext",
];

/// Output of one sanitize call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sanitized {
    pub html: String,
    /// Heading ids left in `html`, in document order, each exactly once
    pub anchors: Vec<String>,
}

/// Allow-list HTML cleaner applied to everything leaving the renderer
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    /// Prefix carried by the heading ids the renderer issued; when set,
    /// any other heading id is dropped and the prefix is removed
    anchor_marker: Option<String>,
}

impl Sanitizer {
    pub fn new(anchor_marker: Option<&str>) -> Self {
        Sanitizer {
            anchor_marker: anchor_marker.map(str::to_string),
        }
    }

    /// Clean `html`; standard Markdown output survives along with heading
    /// anchors, code language classes, diagram containers and task-list
    /// checkboxes.
    pub fn sanitize(&self, html: &str) -> Sanitized {
        let anchors = Arc::new(Mutex::new(Vec::new()));
        let html = self.builder(Arc::clone(&anchors)).clean(html).to_string();

        let anchors = match anchors.lock() {
            Ok(mut anchors) => std::mem::take(&mut *anchors),
            Err(_) => Vec::new(),
        };

        Sanitized { html, anchors }
    }

    fn builder(&self, anchors: Arc<Mutex<Vec<String>>>) -> Builder<'static> {
        let mut builder = Builder::default();
        builder
            .add_tags(&["div", "input"])
            .add_tag_attributes("div", &["class"])
            .add_tag_attributes("span", &["class"])
            .add_tag_attributes("code", &["class"])
            .add_tag_attributes("input", &["type", "checked", "disabled"])
            .clean_content_tags(DROPPED_CONTENT_TAGS.iter().copied().collect());

        for tag in HEADING_TAGS {
            builder.add_tag_attributes(tag, &["id"]);
        }

        let marker = self.anchor_marker.clone();
        builder.attribute_filter(move |element, attribute, value| {
            if attribute != "id" || !HEADING_TAGS.iter().any(|tag| *tag == element) {
                return Some(Cow::Borrowed(value));
            }

            let id = match marker {
                Some(ref marker) => value.strip_prefix(marker.as_str())?,
                None => value,
            };

            let mut anchors = anchors.lock().ok()?;
            if id.is_empty() || anchors.iter().any(|seen| seen == id) {
                return None;
            }
            anchors.push(id.to_string());
            Some(Cow::Borrowed(id))
        });

        builder
    }
}

/// Follow the raw HTML in `fragment` and report which content-dropping
/// element is still open at its end, given the one open before it
pub fn open_dropped_tag(mut open: Option<&'static str>, fragment: &str) -> Option<&'static str> {
    let fragment = COMMENT_REGEX.replace_all(fragment, "");

    for caps in TAG_REGEX.captures_iter(&fragment) {
        let closing = !caps[1].is_empty();
        let name = caps[2].to_ascii_lowercase();

        open = match open {
            Some(tag) if closing && name == tag => None,
            Some(tag) => Some(tag),
            None if closing => None,
            None => DROPPED_CONTENT_TAGS.iter().copied().find(|tag| *tag == name),
        };
    }

    open
}
