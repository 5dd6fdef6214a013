mod comrak;

pub use self::comrak::{create_comrak_options, info_language, parse, plain_text, tokenize, unclosed_dropped_tag};
