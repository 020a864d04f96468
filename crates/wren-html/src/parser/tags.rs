//! Fixed tag tables consulted by the tree builder.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Elements that never have content or a closing tag.
pub const SELF_CLOSING_TAGS: [&str; 16] = [
    "br", "hr", "img", "input", "link", "meta", "area", "base", "col", "command", "embed",
    "keygen", "param", "source", "track", "wbr",
];

/// Elements whose content is captured verbatim up to their closing tag.
pub const RAW_TEXT_TAGS: [&str; 3] = ["script", "noscript", "style"];

/// Built once, read by every parse.
static SELF_CLOSING: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SELF_CLOSING_TAGS.into_iter().collect());

/// Whether `tag` is in [`SELF_CLOSING_TAGS`]. Case-sensitive.
#[must_use]
pub fn is_self_closing(tag: &str) -> bool {
    SELF_CLOSING.contains(tag)
}

/// Whether `tag` is in [`RAW_TEXT_TAGS`]. Case-sensitive.
#[must_use]
pub fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_TAGS.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_lookup() {
        assert!(SELF_CLOSING_TAGS.iter().all(|tag| is_self_closing(tag)));
        assert!(!is_self_closing("div"));
        assert!(!is_self_closing("BR"));
    }

    #[test]
    fn test_raw_text_lookup() {
        assert!(is_raw_text("script"));
        assert!(is_raw_text("noscript"));
        assert!(is_raw_text("style"));
        assert!(!is_raw_text("textarea"));
    }
}
