//! Lenient single-pass HTML parser for the wren document tree.
//!
//! # Scope
//!
//! This crate implements:
//! - **Attribute scanning** - a small state machine turning the raw text of a
//!   start tag into a name/value map
//! - **Tree building** - one pass over the input that opens elements, nests
//!   them, captures `script`/`noscript`/`style` content verbatim, skips
//!   comments, declarations and processing instructions, and recovers from
//!   mismatched closing tags
//! - **Document** - the parsed tree plus the issues recovered while building it
//!
//! # Not Implemented
//!
//! - Character references (entities are kept as written)
//! - Encoding detection
//! - Case-insensitive tag matching
//! - Serialization back to markup
//!
//! ```
//! let doc = wren_html::parse(r#"<ul><li class="a b">one</li><li class="a">two</li></ul>"#);
//! assert_eq!(doc.get_elements_by_class_name("a").len(), 2);
//! let first = doc.get_elements_by_tag_name("li")[0];
//! assert_eq!(first.next().map(|li| li.text()), Some("two"));
//! ```

/// Attribute list scanner.
pub mod attributes;
/// The parsed document.
pub mod document;
/// Recovered parse problems.
pub mod issue;
/// HTML parser and tree construction.
pub mod parser;

pub use attributes::{AttributeScanner, AttributeState, parse_attributes};
pub use document::Document;
pub use issue::{IssueKind, ParseIssue};
pub use parser::tags::{RAW_TEXT_TAGS, SELF_CLOSING_TAGS, is_raw_text, is_self_closing};
pub use parser::{ElementState, HtmlParser};

/// Parse `input` with the default parser configuration.
#[must_use]
pub fn parse(input: &str) -> Document {
    HtmlParser::new().parse(input)
}

/// Parse raw bytes with the default parser configuration, reading every
/// byte as one character.
#[must_use]
pub fn parse_bytes(input: &[u8]) -> Document {
    HtmlParser::new().parse_bytes(input)
}
