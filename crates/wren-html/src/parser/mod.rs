//! HTML parser and tree construction.

mod builder;
mod helpers;
/// Fixed self-closing and raw-text tag tables.
pub mod tags;

pub use builder::ElementState;

use builder::TreeBuilder;
use helpers::Encoding;

use crate::document::Document;

/// Parser configuration and entry point.
///
/// Parsing never fails: malformed markup is recovered and reported through
/// [`Document::issues`]. By default every distinct issue is also printed once
/// to stderr; [`HtmlParser::quiet`] turns that off.
///
/// Every open element holds one frame of the recursive tree builder, so
/// nesting depth is limited by the calling thread's stack. A 2 MiB thread
/// overflows at about 20,000 nested elements; parse deeper input on a
/// thread with a larger stack.
///
/// ```
/// use wren_html::HtmlParser;
///
/// let doc = HtmlParser::new().quiet().parse("<div><span>text</div>");
/// let span = doc.get_elements_by_tag_name("span")[0];
/// assert_eq!(span.text(), "text");
/// assert_eq!(doc.issues().len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlParser {
    echo_warnings: bool,
}

impl HtmlParser {
    /// Create a parser that echoes warnings to stderr.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            echo_warnings: true,
        }
    }

    /// Disable printing of warnings; issues are still recorded.
    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.echo_warnings = false;
        self
    }

    /// Parse `input` into a document.
    #[must_use]
    pub fn parse(&self, input: &str) -> Document {
        TreeBuilder::new(input.as_bytes(), Encoding::Utf8, self.echo_warnings).run()
    }

    /// Parse raw bytes, reading every byte as one character (ISO-8859-1).
    ///
    /// Issue offsets count bytes of `input`.
    #[must_use]
    pub fn parse_bytes(&self, input: &[u8]) -> Document {
        TreeBuilder::new(input, Encoding::Latin1, self.echo_warnings).run()
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}
