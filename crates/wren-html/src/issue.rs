//! Recovered parse problems.
//!
//! Nothing the parser encounters is fatal. Every malformed construct is
//! recovered in place and recorded as a [`ParseIssue`] on the resulting
//! document, and (unless the parser is quiet) echoed once to stderr.

use std::fmt;

use thiserror::Error;

/// What went wrong.
///
/// The `Display` text of each variant is the warning message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueKind {
    /// A quote character appeared inside an attribute name and was dropped.
    #[error("attribute unexpected {quote}")]
    StrayQuote {
        /// The dropped quote character.
        quote: char,
    },

    /// An element was closed implicitly by the closing tag of an ancestor.
    #[error("element not closed <{tag}> before </{closed_by}>")]
    NotClosed {
        /// Tag of the implicitly closed element.
        tag: String,
        /// Tag name of the closing tag that ended it.
        closed_by: String,
    },

    /// A closing tag matched neither the current element nor any open
    /// ancestor; it was kept as text of the current element.
    #[error("unexpected closed element </{found}> for <{open}>")]
    UnexpectedClosingTag {
        /// Tag name inside the stray closing tag.
        found: String,
        /// Tag of the element that was open at that point.
        open: String,
    },

    /// A closing tag appeared outside of every element and was skipped.
    #[error("unexpected closed element </{found}> outside any element")]
    StrayClosingTag {
        /// Tag name inside the stray closing tag.
        found: String,
    },
}

/// A recovered problem and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What happened.
    pub kind: IssueKind,
    /// Byte offset into the input.
    pub offset: usize,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.kind, self.offset)
    }
}
