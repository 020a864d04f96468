//! Input helpers for the tree builder.
//!
//! Byte lookahead, literal matching and "skip until" scans over the input
//! buffer. Every helper clamps to the end of the input instead of failing,
//! which is what makes truncated markup a silent condition.

use std::borrow::Cow;

use super::builder::TreeBuilder;

/// Whitespace between a tag name and its attributes.
pub(super) const fn is_markup_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\r' | b'\n' | b'\t')
}

/// Bytes dropped from element content.
pub(super) const fn is_line_control(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n' | b'\t')
}

/// How spans of the input become text.
///
/// Offsets recorded by the builder always count bytes of the original
/// input; only the strings stored in the tree are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Encoding {
    /// Input that came from a `&str`. Spans are cut at ASCII delimiters, so
    /// decoding never substitutes anything.
    Utf8,
    /// Every byte is one character (ISO-8859-1).
    Latin1,
}

impl Encoding {
    /// Decode a span of the input.
    pub(super) fn decode(self, bytes: &[u8]) -> Cow<'_, str> {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes),
            Self::Latin1 if bytes.is_ascii() => String::from_utf8_lossy(bytes),
            Self::Latin1 => Cow::Owned(bytes.iter().copied().map(char::from).collect()),
        }
    }

    /// Map a byte offset into `decoded` back to the span it was decoded from.
    pub(super) fn source_offset(self, decoded: &str, offset: usize) -> usize {
        match self {
            Self::Utf8 => offset,
            Self::Latin1 => decoded.get(..offset).map_or(offset, |head| head.chars().count()),
        }
    }
}

impl TreeBuilder<'_> {
    /// The byte at `index`, if any.
    pub(super) fn byte_at(&self, index: usize) -> Option<u8> {
        self.input.get(index).copied()
    }

    /// Whether the input continues with `literal` at `index`.
    pub(super) fn starts_with_at(&self, index: usize, literal: &[u8]) -> bool {
        self.input
            .get(index..)
            .is_some_and(|rest| rest.starts_with(literal))
    }

    /// Offset of the first occurrence of `literal` at or after `from`.
    pub(super) fn find_from(&self, from: usize, literal: &[u8]) -> Option<usize> {
        if literal.is_empty() {
            return Some(from);
        }
        self.input
            .get(from..)?
            .windows(literal.len())
            .position(|window| window == literal)
            .map(|position| from + position)
    }

    /// Offset just past the first `literal` at or after `from`, or the end
    /// of the input when there is none.
    pub(super) fn skip_past(&self, from: usize, literal: &[u8]) -> usize {
        self.find_from(from, literal)
            .map_or(self.input.len(), |position| position + literal.len())
    }
}
