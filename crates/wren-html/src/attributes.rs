//! Attribute list scanner.
//!
//! Turns the raw text between a tag name and its closing `>` into an
//! attribute map. The scanner never fails: stray quotes inside attribute
//! names are dropped and reported, and whatever is pending at the end of the
//! input is committed.

use std::mem;

use strum_macros::Display;

use wren_dom::AttributesMap;

use crate::issue::{IssueKind, ParseIssue};

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AttributeState {
    /// Reading an attribute name.
    Key,
    /// Just read `=`; waiting for the first character of the value.
    ValueBegin,
    /// Reading a value, quoted or unquoted.
    ValueEnd,
}

/// Whitespace that separates attributes. Form feed is not included.
pub(crate) const fn is_attribute_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\r' | '\n' | ' ')
}

const fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"')
}

/// Scans one raw attribute list.
///
/// ```
/// use wren_html::AttributeScanner;
///
/// let mut scanner = AttributeScanner::new("class = 'x y'  disabled");
/// scanner.run();
/// let attrs = scanner.into_attributes();
/// assert_eq!(attrs["class"], "x y");
/// assert_eq!(attrs["disabled"], "");
/// ```
#[derive(Debug)]
pub struct AttributeScanner<'a> {
    input: &'a str,
    state: AttributeState,
    key: String,
    value: String,
    /// The quote that opened the current value, `None` for unquoted values.
    quote: Option<char>,
    attributes: AttributesMap,
    issues: Vec<ParseIssue>,
    /// Offset just past the last whitespace run looked across, and the
    /// character found there.
    lookahead: Option<(usize, Option<char>)>,
}

impl<'a> AttributeScanner<'a> {
    /// Create a scanner over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            state: AttributeState::Key,
            key: String::new(),
            value: String::new(),
            quote: None,
            attributes: AttributesMap::new(),
            issues: Vec::new(),
            lookahead: None,
        }
    }

    /// Scan the whole input.
    pub fn run(&mut self) {
        let input = self.input;
        for (offset, c) in input.char_indices() {
            match self.state {
                AttributeState::Key => self.handle_key(offset, c),
                AttributeState::ValueBegin => self.handle_value_begin(offset, c),
                AttributeState::ValueEnd => self.handle_value_end(c),
            }
        }

        // A pending key is kept: with no `=` it gets an empty value, after an
        // `=` it keeps whatever part of the value was read.
        if !self.key.is_empty() {
            self.commit();
        }
    }

    /// Current scanner state.
    #[must_use]
    pub const fn state(&self) -> AttributeState {
        self.state
    }

    /// Issues recorded so far. Offsets are relative to the scanned input.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Consume the scanner and return the attribute map.
    #[must_use]
    pub fn into_attributes(self) -> AttributesMap {
        self.attributes
    }

    /// Consume the scanner and return the attribute map and recorded issues.
    #[must_use]
    pub fn into_parts(self) -> (AttributesMap, Vec<ParseIssue>) {
        (self.attributes, self.issues)
    }

    fn handle_key(&mut self, offset: usize, c: char) {
        match c {
            c if is_attribute_whitespace(c) => {
                if !self.key.is_empty() && self.next_significant(offset + 1) != Some('=') {
                    self.commit();
                }
            }
            c if is_quote(c) => self.issues.push(ParseIssue {
                kind: IssueKind::StrayQuote { quote: c },
                offset,
            }),
            '=' => self.state = AttributeState::ValueBegin,
            c => self.key.push(c),
        }
    }

    fn handle_value_begin(&mut self, offset: usize, c: char) {
        match c {
            c if is_attribute_whitespace(c) => {
                if self.next_significant(offset + 1).is_some_and(is_quote) {
                    return;
                }
                if !self.key.is_empty() {
                    self.commit();
                }
                self.state = AttributeState::Key;
            }
            c if is_quote(c) => {
                self.quote = Some(c);
                self.state = AttributeState::ValueEnd;
            }
            c => {
                self.value.push(c);
                self.quote = None;
                self.state = AttributeState::ValueEnd;
            }
        }
    }

    fn handle_value_end(&mut self, c: char) {
        let terminates = match self.quote {
            Some(quote) => c == quote,
            None => is_attribute_whitespace(c),
        };
        if terminates {
            self.commit();
            self.state = AttributeState::Key;
        } else {
            self.value.push(c);
        }
    }

    /// First non-whitespace character at or after byte `from`.
    ///
    /// Offsets only grow during a scan, so every later call inside the same
    /// whitespace run reuses the first answer and each run is read once.
    fn next_significant(&mut self, from: usize) -> Option<char> {
        if let Some((_, next)) = self.lookahead.filter(|&(run_end, _)| from <= run_end) {
            return next;
        }
        let rest = self.input.get(from..)?;
        let significant = rest.trim_start_matches(is_attribute_whitespace);
        let next = significant.chars().next();
        self.lookahead = Some((from + rest.len() - significant.len(), next));
        next
    }

    fn commit(&mut self) {
        let key = mem::take(&mut self.key);
        let value = mem::take(&mut self.value);
        self.quote = None;
        if !key.is_empty() {
            let _ = self
                .attributes
                .insert(key, value.trim_matches(' ').to_string());
        }
    }
}

/// Scan `input` and return its attributes, discarding any issues.
#[must_use]
pub fn parse_attributes(input: &str) -> AttributesMap {
    let mut scanner = AttributeScanner::new(input);
    scanner.run();
    scanner.into_attributes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> (AttributesMap, Vec<ParseIssue>) {
        let mut scanner = AttributeScanner::new(input);
        scanner.run();
        scanner.into_parts()
    }

    #[test]
    fn test_spaced_equals_and_bare_key() {
        let (attrs, issues) = scan("class = 'x y'  disabled");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs["class"], "x y");
        assert_eq!(attrs["disabled"], "");
        assert!(issues.is_empty());
    }

    #[test]
    fn test_stray_quote_in_key_is_dropped() {
        let (attrs, issues) = scan("da\"ta=1");
        assert_eq!(attrs["data"], "1");
        assert_eq!(
            issues,
            vec![ParseIssue {
                kind: IssueKind::StrayQuote { quote: '"' },
                offset: 2,
            }]
        );
    }

    #[test]
    fn test_state_returns_to_key_after_value() {
        let mut scanner = AttributeScanner::new("a=\"1\"");
        scanner.run();
        assert_eq!(scanner.state(), AttributeState::Key);
    }

    #[test]
    fn test_unterminated_quote_keeps_partial_value() {
        let mut scanner = AttributeScanner::new("title=\"half");
        scanner.run();
        assert_eq!(scanner.state(), AttributeState::ValueEnd);
        assert_eq!(scanner.into_attributes()["title"], "half");
    }

    #[test]
    fn test_empty_key_is_never_committed() {
        let attrs = parse_attributes("=\"orphan\" ok");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs["ok"], "");
    }
}
