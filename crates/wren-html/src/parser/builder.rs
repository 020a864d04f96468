use std::ops::Range;

use strum_macros::Display;

use wren_common::warning::warn_once;
use wren_dom::{DomTree, ElementData, NodeId};

use super::helpers::{Encoding, is_line_control, is_markup_whitespace};
use super::tags::{is_raw_text, is_self_closing};
use crate::attributes::AttributeScanner;
use crate::document::Document;
use crate::issue::{IssueKind, ParseIssue};

/// Element state machine.
///
/// `Value` and `TagEnd` carry the node allocated for the element once its
/// start tag is complete; children are appended to that node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ElementState {
    /// Reading the tag name after `<`.
    Tag,
    /// Reading the raw attribute text up to `>`.
    Attr,
    /// Reading element content.
    Value(NodeId),
    /// Positioned at `</`, matching the closing tag.
    TagEnd(NodeId),
}

/// Everything collected for one element before it is appended.
#[derive(Debug, Default)]
struct PendingElement {
    tag: Vec<u8>,
    /// Span of the raw attribute text in the input.
    attrs: Range<usize>,
    text: Vec<u8>,
}

impl PendingElement {
    fn is_self_closing(&self) -> bool {
        std::str::from_utf8(&self.tag).is_ok_and(is_self_closing)
    }

    fn is_raw_text(&self) -> bool {
        std::str::from_utf8(&self.tag).is_ok_and(is_raw_text)
    }
}

/// Single-pass builder turning markup into a [`DomTree`].
///
/// Each element is parsed by one call of [`TreeBuilder::parse_element`],
/// which recurses for nested start tags. An element is appended to its
/// parent when its closing tag is reached, when an ancestor's closing tag
/// closes it implicitly, or at the end of the input.
pub(crate) struct TreeBuilder<'a> {
    pub(super) input: &'a [u8],

    /// How spans of `input` are turned into tag names, attributes and text.
    encoding: Encoding,

    tree: DomTree,

    /// Parse issues (warnings) encountered during parsing.
    issues: Vec<ParseIssue>,

    /// Elements whose content is being read, outermost first. The last entry
    /// is the element currently being parsed; the rest are its ancestors.
    open_elements: Vec<NodeId>,

    /// Whether issues are echoed through the warning system.
    echo_warnings: bool,
}

impl<'a> TreeBuilder<'a> {
    pub(crate) fn new(input: &'a [u8], encoding: Encoding, echo_warnings: bool) -> Self {
        Self {
            input,
            encoding,
            tree: DomTree::new(),
            issues: Vec::new(),
            open_elements: Vec::new(),
            echo_warnings,
        }
    }

    /// Parse the whole input and return the document.
    ///
    /// Line breaks and tabs between top-level constructs are dropped; any
    /// other character outside every element becomes text of the root node.
    pub(crate) fn run(mut self) -> Document {
        let mut index = 0;
        let mut stray_text = Vec::new();

        while let Some(byte) = self.byte_at(index) {
            match byte {
                b'<' => index = self.parse_element(index, NodeId::ROOT),
                byte if is_line_control(byte) => index += 1,
                byte => {
                    stray_text.push(byte);
                    index += 1;
                }
            }
        }

        let text = self.trimmed_text(&stray_text);
        if let Some(root) = self.tree.get_mut(NodeId::ROOT) {
            root.data.text = text;
        }
        Document::new(self.tree, self.issues)
    }

    /// Record a parse warning.
    ///
    /// Logs via wren-common's warning system and stores the issue for later retrieval.
    fn record(&mut self, kind: IssueKind, offset: usize) {
        if self.echo_warnings {
            warn_once("HTML Parser", &kind.to_string());
        }
        self.issues.push(ParseIssue { kind, offset });
    }

    /// Transition the element state machine.
    fn switch_to(&self, state: &mut ElementState, next: ElementState, offset: usize) {
        #[cfg(feature = "parse-trace")]
        eprintln!(
            "[PARSE TRACE] depth={} {state} -> {next} at={offset}",
            self.open_elements.len()
        );
        #[cfg(not(feature = "parse-trace"))]
        let _ = (self, offset);
        *state = next;
    }

    /// Parse one construct starting at the `<` at `start` and append the
    /// resulting element, if any, to `parent`.
    ///
    /// Returns the offset just past the consumed markup. After an implicit
    /// close the returned offset points at the `</` that caused it, so the
    /// ancestor it belongs to reads it again.
    pub(crate) fn parse_element(&mut self, start: usize, parent: NodeId) -> usize {
        match self.byte_at(start + 1) {
            Some(b'!') => {
                return if self.starts_with_at(start, b"<!--") {
                    self.skip_past(start + 2, b"-->")
                } else {
                    self.skip_past(start + 2, b">")
                };
            }
            Some(b'/') => {
                let end = self.skip_past(start, b">");
                let found = self.closing_name(start + 2, end);
                self.record(IssueKind::StrayClosingTag { found }, start);
                return end;
            }
            Some(b'?') => return self.skip_past(start, b"?>"),
            _ => {}
        }

        let mut element = PendingElement::default();
        let mut state = ElementState::Tag;
        let mut index = start + 1;

        while let Some(byte) = self.byte_at(index) {
            match state {
                ElementState::Tag => match byte {
                    byte if is_markup_whitespace(byte) => {
                        if !element.tag.is_empty() {
                            element.attrs = index + 1..index + 1;
                            self.switch_to(&mut state, ElementState::Attr, index);
                        }
                        index += 1;
                    }
                    b'/' => {
                        self.finish(element, None, parent);
                        return self.skip_past(index, b">");
                    }
                    b'>' => {
                        if element.is_self_closing() {
                            self.finish(element, None, parent);
                            return index + 1;
                        }
                        let node = self.open(&element);
                        self.switch_to(&mut state, ElementState::Value(node), index);
                        index += 1;
                    }
                    byte => {
                        element.tag.push(byte);
                        index += 1;
                    }
                },

                ElementState::Attr => {
                    if byte != b'>' {
                        index += 1;
                        continue;
                    }
                    // "<img src=x />": the slash belongs to the tag, not the value.
                    if self.byte_at(index - 1) == Some(b'/') {
                        element.attrs.end = index - 1;
                        self.finish(element, None, parent);
                        return index + 1;
                    }
                    element.attrs.end = index;
                    if element.is_self_closing() {
                        self.finish(element, None, parent);
                        return index + 1;
                    }
                    let node = self.open(&element);
                    self.switch_to(&mut state, ElementState::Value(node), index);
                    index += 1;
                }

                ElementState::Value(node) => {
                    if element.is_raw_text() {
                        return self.finish_raw_text(element, node, parent, index);
                    }
                    match byte {
                        b'<' if self.byte_at(index + 1) == Some(b'/') => {
                            self.switch_to(&mut state, ElementState::TagEnd(node), index);
                        }
                        b'<' => index = self.parse_element(index, node),
                        byte if is_line_control(byte) => index += 1,
                        byte => {
                            element.text.push(byte);
                            index += 1;
                        }
                    }
                }

                ElementState::TagEnd(node) => {
                    let name_start = index + 2;
                    let name_end = name_start + element.tag.len();
                    if self.starts_with_at(name_start, &element.tag)
                        && self.byte_at(name_end) == Some(b'>')
                    {
                        self.finish(element, Some(node), parent);
                        return name_end + 1;
                    }

                    // A closing tag cut off by the end of the input is truncation, not an error.
                    let Some(close) = self.find_from(name_start, b">") else {
                        index = self.input.len();
                        break;
                    };
                    let found = self.closing_name(name_start, close + 1);

                    if self.is_open_ancestor(&found) {
                        let tag = self.tag_name(&element);
                        self.record(
                            IssueKind::NotClosed {
                                tag,
                                closed_by: found,
                            },
                            index,
                        );
                        self.finish(element, Some(node), parent);
                        return index;
                    }

                    let open = self.tag_name(&element);
                    self.record(IssueKind::UnexpectedClosingTag { found, open }, index);
                    element.text.extend_from_slice(&self.input[index..=close]);
                    self.switch_to(&mut state, ElementState::Value(node), index);
                    index = close + 1;
                }
            }
        }

        // End of input. An element whose start tag was complete is kept;
        // a start tag cut off midway produces nothing.
        if let ElementState::Value(node) | ElementState::TagEnd(node) = state {
            self.finish(element, Some(node), parent);
        }
        index
    }

    /// Capture everything up to the literal closing tag as text. Without a
    /// closing tag the rest of the input is captured.
    fn finish_raw_text(
        &mut self,
        mut element: PendingElement,
        node: NodeId,
        parent: NodeId,
        index: usize,
    ) -> usize {
        let close = [b"</".as_slice(), &element.tag, b">"].concat();
        let (text_end, resume) = self
            .find_from(index, &close)
            .map_or((self.input.len(), self.input.len()), |position| {
                (position, position + close.len())
            });
        element.text.extend_from_slice(&self.input[index..text_end]);
        self.finish(element, Some(node), parent);
        resume
    }

    /// Allocate the node for an element whose content is about to be read.
    fn open(&mut self, element: &PendingElement) -> NodeId {
        let tag_name = self.tag_name(element);
        let node = self.tree.alloc(ElementData::new(tag_name));
        self.open_elements.push(node);
        node
    }

    /// Scan attributes, store text and append the element to `parent`.
    ///
    /// `opened` is the node allocated by [`Self::open`]; self-closing elements
    /// never had one and are allocated here.
    fn finish(&mut self, element: PendingElement, opened: Option<NodeId>, parent: NodeId) {
        let input = self.input;
        let encoding = self.encoding;
        let raw_attrs = encoding.decode(input.get(element.attrs.clone()).unwrap_or_default());
        let mut scanner = AttributeScanner::new(&raw_attrs);
        scanner.run();
        let (attrs, attr_issues) = scanner.into_parts();
        for issue in attr_issues {
            let offset = element.attrs.start + encoding.source_offset(&raw_attrs, issue.offset);
            self.record(issue.kind, offset);
        }

        let node = match opened {
            Some(node) => {
                let closed = self.open_elements.pop();
                debug_assert_eq!(closed, Some(node));
                node
            }
            None => {
                let tag_name = self.tag_name(&element);
                self.tree.alloc(ElementData::new(tag_name))
            }
        };
        let text = self.trimmed_text(&element.text);
        if let Some(entry) = self.tree.get_mut(node) {
            entry.data.attrs = attrs;
            entry.data.text = text;
        }
        self.tree.append_child(parent, node);
    }

    /// Whether an ancestor of the current element has tag `name`.
    fn is_open_ancestor(&self, name: &str) -> bool {
        let ancestors = self
            .open_elements
            .split_last()
            .map_or(&[][..], |(_, rest)| rest);
        ancestors
            .iter()
            .rev()
            .any(|&id| self.tree.tag_name(id) == Some(name))
    }

    /// The name inside a closing tag spanning `name_start..end`, without the `>`.
    fn closing_name(&self, name_start: usize, end: usize) -> String {
        let end = if self.byte_at(end.saturating_sub(1)) == Some(b'>') {
            end - 1
        } else {
            end
        };
        self.encoding
            .decode(self.input.get(name_start..end).unwrap_or_default())
            .into_owned()
    }

    fn tag_name(&self, element: &PendingElement) -> String {
        self.encoding.decode(&element.tag).into_owned()
    }

    /// Element text keeps inner spacing but loses leading and trailing
    /// spaces. Only the space character is trimmed.
    fn trimmed_text(&self, bytes: &[u8]) -> String {
        self.encoding.decode(bytes).trim_matches(' ').to_string()
    }
}
