//! Tests for recovery from malformed markup and the issues it records.

use pretty_assertions::assert_eq;
use wren_dom::NodeRef;
use wren_html::{Document, HtmlParser, IssueKind, ParseIssue};

fn parse(html: &str) -> Document {
    HtmlParser::new().quiet().parse(html)
}

fn child_tags<'a>(node: NodeRef<'a>) -> Vec<&'a str> {
    node.children().map(NodeRef::tag_name).collect()
}

fn not_closed(tag: &str, closed_by: &str, offset: usize) -> ParseIssue {
    ParseIssue {
        kind: IssueKind::NotClosed {
            tag: tag.to_string(),
            closed_by: closed_by.to_string(),
        },
        offset,
    }
}

#[test]
fn test_mismatched_close_keeps_inner_element() {
    let doc = parse("<div><span>text</div>");
    let div = doc.get_elements_by_tag_name("div")[0];

    assert_eq!(child_tags(div), vec!["span"]);
    assert_eq!(div.child(0).map(NodeRef::text), Some("text"));
    assert_eq!(doc.issues(), &[not_closed("span", "div", 15)]);
}

#[test]
fn test_mismatched_close_keeps_inner_attributes() {
    let doc = parse(r#"<div><span class="x">t</div>"#);
    assert_eq!(doc.get_elements_by_class_name("x").len(), 1);
}

#[test]
fn test_close_unwinds_several_levels() {
    let doc = parse("<div><p><span>x</div><em></em>");
    let div = doc.get_elements_by_tag_name("div")[0];
    let p = doc.get_elements_by_tag_name("p")[0];

    assert_eq!(child_tags(doc.root()), vec!["div", "em"]);
    assert_eq!(child_tags(div), vec!["p"]);
    assert_eq!(child_tags(p), vec!["span"]);
    assert_eq!(
        doc.issues(),
        &[not_closed("span", "div", 15), not_closed("p", "div", 15)]
    );
}

#[test]
fn test_siblings_after_implicit_close_go_to_ancestor() {
    let doc = parse("<ul><li><b>one</li><li>two</li></ul>");
    let ul = doc.get_elements_by_tag_name("ul")[0];

    assert_eq!(child_tags(ul), vec!["li", "li"]);
    assert_eq!(ul.child(1).map(NodeRef::text), Some("two"));
    assert_eq!(doc.issues().len(), 1);
}

#[test]
fn test_unexpected_closing_tag_kept_as_text() {
    let doc = parse("<div>a</span>b</div>");
    let div = doc.get_elements_by_tag_name("div")[0];

    assert_eq!(div.text(), "a</span>b");
    assert_eq!(
        doc.issues(),
        &[ParseIssue {
            kind: IssueKind::UnexpectedClosingTag {
                found: "span".to_string(),
                open: "div".to_string(),
            },
            offset: 6,
        }]
    );
}

#[test]
fn test_tag_matching_is_case_sensitive() {
    let doc = parse("<DIV>x</div>");
    let div = doc.root().child(0).expect("element missing");

    assert_eq!(div.tag_name(), "DIV");
    assert_eq!(div.text(), "x</div>");
    assert!(doc.get_elements_by_tag_name("div").is_empty());
    assert_eq!(doc.issues().len(), 1);
}

#[test]
fn test_stray_closing_tag_at_top_level() {
    let doc = parse("</div><p></p>");

    assert_eq!(child_tags(doc.root()), vec!["p"]);
    assert_eq!(
        doc.issues(),
        &[ParseIssue {
            kind: IssueKind::StrayClosingTag {
                found: "div".to_string(),
            },
            offset: 0,
        }]
    );
}

#[test]
fn test_closing_tag_for_root_is_not_an_ancestor() {
    let doc = parse("<p>a</>b</p>");
    let p = doc.get_elements_by_tag_name("p")[0];

    assert_eq!(p.text(), "a</>b");
    assert!(matches!(
        doc.issues()[0].kind,
        IssueKind::UnexpectedClosingTag { ref found, .. } if found.is_empty()
    ));
}

#[test]
fn test_stray_quote_offset_is_absolute() {
    let doc = parse(r#"<div a"b="1"></div>"#);
    let div = doc.get_elements_by_tag_name("div")[0];

    assert_eq!(div.attribute("ab"), Some("1"));
    assert_eq!(
        doc.issues(),
        &[ParseIssue {
            kind: IssueKind::StrayQuote { quote: '"' },
            offset: 6,
        }]
    );
}

#[test]
fn test_issues_are_recorded_in_detection_order() {
    let doc = parse("</x><div><i>a</div><p>b</q></p>");
    let kinds: Vec<_> = doc
        .issues()
        .iter()
        .map(|issue| match issue.kind {
            IssueKind::StrayQuote { .. } => "quote",
            IssueKind::NotClosed { .. } => "not-closed",
            IssueKind::UnexpectedClosingTag { .. } => "unexpected",
            IssueKind::StrayClosingTag { .. } => "stray",
        })
        .collect();

    assert_eq!(kinds, vec!["stray", "not-closed", "unexpected"]);
}

#[test]
fn test_issue_messages() {
    let doc = parse("<div><span>text</div>");

    assert_eq!(
        doc.issues()[0].kind.to_string(),
        "element not closed <span> before </div>"
    );
    assert_eq!(
        doc.issues()[0].to_string(),
        "element not closed <span> before </div> (at byte 15)"
    );
    assert_eq!(
        IssueKind::StrayQuote { quote: '\'' }.to_string(),
        "attribute unexpected '"
    );
}

#[test]
fn test_well_formed_input_records_nothing() {
    let doc = parse(r#"<html><body><p class="a">x<br>y</p></body></html>"#);
    assert!(doc.issues().is_empty());
}

#[test]
fn test_byte_input_offsets_count_input_bytes() {
    let mut input = vec![0xE9; 10];
    input.extend_from_slice(b"<div><span>t</div>");
    let doc = HtmlParser::new().quiet().parse_bytes(&input);

    assert_eq!(doc.text(), "é".repeat(10));
    assert_eq!(doc.issues(), &[not_closed("span", "div", 22)]);
}

#[test]
fn test_byte_input_stray_quote_offset_counts_input_bytes() {
    let doc = HtmlParser::new().quiet().parse_bytes(b"<p t\xe9\"x=1></p>");
    let p = doc.get_elements_by_tag_name("p")[0];

    assert_eq!(p.attribute("téx"), Some("1"));
    assert_eq!(
        doc.issues(),
        &[ParseIssue {
            kind: IssueKind::StrayQuote { quote: '"' },
            offset: 5,
        }]
    );
}
