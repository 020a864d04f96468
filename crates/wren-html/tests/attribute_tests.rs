//! Tests for the attribute list scanner.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use wren_html::{AttributeScanner, AttributeState, IssueKind, ParseIssue, parse_attributes};

fn pairs(input: &str) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = parse_attributes(input).into_iter().collect();
    pairs.sort();
    pairs
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|&(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn test_empty_input() {
    assert!(parse_attributes("").is_empty());
    assert!(parse_attributes("   \n\t").is_empty());
}

#[test]
fn test_quoted_and_unquoted_values() {
    assert_eq!(
        pairs(r#"a="1" b='2' c=3"#),
        owned(&[("a", "1"), ("b", "2"), ("c", "3")])
    );
}

#[test]
fn test_bare_keys_get_empty_values() {
    assert_eq!(
        pairs("checked disabled"),
        owned(&[("checked", ""), ("disabled", "")])
    );
}

#[test]
fn test_empty_quoted_value() {
    assert_eq!(pairs("alt=''"), owned(&[("alt", "")]));
}

#[test]
fn test_other_quote_inside_value_is_kept() {
    assert_eq!(
        pairs(r#"title="it's 'fine'""#),
        owned(&[("title", "it's 'fine'")])
    );
}

#[test]
fn test_equals_inside_value() {
    assert_eq!(pairs(r#"href="/?a=b&c=d""#), owned(&[("href", "/?a=b&c=d")]));
}

#[test]
fn test_values_trimmed_of_spaces() {
    assert_eq!(pairs(r#"a="  x y  ""#), owned(&[("a", "x y")]));
}

#[test]
fn test_line_breaks_separate_attributes() {
    assert_eq!(
        pairs("a=\"1\"\n\tb\r\nc=2"),
        owned(&[("a", "1"), ("b", ""), ("c", "2")])
    );
}

#[test]
fn test_whitespace_around_equals() {
    assert_eq!(
        pairs("class = 'x y'  disabled"),
        owned(&[("class", "x y"), ("disabled", "")])
    );
}

#[test]
fn test_unquoted_value_after_spaced_equals_is_a_key() {
    assert_eq!(pairs("a = b"), owned(&[("a", ""), ("b", "")]));
}

#[test]
fn test_duplicate_key_last_wins() {
    assert_eq!(pairs("a=1 a=2 a"), owned(&[("a", "")]));
}

#[test]
fn test_non_ascii_keys_and_values() {
    assert_eq!(
        pairs("titel=\"über\" lang=ja"),
        owned(&[("lang", "ja"), ("titel", "über")])
    );
}

#[test]
fn test_stray_quote_offsets_are_byte_offsets() {
    let mut scanner = AttributeScanner::new("ü\"x=1 y'z");
    scanner.run();

    assert_eq!(
        scanner.issues(),
        &[
            ParseIssue {
                kind: IssueKind::StrayQuote { quote: '"' },
                offset: 2,
            },
            ParseIssue {
                kind: IssueKind::StrayQuote { quote: '\'' },
                offset: 8,
            },
        ]
    );
    let attrs = scanner.into_attributes();
    assert_eq!(attrs["üx"], "1");
    assert_eq!(attrs["yz"], "");
}

#[test]
fn test_state_after_run() {
    let mut scanner = AttributeScanner::new("a=");
    scanner.run();
    assert_eq!(scanner.state(), AttributeState::ValueBegin);
    assert_eq!(scanner.into_attributes()["a"], "");

    let mut scanner = AttributeScanner::new("a=b");
    scanner.run();
    assert_eq!(scanner.state(), AttributeState::ValueEnd);
}

#[test]
fn test_state_names() {
    assert_eq!(AttributeState::Key.to_string(), "Key");
    assert_eq!(AttributeState::ValueBegin.to_string(), "ValueBegin");
    assert_eq!(AttributeState::ValueEnd.to_string(), "ValueEnd");
}

#[test]
fn test_long_whitespace_runs_scan_in_linear_time() {
    let spaces = " ".repeat(200_000);
    let started = Instant::now();

    assert_eq!(pairs(&format!("a={spaces}'v'")), owned(&[("a", "v")]));
    assert_eq!(pairs(&format!("a{spaces}=v")), owned(&[("a", "v")]));
    assert_eq!(
        pairs(&format!("a{spaces}b{spaces}")),
        owned(&[("a", ""), ("b", "")])
    );
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[test]
fn test_lookahead_is_per_whitespace_run() {
    assert_eq!(
        pairs("a  = 'x'  b  c  =  \"y\"  d =e"),
        owned(&[("a", "x"), ("b", ""), ("c", "y"), ("d", "e")])
    );
}
