//! Integration tests for the mf1-syntax printer.

use mf1_parser::{parse, parse_with_diagnostics};
use mf1_syntax::{
    DateTimeFormatOptions, FieldStyle, Node, NumberFormatOptions, PrintError, to_source,
};

fn assert_round_trip(source: &str) {
    let node = parse(source).unwrap();
    let printed = to_source(&node).unwrap();
    let reparsed = parse(&printed).unwrap_or_else(|err| panic!("{:?} -> {:?}: {}", source, printed, err));
    assert_eq!(reparsed.without_spans(), node.without_spans(), "{:?} -> {:?}", source, printed);
}

#[test]
fn test_round_trips() {
    for source in [
        "Hello {name}!",
        "I''m '{'literal'}' and '#'",
        "{n, number, percent} of {total, number, integer}",
        "{n, plural, offset:1 =0 {none} one {# item} other {# items}}",
        "<b>{count, number}</b> and <br/>",
        "{n, plural, other {<b>#</b> left}}",
        "{d, date} {d, date, short} {t, time, full}",
        "{d, date, ::yMMMdEEEE} at {d, date, ::jjmmss}",
    ] {
        assert_round_trip(source);
    }
}

#[test]
fn test_text_quoting() {
    let node = Node::text("a {b} <c> #1 it's");
    assert_eq!(to_source(&node).unwrap(), "a '{'b'}' '<'c> '#'1 it''s");
}

#[test]
fn test_hash_printed_in_plural() {
    let source = "{n, plural, offset:2 other {# more}}";
    assert_eq!(to_source(&parse(source).unwrap()).unwrap(), "{n, plural, offset:2 other {# more}}");
}

#[test]
fn test_skeleton_printed_in_canonical_order() {
    let options = DateTimeFormatOptions {
        year: Some(FieldStyle::Numeric),
        month: Some(FieldStyle::Short),
        day: Some(FieldStyle::Numeric),
        ..DateTimeFormatOptions::default()
    };
    let node = Node::date_time_arg("d", options);
    assert_eq!(to_source(&node).unwrap(), "{d, date, ::yMMMd}");
}

#[test]
fn test_invalid_nodes_do_not_print() {
    let (node, _) = parse_with_diagnostics("{a, money}");
    assert!(matches!(to_source(&node), Err(PrintError::Invalid(_))));
}

#[test]
fn test_detached_subtract() {
    let node = Node::number_arg("n", NumberFormatOptions::default(), 1);
    assert_eq!(
        to_source(&node),
        Err(PrintError::DetachedSubtract {
            name: "n".to_string(),
            subtract: 1
        })
    );
}
