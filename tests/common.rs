//! Integration tests for mf1-common crate.

use mf1_common::{BytePos, Span};

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start.0, 10);
    assert_eq!(merged.end.0, 30);
}

#[test]
fn test_span_to() {
    let a = Span::from_usize(2, 4);
    let b = Span::from_usize(7, 9);
    assert_eq!(a.to(b), Span::from_usize(2, 9));
}

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
    assert_eq!(span.range(), 5..15);
}

#[test]
fn test_empty_span() {
    let empty = Span::empty_at(5);
    assert!(empty.is_empty());
    assert_eq!(empty.range(), 5..5);
}

#[test]
fn test_span_shift_and_slice() {
    let source = "{d, date, ::yMd}";
    let span = Span::from_usize(0, 3).shift(12);
    assert_eq!(span.slice(source), "yMd");
}

#[test]
fn test_byte_pos_offset() {
    let pos = BytePos(10);
    assert_eq!(pos.offset(5), BytePos(15));
    assert_eq!(usize::from(pos), 10);
}
