//! Integration tests for mf1-lexer crate.

use mf1_common::Span;
use mf1_diagnostic::DiagnosticKind;
use mf1_lexer::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, _) = Lexer::new(source).tokenize();
    tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds("{ } , < > / = ::"),
        vec![
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::ColonColon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unknown_characters() {
    assert_eq!(
        kinds("a:b;"),
        vec![
            TokenKind::Ident("a".into()),
            TokenKind::Unknown(':'),
            TokenKind::Ident("b".into()),
            TokenKind::Unknown(';'),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_offset_needs_colon() {
    assert_eq!(kinds("offset:2")[0], TokenKind::Offset);
    assert_eq!(kinds("offset :2")[0], TokenKind::Ident("offset".into()));
    assert_eq!(kinds("offset::")[0], TokenKind::Ident("offset".into()));
}

#[test]
fn test_numbers() {
    let (tokens, diags) = Lexer::new("0 42 007 12ab").tokenize();
    let values: Vec<TokenKind> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        values,
        vec![
            TokenKind::Number(0),
            TokenKind::Number(42),
            TokenKind::Number(7),
            TokenKind::Number(12),
            TokenKind::Eof,
        ]
    );
    let texts: Vec<DiagnosticKind> = diags.into_iter().map(|d| d.kind).collect();
    assert_eq!(
        texts,
        vec![
            DiagnosticKind::InvalidNumber { text: "007".into() },
            DiagnosticKind::InvalidNumber { text: "12ab".into() },
        ]
    );
}

#[test]
fn test_number_overflow_saturates() {
    let (tokens, diags) = Lexer::new("123456789012345678901234567890").tokenize();
    assert_eq!(tokens[0].kind, TokenKind::Number(u64::MAX));
    assert_eq!(diags.len(), 1);
}

#[test]
fn test_unicode_identifier_run() {
    let (tokens, diags) = Lexer::new("n\u{E4}me,").tokenize();
    assert_eq!(tokens[0].kind, TokenKind::Ident("n\u{E4}me".into()));
    assert_eq!(tokens[0].span, Span::from_usize(0, 5));
    assert_eq!(tokens[1].kind, TokenKind::Comma);
    assert_eq!(diags.len(), 1);
}

#[test]
fn test_text_then_tokens() {
    let mut lexer = Lexer::new("Hi {name}");
    let run = lexer.read_text(false).unwrap();
    assert_eq!(run.value, "Hi ");
    assert_eq!(run.span, Span::from_usize(0, 3));
    assert_eq!(lexer.next_token().kind, TokenKind::LBrace);
    assert_eq!(lexer.next_token().kind, TokenKind::Ident("name".into()));
    assert_eq!(lexer.next_token().kind, TokenKind::RBrace);
    assert!(lexer.read_text(false).is_none());
}

#[test]
fn test_quote_before_pipe() {
    let mut lexer = Lexer::new("a'|b'c");
    assert_eq!(lexer.read_text(false).unwrap().value, "a|bc");
}
