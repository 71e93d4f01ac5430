//! Token definitions for MF1 argument syntax.

use mf1_common::Span;

/// A token with its kind and span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// The valid whitespace skipped right before this token, if any.
    pub space: Option<Span>,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// The kind of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A run starting with a digit, with its best-effort value.
    Number(u64),
    /// Any other identifier-like run, verbatim.
    Ident(String),
    /// `offset:`
    Offset,
    /// `::`
    ColonColon,

    LBrace, // {
    RBrace, // }
    Comma,  // ,
    Lt,     // <
    Gt,     // >
    Slash,  // /
    Eq,     // =

    Eof,
    Unknown(char),
}
