//! Error recovery for the parser.
//!
//! A hard error abandons the argument or element being parsed. The diagnostic
//! is recorded where the error is found; the construct's entry point then
//! skips to its closing delimiter and stands in an `Invalid*` node for it.

use mf1_lexer::Lexer;

/// The current construct cannot be parsed any further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Abandon;

pub(crate) type PResult<T> = Result<T, Abandon>;

/// What ends the message being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// The whole input.
    Eof,
    /// A plural branch, closed by `}`.
    Brace,
    /// An element body, closed by `</`.
    CloseTag,
}

impl Delimiter {
    pub fn as_expected(&self) -> &'static str {
        match self {
            Delimiter::Eof => "EOF",
            Delimiter::Brace => "}",
            Delimiter::CloseTag => "</",
        }
    }
}

/// Skip past the `}` closing the current argument, counting nested braces.
/// Returns `false` when the input ends first.
pub fn skip_argument(lexer: &mut Lexer<'_>) -> bool {
    let mut depth = 1usize;
    while let Some(ch) = lexer.bump() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// Skip past the next `>`. Returns `false` when the input ends first.
pub fn skip_element(lexer: &mut Lexer<'_>) -> bool {
    while let Some(ch) = lexer.bump() {
        if ch == '>' {
            return true;
        }
    }
    false
}
