//! Diagnostic records and their descriptions.

use crate::ErrorCode;
use mf1_common::Span;
use serde::Serialize;
use std::fmt;

/// What the parser found where it expected something else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Found {
    /// The end of the message.
    Eof,
    /// Any other token, as written in the source.
    Token(String),
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Eof => f.write_str("EOF"),
            Found::Token(text) => write!(f, "{:?}", text),
        }
    }
}

/// The closed set of problems the parser reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DiagnosticKind {
    UnexpectedToken { found: Found, expected: Vec<String> },
    InvalidCharacter { text: String },
    InvalidIdentifier { text: String },
    InvalidNumber { text: String },
    InvalidSpaces,
    UnclosedQuotedString,
    #[serde(rename_all = "camelCase")]
    UnexpectedArgType { arg_type: String, expected: Vec<String> },
    #[serde(rename_all = "camelCase")]
    UnexpectedArgStyle {
        arg_type: String,
        style: String,
        expected: Vec<String>,
    },
    InvalidDateSkeleton { component: String },
    InsufficientFieldsInDateSkeleton,
    PluralLastSelector,
    MismatchedTag { expected: String, found: String },
}

impl DiagnosticKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            DiagnosticKind::UnexpectedToken { .. } => ErrorCode::UnexpectedToken,
            DiagnosticKind::InvalidCharacter { .. } => ErrorCode::InvalidCharacter,
            DiagnosticKind::InvalidIdentifier { .. } => ErrorCode::InvalidIdentifier,
            DiagnosticKind::InvalidNumber { .. } => ErrorCode::InvalidNumber,
            DiagnosticKind::InvalidSpaces => ErrorCode::InvalidSpaces,
            DiagnosticKind::UnclosedQuotedString => ErrorCode::UnclosedQuotedString,
            DiagnosticKind::UnexpectedArgType { .. } => ErrorCode::UnexpectedArgType,
            DiagnosticKind::UnexpectedArgStyle { .. } => ErrorCode::UnexpectedArgStyle,
            DiagnosticKind::InvalidDateSkeleton { .. } => ErrorCode::InvalidDateSkeleton,
            DiagnosticKind::InsufficientFieldsInDateSkeleton => {
                ErrorCode::InsufficientFieldsInDateSkeleton
            }
            DiagnosticKind::PluralLastSelector => ErrorCode::PluralLastSelector,
            DiagnosticKind::MismatchedTag { .. } => ErrorCode::MismatchedTag,
        }
    }

    /// True for the conditions that a truncated message keeps producing.
    pub fn is_eof(&self) -> bool {
        matches!(
            self,
            DiagnosticKind::UnexpectedToken {
                found: Found::Eof,
                ..
            } | DiagnosticKind::UnclosedQuotedString
        )
    }
}

/// A diagnostic anchored at a range of the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn unexpected_token<S: Into<String>>(
        found: Found,
        expected: impl IntoIterator<Item = S>,
        span: Span,
    ) -> Self {
        Self::new(
            DiagnosticKind::UnexpectedToken {
                found,
                expected: expected.into_iter().map(Into::into).collect(),
            },
            span,
        )
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn describe(&self) -> String {
        describe(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self))
    }
}

/// Render the human-readable message for a diagnostic.
pub fn describe(diagnostic: &Diagnostic) -> String {
    match &diagnostic.kind {
        DiagnosticKind::UnexpectedToken { found, expected } => {
            format!(
                "Unexpected token {} (expected {})",
                found,
                expected_list(expected)
            )
        }
        DiagnosticKind::InvalidCharacter { text } => format!("Invalid character {:?}", text),
        DiagnosticKind::InvalidIdentifier { text } => format!("Invalid identifier {:?}", text),
        DiagnosticKind::InvalidNumber { text } => format!("Invalid number {:?}", text),
        DiagnosticKind::InvalidSpaces => "No space allowed here".to_string(),
        DiagnosticKind::UnclosedQuotedString => "Unclosed quoted string".to_string(),
        DiagnosticKind::UnexpectedArgType { arg_type, expected } => match arg_type.as_str() {
            "choice" => {
                "The choice argument type is deprecated and not supported; use plural instead"
                    .to_string()
            }
            "select" => "The select argument type is not supported".to_string(),
            "selectordinal" => {
                "The selectordinal argument type is not supported; use plural instead".to_string()
            }
            _ => format!(
                "Unexpected argument type {:?} (expected {})",
                arg_type,
                expected_list(expected)
            ),
        },
        DiagnosticKind::UnexpectedArgStyle {
            arg_type,
            style,
            expected,
        } => format!(
            "Unexpected {} style {:?} (expected {})",
            arg_type,
            style,
            expected_list(expected)
        ),
        DiagnosticKind::InvalidDateSkeleton { component } => {
            format!("Invalid date skeleton component {:?}", component)
        }
        DiagnosticKind::InsufficientFieldsInDateSkeleton => {
            "Date skeleton must contain at least one date or time field".to_string()
        }
        DiagnosticKind::PluralLastSelector => {
            "The last selector of a plural argument must be \"other\"".to_string()
        }
        DiagnosticKind::MismatchedTag { expected, found } => format!(
            "Mismatched closing tag \"</{}>\" (expected \"</{}>\")",
            found, expected
        ),
    }
}

/// Keywords and token classes print bare, punctuation in quotes.
fn expected_list(expected: &[String]) -> String {
    expected
        .iter()
        .map(|item| {
            if !item.is_empty() && item.chars().all(|c| c.is_ascii_alphabetic()) {
                item.clone()
            } else {
                format!("{:?}", item)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(kind: DiagnosticKind) -> Diagnostic {
        Diagnostic::new(kind, Span::from_usize(0, 1))
    }

    #[test]
    fn test_unexpected_token_wording() {
        let diag = Diagnostic::unexpected_token(
            Found::Token("{".to_string()),
            [",", "}"],
            Span::from_usize(4, 5),
        );
        assert_eq!(
            describe(&diag),
            "Unexpected token \"{\" (expected \",\", \"}\")"
        );

        let eof = Diagnostic::unexpected_token(Found::Eof, ["identifier", "number"], Span::empty_at(1));
        assert_eq!(describe(&eof), "Unexpected token EOF (expected identifier, number)");
    }

    #[test]
    fn test_unsupported_arg_types_have_distinct_wording() {
        let describe_type = |t: &str| {
            describe(&at(DiagnosticKind::UnexpectedArgType {
                arg_type: t.to_string(),
                expected: vec!["number".into(), "date".into(), "time".into(), "plural".into()],
            }))
        };
        let choice = describe_type("choice");
        let select = describe_type("select");
        let ordinal = describe_type("selectordinal");
        assert_ne!(choice, select);
        assert_ne!(select, ordinal);
        assert_eq!(
            describe_type("money"),
            "Unexpected argument type \"money\" (expected number, date, time, plural)"
        );
    }

    #[test]
    fn test_arg_style_lists_sentinel() {
        let diag = at(DiagnosticKind::UnexpectedArgStyle {
            arg_type: "date".into(),
            style: "tiny".into(),
            expected: vec![
                "short".into(),
                "medium".into(),
                "long".into(),
                "full".into(),
                "::skeleton".into(),
            ],
        });
        assert_eq!(
            diag.to_string(),
            "Unexpected date style \"tiny\" (expected short, medium, long, full, \"::skeleton\")"
        );
    }

    #[test]
    fn test_eof_classification() {
        assert!(at(DiagnosticKind::UnclosedQuotedString).kind.is_eof());
        assert!(!at(DiagnosticKind::InvalidSpaces).kind.is_eof());
        let token = Diagnostic::unexpected_token(Found::Token("x".into()), ["}"], Span::empty_at(0));
        assert!(!token.kind.is_eof());
    }

    #[test]
    fn test_code_mapping() {
        assert_eq!(at(DiagnosticKind::PluralLastSelector).code(), ErrorCode::PluralLastSelector);
        assert_eq!(
            at(DiagnosticKind::InvalidNumber { text: "01".into() }).code().as_str(),
            "MF0004"
        );
    }
}
