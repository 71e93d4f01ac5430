//! Error codes for MF1 diagnostics.

use serde::Serialize;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    // Token-level (MF0001 - MF0006)
    UnexpectedToken,
    InvalidCharacter,
    InvalidIdentifier,
    InvalidNumber,
    InvalidSpaces,
    UnclosedQuotedString,

    // Semantic (MF0007 - MF0010)
    UnexpectedArgType,
    UnexpectedArgStyle,
    InvalidDateSkeleton,
    InsufficientFieldsInDateSkeleton,

    // Structural (MF0011 - MF0012)
    PluralLastSelector,
    MismatchedTag,
}

/// The three diagnostic families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Token,
    Semantic,
    Structural,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Token-level
            ErrorCode::UnexpectedToken => "MF0001",
            ErrorCode::InvalidCharacter => "MF0002",
            ErrorCode::InvalidIdentifier => "MF0003",
            ErrorCode::InvalidNumber => "MF0004",
            ErrorCode::InvalidSpaces => "MF0005",
            ErrorCode::UnclosedQuotedString => "MF0006",

            // Semantic
            ErrorCode::UnexpectedArgType => "MF0007",
            ErrorCode::UnexpectedArgStyle => "MF0008",
            ErrorCode::InvalidDateSkeleton => "MF0009",
            ErrorCode::InsufficientFieldsInDateSkeleton => "MF0010",

            // Structural
            ErrorCode::PluralLastSelector => "MF0011",
            ErrorCode::MismatchedTag => "MF0012",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ErrorCode::UnexpectedToken
            | ErrorCode::InvalidCharacter
            | ErrorCode::InvalidIdentifier
            | ErrorCode::InvalidNumber
            | ErrorCode::InvalidSpaces
            | ErrorCode::UnclosedQuotedString => Category::Token,
            ErrorCode::UnexpectedArgType
            | ErrorCode::UnexpectedArgStyle
            | ErrorCode::InvalidDateSkeleton
            | ErrorCode::InsufficientFieldsInDateSkeleton => Category::Semantic,
            ErrorCode::PluralLastSelector | ErrorCode::MismatchedTag => Category::Structural,
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnclosedQuotedString => {
                Some("add a closing `'`, or write `''` for a literal apostrophe")
            }
            ErrorCode::InvalidSpaces => Some("remove the whitespace"),
            ErrorCode::PluralLastSelector => Some("add an `other {...}` branch at the end"),
            ErrorCode::InvalidIdentifier => {
                Some("argument names may only contain ASCII letters, digits and `_`")
            }
            ErrorCode::InvalidNumber => Some("remove the leading zeros"),
            _ => None,
        }
    }
}
