//! Character classification.
//!
//! Word boundaries follow the Unicode `Pattern_Syntax` and
//! `Pattern_White_Space` properties; both are immutable by Unicode policy, so
//! their ranges are spelled out here.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// `Pattern_Syntax` ranges, inclusive.
const PATTERN_SYNTAX: &[(char, char)] = &[
    ('\u{21}', '\u{2F}'),
    ('\u{3A}', '\u{40}'),
    ('\u{5B}', '\u{5E}'),
    ('\u{60}', '\u{60}'),
    ('\u{7B}', '\u{7E}'),
    ('\u{A1}', '\u{A7}'),
    ('\u{A9}', '\u{A9}'),
    ('\u{AB}', '\u{AC}'),
    ('\u{AE}', '\u{AE}'),
    ('\u{B0}', '\u{B1}'),
    ('\u{B6}', '\u{B6}'),
    ('\u{BB}', '\u{BB}'),
    ('\u{BF}', '\u{BF}'),
    ('\u{D7}', '\u{D7}'),
    ('\u{F7}', '\u{F7}'),
    ('\u{2010}', '\u{2027}'),
    ('\u{2030}', '\u{203E}'),
    ('\u{2041}', '\u{2053}'),
    ('\u{2055}', '\u{205E}'),
    ('\u{2190}', '\u{245F}'),
    ('\u{2500}', '\u{2775}'),
    ('\u{2794}', '\u{2BFF}'),
    ('\u{2E00}', '\u{2E7F}'),
    ('\u{3001}', '\u{3003}'),
    ('\u{3008}', '\u{3020}'),
    ('\u{3030}', '\u{3030}'),
    ('\u{FD3E}', '\u{FD3F}'),
    ('\u{FE45}', '\u{FE46}'),
];

pub fn is_pattern_syntax(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_punctuation() && ch != '_';
    }
    PATTERN_SYNTAX
        .binary_search_by(|&(lo, hi)| {
            if hi < ch {
                std::cmp::Ordering::Less
            } else if lo > ch {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

pub fn is_pattern_white_space(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{85}'
            | '\u{200E}'
            | '\u{200F}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Whitespace that may separate tokens.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() || is_pattern_white_space(ch)
}

/// Code points that sit in whitespace position but are never valid there:
/// controls, format characters and unassigned code points.
pub fn is_invalid_space(ch: char) -> bool {
    !is_whitespace(ch)
        && matches!(
            ch.general_category(),
            GeneralCategory::Control | GeneralCategory::Format | GeneralCategory::Unassigned
        )
}

/// Characters of an identifier-like run: anything that is neither pattern
/// syntax nor pattern whitespace. Other Unicode spaces such as U+00A0 stay in
/// the run and make it an invalid identifier.
pub fn is_word_char(ch: char) -> bool {
    !is_pattern_syntax(ch) && !is_pattern_white_space(ch)
}

/// `[a-zA-Z_][a-zA-Z0-9_]*`
pub fn is_valid_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}

/// `0|[1-9][0-9]*`
pub fn is_valid_number(text: &str) -> bool {
    text == "0"
        || (text.starts_with(|ch: char| matches!(ch, '1'..='9'))
            && text.bytes().all(|b| b.is_ascii_digit()))
}

/// Best-effort value of a numeric run: its ASCII digits, saturating on
/// overflow. The flag reports whether the value overflowed.
pub fn number_value(text: &str) -> (u64, bool) {
    let mut value: u64 = 0;
    let mut overflowed = false;
    for digit in text.bytes().filter(u8::is_ascii_digit) {
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit - b'0')))
        {
            Some(next) => value = next,
            None => {
                value = u64::MAX;
                overflowed = true;
            }
        }
    }
    (value, overflowed)
}

/// Characters that end a run of literal message text.
pub fn is_text_syntax(ch: char, hash_is_syntax: bool) -> bool {
    matches!(ch, '\'' | '{' | '}' | '<') || (hash_is_syntax && ch == '#')
}

/// Characters after `'` that open a quoted span.
pub fn opens_quote(ch: char) -> bool {
    matches!(ch, '{' | '}' | '|' | '<' | '#')
}

/// Input with none of the syntax characters is a single text node.
pub fn is_plain_text(source: &str) -> bool {
    !source.contains(['\'', '{', '}', '<'])
}
