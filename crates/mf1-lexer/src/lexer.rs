//! The MF1 lexer.
//! MF1 词法分析器。

use crate::classify::{
    is_invalid_space, is_text_syntax, is_valid_identifier, is_valid_number, is_whitespace,
    is_word_char, number_value, opens_quote,
};
use crate::token::{Token, TokenKind};
use mf1_common::Span;
use mf1_diagnostic::{Diagnostic, DiagnosticBag, DiagnosticKind};

/// A run of literal message text with quoting resolved.
/// 已处理引号转义的一段字面文本。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub value: String,
    pub span: Span,
}

/// The MF1 lexer.
/// MF1 词法分析器。
///
/// Owns the cursor into the message and the diagnostics of the parse. The
/// parser pulls whatever the grammar expects next: tokens inside argument
/// syntax, literal text between arguments, or a raw skeleton word.
/// 持有消息游标和本次解析的诊断信息。
pub struct Lexer<'src> {
    /// The message being lexed
    /// 正在分析的消息
    source: &'src str,
    /// Current byte offset
    /// 当前字节偏移
    pos: usize,
    /// Collected diagnostics, shared with the parser
    /// 收集的诊断信息，与语法分析器共享
    diagnostics: DiagnosticBag,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given message.
    /// 为给定的消息创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            diagnostics: DiagnosticBag::new(),
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move the cursor, e.g. back to the start of a token before recovery.
    /// 移动游标，例如在错误恢复前回退到 token 起点。
    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(self.source.is_char_boundary(pos));
        self.pos = pos;
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Peek at the next character without consuming it.
    /// 查看下一个字符但不消耗它。
    pub fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Peek at the nth character ahead.
    /// 查看前方第 n 个字符。
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(n)
    }

    /// Advance to the next character.
    /// 前进到下一个字符。
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Record a diagnostic. Returns `false` when an EOF duplicate was dropped.
    pub fn report(&mut self, diagnostic: Diagnostic) -> bool {
        self.diagnostics.push(diagnostic)
    }

    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics.into_vec()
    }

    /// Tokenize the rest of the input as argument syntax.
    /// 将剩余输入全部按参数语法进行词法分析。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        (tokens, self.finish())
    }

    /// Skip a whitespace run.
    /// 跳过空白字符。
    ///
    /// Returns the span of the run when it consisted of valid whitespace only.
    /// Each stretch of controls, format characters or unassigned code points
    /// in the run is reported as its own `InvalidCharacter`, and the run then
    /// counts as no whitespace at all, so callers that forbid spaces stay
    /// quiet.
    pub fn skip_whitespace(&mut self) -> Option<Span> {
        let start = self.pos;
        let mut invalid_from: Option<usize> = None;
        let mut saw_invalid = false;

        while let Some(ch) = self.peek_char() {
            if is_whitespace(ch) {
                if let Some(from) = invalid_from.take() {
                    self.report_invalid_characters(from);
                }
                self.bump();
            } else if is_invalid_space(ch) {
                invalid_from.get_or_insert(self.pos);
                saw_invalid = true;
                self.bump();
            } else {
                break;
            }
        }
        if let Some(from) = invalid_from {
            self.report_invalid_characters(from);
        }

        if saw_invalid {
            return None;
        }
        (self.pos > start).then(|| Span::from_usize(start, self.pos))
    }

    fn report_invalid_characters(&mut self, from: usize) {
        let span = Span::from_usize(from, self.pos);
        self.report(Diagnostic::new(
            DiagnosticKind::InvalidCharacter {
                text: span.slice(self.source).to_string(),
            },
            span,
        ));
    }

    /// Get the next token of argument syntax, skipping whitespace.
    /// 跳过空白后获取下一个参数语法 token。
    pub fn next_token(&mut self) -> Token {
        let space = self.skip_whitespace();
        let start = self.pos;

        let Some(ch) = self.bump() else {
            return Token {
                kind: TokenKind::Eof,
                span: Span::empty_at(start),
                space,
            };
        };

        let kind = match ch {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Eq,
            ':' => {
                if self.peek_char() == Some(':') {
                    self.bump();
                    TokenKind::ColonColon
                } else {
                    TokenKind::Unknown(':')
                }
            }
            ch if is_word_char(ch) => self.word(start),
            ch => TokenKind::Unknown(ch),
        };

        Token {
            kind,
            span: Span::from_usize(start, self.pos),
            space,
        }
    }

    /// Read an identifier-like run verbatim, without validating it.
    /// Used for date skeletons.
    pub fn next_word(&mut self) -> Option<TextRun> {
        self.skip_whitespace();
        let start = self.pos;
        while self.peek_char().is_some_and(is_word_char) {
            self.bump();
        }
        if self.pos == start {
            return None;
        }
        Some(TextRun {
            value: self.source[start..self.pos].to_string(),
            span: Span::from_usize(start, self.pos),
        })
    }

    /// Scan the rest of an identifier-like run whose first character has
    /// already been consumed, and classify it.
    fn word(&mut self, start: usize) -> TokenKind {
        while self.peek_char().is_some_and(is_word_char) {
            self.bump();
        }
        let source = self.source;
        let text = &source[start..self.pos];
        let span = Span::from_usize(start, self.pos);

        if text.starts_with(|ch: char| ch.is_ascii_digit()) {
            let (value, overflowed) = number_value(text);
            if overflowed || !is_valid_number(text) {
                self.report(Diagnostic::new(
                    DiagnosticKind::InvalidNumber {
                        text: text.to_string(),
                    },
                    span,
                ));
            }
            return TokenKind::Number(value);
        }

        // `offset:` is only a keyword when the colon follows immediately
        // `offset:` 仅在冒号紧随其后时才是关键字
        if text == "offset" && self.peek_char() == Some(':') && self.peek_nth(1) != Some(':') {
            self.bump();
            return TokenKind::Offset;
        }

        if !is_valid_identifier(text) {
            self.report(Diagnostic::new(
                DiagnosticKind::InvalidIdentifier {
                    text: text.to_string(),
                },
                span,
            ));
        }
        TokenKind::Ident(text.to_string())
    }

    /// Read literal message text up to the next syntax character.
    /// 读取字面文本，直到下一个语法字符。
    ///
    /// `''` is an apostrophe; `'` before one of `{ } | < #` opens a quoted
    /// span that runs to the next lone `'`; any other `'` is literal. `#` only
    /// stops the run inside a plural branch.
    pub fn read_text(&mut self, hash_is_syntax: bool) -> Option<TextRun> {
        let start = self.pos;
        let mut value = String::new();

        while let Some(ch) = self.peek_char() {
            if ch == '\'' {
                match self.peek_nth(1) {
                    Some('\'') => {
                        self.bump();
                        self.bump();
                        value.push('\'');
                    }
                    Some(next) if opens_quote(next) => {
                        let open = self.pos;
                        self.bump();
                        self.quoted(&mut value, open);
                    }
                    _ => {
                        self.bump();
                        value.push('\'');
                    }
                }
            } else if is_text_syntax(ch, hash_is_syntax) {
                break;
            } else {
                self.bump();
                value.push(ch);
            }
        }

        (self.pos > start).then(|| TextRun {
            value,
            span: Span::from_usize(start, self.pos),
        })
    }

    /// Consume a quoted span after its opening `'`.
    /// 消耗引号内的文本（起始 `'` 已消耗）。
    fn quoted(&mut self, value: &mut String, open: usize) {
        loop {
            match self.bump() {
                Some('\'') => {
                    if self.peek_char() == Some('\'') {
                        self.bump();
                        value.push('\'');
                    } else {
                        return;
                    }
                }
                Some(ch) => value.push(ch),
                None => {
                    // Treated as closed at end of input
                    // 视为在输入末尾闭合
                    self.report(Diagnostic::new(
                        DiagnosticKind::UnclosedQuotedString,
                        Span::from_usize(open, self.pos),
                    ));
                    return;
                }
            }
        }
    }
}
