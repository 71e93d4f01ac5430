//! The MF1 parser.

use mf1_common::Span;
use mf1_diagnostic::{Diagnostic, DiagnosticKind, Found};
use mf1_lexer::{Lexer, Token, TokenKind};
use mf1_syntax::*;
use tracing::trace;

use crate::config::ParseConfig;
use crate::recovery::{Abandon, Delimiter, PResult, skip_argument, skip_element};
use crate::skeleton::parse_date_skeleton;

const ARG_TYPES: [&str; 4] = ["number", "date", "time", "plural"];
const NUMBER_STYLES: [&str; 2] = ["integer", "percent"];
const TIME_STYLES: [&str; 4] = ["short", "medium", "long", "full"];
const DATE_STYLES: [&str; 5] = ["short", "medium", "long", "full", "::skeleton"];

/// The plural whose branch is being parsed; `#` stands for its count.
struct PluralContext {
    name: ArgName,
    subtract: u64,
}

impl PluralContext {
    fn hash(&self, span: Span) -> Node {
        Node::number_arg(self.name.clone(), NumberFormatOptions::default(), self.subtract)
            .with_span(span)
    }
}

/// What is known of an argument before it failed, for its stand-in node.
#[derive(Default)]
struct ArgumentHead {
    name: Option<ArgName>,
    is_plural: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateTimeKind {
    Date,
    Time,
}

impl DateTimeKind {
    fn as_str(self) -> &'static str {
        match self {
            DateTimeKind::Date => "date",
            DateTimeKind::Time => "time",
        }
    }

    fn styles(self) -> &'static [&'static str] {
        match self {
            DateTimeKind::Date => &DATE_STYLES,
            DateTimeKind::Time => &TIME_STYLES,
        }
    }

    fn options(self, style: DateTimeStyle) -> DateTimeFormatOptions {
        match self {
            DateTimeKind::Date => DateTimeFormatOptions::date(style),
            DateTimeKind::Time => DateTimeFormatOptions::time(style),
        }
    }
}

/// The MF1 parser.
///
/// Literal text is read straight from the lexer between arguments; argument
/// syntax is read token by token. Problems that leave the construct readable
/// are recorded and parsing goes on. Anything else abandons the enclosing
/// argument or element, which is then skipped to its closing delimiter and
/// kept in the tree as an `Invalid*` node.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    config: ParseConfig,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, config: ParseConfig) -> Self {
        Self {
            lexer: Lexer::new(source),
            config,
        }
    }

    pub fn diagnostics(self) -> Vec<Diagnostic> {
        self.lexer.finish()
    }

    /// Parse the whole input as one message.
    pub fn parse_root(&mut self) -> Node {
        match self.parse_message(Delimiter::Eof, None) {
            Ok(node) => node,
            // Every construct recovers on its own; the top level only ends at EOF.
            Err(Abandon) => unreachable!("top-level message abandoned"),
        }
    }

    /// Parse a message up to `delim`, leaving the delimiter unconsumed.
    fn parse_message(
        &mut self,
        delim: Delimiter,
        plural: Option<&PluralContext>,
    ) -> PResult<Node> {
        let start = self.lexer.pos();
        let mut parts: Vec<Node> = Vec::new();

        loop {
            if let Some(run) = self.lexer.read_text(plural.is_some()) {
                push_text(&mut parts, run.value, run.span);
            }
            let at = self.lexer.pos();

            match self.lexer.peek_char() {
                None => {
                    if delim == Delimiter::Eof {
                        break;
                    }
                    self.lexer.report(Diagnostic::unexpected_token(
                        Found::Eof,
                        [delim.as_expected()],
                        Span::empty_at(at),
                    ));
                    return Err(Abandon);
                }
                Some('{') => {
                    let node = self.parse_argument();
                    parts.push(node);
                }
                Some('}') => {
                    if delim == Delimiter::Brace {
                        break;
                    }
                    self.lexer.bump();
                    self.stray(&mut parts, at, delim);
                }
                Some('<') if self.lexer.peek_nth(1) == Some('/') => {
                    if delim == Delimiter::CloseTag {
                        break;
                    }
                    self.lexer.bump(); // `<`
                    self.lexer.bump(); // `/`
                    self.stray(&mut parts, at, delim);
                }
                Some('<') => {
                    let inner = if self.config.hash_in_elements {
                        plural
                    } else {
                        None
                    };
                    let node = self.parse_element(inner);
                    parts.push(node);
                }
                Some(ch) => {
                    // `#`: the text run only stops there inside a plural branch
                    self.lexer.bump();
                    let span = Span::from_usize(at, self.lexer.pos());
                    match plural {
                        Some(ctx) if ch == '#' => parts.push(ctx.hash(span)),
                        _ => push_text(&mut parts, ch.to_string(), span),
                    }
                }
            }
        }

        if parts.is_empty() {
            return Ok(Node::text("").with_span(Span::empty_at(start)));
        }
        Ok(Node::concat(parts))
    }

    /// A closing delimiter that closes nothing: reported, then kept as text.
    fn stray(&mut self, parts: &mut Vec<Node>, at: usize, delim: Delimiter) {
        let span = Span::from_usize(at, self.lexer.pos());
        let text = span.slice(self.lexer.source()).to_string();
        self.lexer.report(Diagnostic::unexpected_token(
            Found::Token(text.clone()),
            [delim.as_expected()],
            span,
        ));
        push_text(parts, text, span);
    }

    fn parse_argument(&mut self) -> Node {
        let start = self.lexer.pos();
        self.lexer.bump(); // `{`

        let mut head = ArgumentHead::default();
        match self.parse_argument_body(start, &mut head) {
            Ok(node) => node,
            Err(Abandon) => {
                if !skip_argument(&mut self.lexer) {
                    self.report_eof(["}"]);
                }
                let span = self.span_from(start);
                trace!(start = span.start.0, end = span.end.0, "skipped invalid argument");
                let node = if head.is_plural {
                    Node::invalid_plural(head.name)
                } else {
                    Node::invalid_arg(head.name)
                };
                node.with_span(span)
            }
        }
    }

    fn parse_argument_body(&mut self, start: usize, head: &mut ArgumentHead) -> PResult<Node> {
        let (name, _) = self.parse_name(false)?;
        head.name = Some(name.clone());

        let token = self.lexer.next_token();
        match token.kind {
            TokenKind::RBrace => {
                return Ok(Node::string_arg(name).with_span(self.span_from(start)));
            }
            TokenKind::Comma => {}
            _ => return Err(self.fail(&token, &[",", "}"])),
        }

        let token = self.lexer.next_token();
        let arg_type = match &token.kind {
            TokenKind::Ident(arg_type) => arg_type.clone(),
            _ => return Err(self.fail(&token, &ARG_TYPES)),
        };
        match arg_type.as_str() {
            "number" => self.parse_number_arg(start, name),
            "date" => self.parse_date_time_arg(start, name, DateTimeKind::Date),
            "time" => self.parse_date_time_arg(start, name, DateTimeKind::Time),
            "plural" => {
                head.is_plural = true;
                self.parse_plural(start, name)
            }
            _ => {
                let kind = DiagnosticKind::UnexpectedArgType {
                    arg_type,
                    expected: ARG_TYPES.iter().map(|s| s.to_string()).collect(),
                };
                Err(self.abandon(kind, token.span))
            }
        }
    }

    /// An identifier or a positional index. With `no_space`, whitespace
    /// before the name is reported but tolerated.
    fn parse_name(&mut self, no_space: bool) -> PResult<(ArgName, Span)> {
        let token = self.lexer.next_token();
        if no_space {
            self.forbid_space(&token);
        }
        match &token.kind {
            TokenKind::Ident(name) => Ok((ArgName::Named(name.clone()), token.span)),
            TokenKind::Number(index) => Ok((ArgName::Index(*index), token.span)),
            _ => Err(self.fail(&token, &["identifier", "number"])),
        }
    }

    fn parse_number_arg(&mut self, start: usize, name: ArgName) -> PResult<Node> {
        let token = self.lexer.next_token();
        let options = match token.kind {
            TokenKind::RBrace => NumberFormatOptions::default(),
            TokenKind::Comma => {
                let options = self.parse_number_style()?;
                self.expect_close()?;
                options
            }
            _ => return Err(self.fail(&token, &[",", "}"])),
        };
        Ok(Node::number_arg(name, options, 0).with_span(self.span_from(start)))
    }

    fn parse_number_style(&mut self) -> PResult<NumberFormatOptions> {
        let token = self.lexer.next_token();
        match &token.kind {
            TokenKind::Ident(style) if style == "integer" => Ok(NumberFormatOptions::integer()),
            TokenKind::Ident(style) if style == "percent" => Ok(NumberFormatOptions::percent()),
            TokenKind::Eof | TokenKind::RBrace | TokenKind::Comma => {
                Err(self.fail(&token, &NUMBER_STYLES))
            }
            _ => Err(self.bad_style(&token, "number", &NUMBER_STYLES)),
        }
    }

    fn parse_date_time_arg(
        &mut self,
        start: usize,
        name: ArgName,
        kind: DateTimeKind,
    ) -> PResult<Node> {
        let token = self.lexer.next_token();
        let options = match token.kind {
            TokenKind::RBrace => kind.options(DateTimeStyle::Medium),
            TokenKind::Comma => {
                let options = self.parse_date_time_style(kind)?;
                self.expect_close()?;
                options
            }
            _ => return Err(self.fail(&token, &[",", "}"])),
        };
        Ok(Node::date_time_arg(name, options).with_span(self.span_from(start)))
    }

    fn parse_date_time_style(&mut self, kind: DateTimeKind) -> PResult<DateTimeFormatOptions> {
        let token = self.lexer.next_token();
        match &token.kind {
            TokenKind::Ident(style) => match DateTimeStyle::from_keyword(style) {
                Some(style) => Ok(kind.options(style)),
                None => Err(self.bad_style(&token, kind.as_str(), kind.styles())),
            },
            TokenKind::ColonColon if kind == DateTimeKind::Date => {
                let Some(word) = self.lexer.next_word() else {
                    let next = self.lexer.next_token();
                    return Err(self.fail(&next, &["skeleton"]));
                };
                let (options, diagnostics) = parse_date_skeleton(&word.value, word.span);
                for diagnostic in diagnostics {
                    self.lexer.report(diagnostic);
                }
                Ok(options)
            }
            TokenKind::Eof | TokenKind::RBrace | TokenKind::Comma => {
                Err(self.fail(&token, kind.styles()))
            }
            _ => Err(self.bad_style(&token, kind.as_str(), kind.styles())),
        }
    }

    fn parse_plural(&mut self, start: usize, name: ArgName) -> PResult<Node> {
        let token = self.lexer.next_token();
        if token.kind != TokenKind::Comma {
            return Err(self.fail(&token, &[","]));
        }

        let mut token = self.lexer.next_token();
        let mut subtract = 0;
        if token.kind == TokenKind::Offset {
            let value = self.lexer.next_token();
            match value.kind {
                TokenKind::Number(n) => subtract = n,
                _ => return Err(self.fail(&value, &["number"])),
            }
            token = self.lexer.next_token();
        }

        let ctx = PluralContext {
            name: name.clone(),
            subtract,
        };
        let mut branches = Vec::new();
        let mut last_selector = None;
        loop {
            let selector = match &token.kind {
                TokenKind::RBrace => break,
                TokenKind::Ident(keyword) => Selector::Keyword(keyword.clone()),
                TokenKind::Eq => self.parse_exact_selector()?,
                _ => return Err(self.fail(&token, &["identifier", "=", "}"])),
            };
            let selector_start = usize::from(token.span.start);
            last_selector = Some(self.span_from(selector_start));

            let open = self.lexer.next_token();
            if open.kind != TokenKind::LBrace {
                return Err(self.fail(&open, &["{"]));
            }
            let message = self.parse_message(Delimiter::Brace, Some(&ctx))?;
            self.lexer.bump(); // `}`
            let span = self.span_from(selector_start);
            branches.push(PluralBranch::new(selector, message).with_span(span));

            token = self.lexer.next_token();
        }

        let span = self.span_from(start);
        match branches.pop() {
            Some(last) if last.selector.is_other() => {
                branches.retain(|branch| !branch.selector.is_other());
                Ok(Node::plural(name, subtract, branches, last.message).with_span(span))
            }
            _ => {
                self.lexer.report(Diagnostic::new(
                    DiagnosticKind::PluralLastSelector,
                    last_selector.unwrap_or(span),
                ));
                Ok(Node::invalid_plural(Some(name)).with_span(span))
            }
        }
    }

    /// `=n`, after the `=`. Whitespace between the two is a hard error.
    fn parse_exact_selector(&mut self) -> PResult<Selector> {
        let value = self.lexer.next_token();
        if let Some(space) = value.space {
            self.lexer
                .report(Diagnostic::new(DiagnosticKind::InvalidSpaces, space));
            self.lexer.set_pos(usize::from(value.span.start));
            return Err(Abandon);
        }
        match value.kind {
            TokenKind::Number(n) => Ok(Selector::Exact(n)),
            _ => Err(self.fail(&value, &["number"])),
        }
    }

    fn parse_element(&mut self, plural: Option<&PluralContext>) -> Node {
        let start = self.lexer.pos();
        self.lexer.bump(); // `<`

        let mut name = None;
        match self.parse_element_body(start, &mut name, plural) {
            Ok(node) => node,
            Err(Abandon) => {
                if !skip_element(&mut self.lexer) {
                    self.report_eof([">"]);
                }
                let span = self.span_from(start);
                trace!(start = span.start.0, end = span.end.0, "skipped invalid element");
                Node::invalid_element(name).with_span(span)
            }
        }
    }

    fn parse_element_body(
        &mut self,
        start: usize,
        name_slot: &mut Option<ArgName>,
        plural: Option<&PluralContext>,
    ) -> PResult<Node> {
        let (name, _) = self.parse_name(true)?;
        *name_slot = Some(name.clone());

        let token = self.lexer.next_token();
        match token.kind {
            TokenKind::Slash => {
                self.expect_gt()?;
                Ok(Node::element(name, None).with_span(self.span_from(start)))
            }
            TokenKind::Gt => {
                let message = self.parse_message(Delimiter::CloseTag, plural)?;
                self.lexer.bump(); // `<`
                self.lexer.bump(); // `/`
                let (closing, closing_span) = self.parse_name(true)?;
                if closing != name {
                    self.lexer.report(Diagnostic::new(
                        DiagnosticKind::MismatchedTag {
                            expected: name.to_string(),
                            found: closing.to_string(),
                        },
                        closing_span,
                    ));
                }
                self.expect_gt()?;
                Ok(Node::element(name, Some(message)).with_span(self.span_from(start)))
            }
            _ => Err(self.fail(&token, &["/", ">"])),
        }
    }

    fn expect_gt(&mut self) -> PResult<()> {
        let token = self.lexer.next_token();
        self.forbid_space(&token);
        if token.kind != TokenKind::Gt {
            return Err(self.fail(&token, &[">"]));
        }
        Ok(())
    }

    fn expect_close(&mut self) -> PResult<()> {
        let token = self.lexer.next_token();
        if token.kind != TokenKind::RBrace {
            return Err(self.fail(&token, &["}"]));
        }
        Ok(())
    }

    /// Report whitespace before `token` without failing.
    fn forbid_space(&mut self, token: &Token) {
        if let Some(space) = token.space {
            self.lexer
                .report(Diagnostic::new(DiagnosticKind::InvalidSpaces, space));
        }
    }

    /// Report `token` as unexpected and abandon at it.
    fn fail(&mut self, token: &Token, expected: &[&str]) -> Abandon {
        let found = if token.is_eof() {
            Found::Eof
        } else {
            Found::Token(token.span.slice(self.lexer.source()).to_string())
        };
        let kind = DiagnosticKind::UnexpectedToken {
            found,
            expected: expected.iter().map(|s| s.to_string()).collect(),
        };
        self.abandon(kind, token.span)
    }

    fn bad_style(&mut self, token: &Token, arg_type: &str, expected: &[&str]) -> Abandon {
        let kind = DiagnosticKind::UnexpectedArgStyle {
            arg_type: arg_type.to_string(),
            style: token.span.slice(self.lexer.source()).to_string(),
            expected: expected.iter().map(|s| s.to_string()).collect(),
        };
        self.abandon(kind, token.span)
    }

    /// Record a hard error and rewind to the offending token, so the
    /// resynchronizing scan sees any brace it holds.
    fn abandon(&mut self, kind: DiagnosticKind, span: Span) -> Abandon {
        self.lexer.report(Diagnostic::new(kind, span));
        self.lexer.set_pos(usize::from(span.start));
        Abandon
    }

    fn report_eof<const N: usize>(&mut self, expected: [&str; N]) {
        let at = Span::empty_at(self.lexer.pos());
        self.lexer
            .report(Diagnostic::unexpected_token(Found::Eof, expected, at));
    }

    fn span_from(&self, start: usize) -> Span {
        Span::from_usize(start, self.lexer.pos())
    }
}

/// Append literal text, merging it into a text node right before it.
fn push_text(parts: &mut Vec<Node>, value: String, span: Span) {
    if let Some(Node {
        kind: NodeKind::Text { value: prev },
        span: prev_span,
    }) = parts.last_mut()
    {
        prev.push_str(&value);
        *prev_span = Some(prev_span.map_or(span, |earlier| earlier.to(span)));
        return;
    }
    parts.push(Node::text(value).with_span(span));
}
