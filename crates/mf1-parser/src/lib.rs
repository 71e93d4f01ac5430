//! Parser for MF1 messages.
//!
//! This crate provides a recursive descent parser that turns a message
//! string into the tree of `mf1_syntax`.
//!
//! ## Error Recovery
//!
//! The parser never stops at the first problem. Recoverable problems are
//! recorded and parsing continues; an argument or element that cannot be
//! read is skipped to its closing delimiter and kept as an `Invalid*` node,
//! so every problem in a message is reported in a single pass.
//!
//! ```
//! let (node, diagnostics) = mf1_parser::parse_with_diagnostics("{n, plural, one{x}}");
//! assert!(node.contains_invalid());
//! assert_eq!(diagnostics.len(), 1);
//! ```

mod config;
mod parser;
mod recovery;
pub mod skeleton;

pub use config::ParseConfig;
pub use parser::Parser;
pub use recovery::Delimiter;

pub use mf1_diagnostic::{Diagnostic, DiagnosticKind, describe};
pub use mf1_syntax::Node;

use mf1_common::Span;
use mf1_lexer::classify::is_plain_text;
use thiserror::Error;
use tracing::debug;

/// A message that produced at least one diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_descriptions(.diagnostics))]
pub struct ParseError {
    pub diagnostics: Vec<Diagnostic>,
}

fn join_descriptions(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(describe)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a message, failing on any diagnostic.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    let (node, diagnostics) = parse_with_diagnostics(source);
    if diagnostics.is_empty() {
        Ok(node)
    } else {
        Err(ParseError { diagnostics })
    }
}

/// Parse a message, returning the tree together with every diagnostic.
pub fn parse_with_diagnostics(source: &str) -> (Node, Vec<Diagnostic>) {
    parse_with_config(source, &ParseConfig::default())
}

/// Parse a message with the given configuration.
pub fn parse_with_config(source: &str, config: &ParseConfig) -> (Node, Vec<Diagnostic>) {
    if config.fast_path && is_plain_text(source) {
        debug!(len = source.len(), fast_path = true, "parsed message");
        let node = Node::text(source).with_span(Span::from_usize(0, source.len()));
        return (node, Vec::new());
    }

    let mut parser = Parser::new(source, config.clone());
    let node = parser.parse_root();
    let diagnostics = parser.diagnostics();
    debug!(
        len = source.len(),
        fast_path = false,
        diagnostics = diagnostics.len(),
        "parsed message"
    );
    (node, diagnostics)
}
