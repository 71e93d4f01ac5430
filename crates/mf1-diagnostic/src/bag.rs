//! Per-parse diagnostic accumulator.

use crate::Diagnostic;

/// Ordered diagnostics for one top-level parse.
///
/// Only the first end-of-input condition is kept: once an `UnexpectedToken`
/// at EOF or an `UnclosedQuotedString` has been recorded, later ones are
/// dropped, so a truncated message yields a single EOF diagnostic no matter
/// how many enclosing constructs fail to close.
#[derive(Debug, Default)]
pub struct DiagnosticBag {
    items: Vec<Diagnostic>,
    eof_reported: bool,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic. Returns `false` when it was suppressed.
    pub fn push(&mut self, diagnostic: Diagnostic) -> bool {
        if diagnostic.kind.is_eof() {
            if self.eof_reported {
                return false;
            }
            self.eof_reported = true;
        }
        self.items.push(diagnostic);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
