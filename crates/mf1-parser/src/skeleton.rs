//! ICU date skeletons.
//!
//! A skeleton such as `yMMMd` is read as runs of one repeated letter; each
//! run is looked up in the field table of `mf1_syntax` by letter and length.

use mf1_common::Span;
use mf1_diagnostic::{Diagnostic, DiagnosticKind};
use mf1_syntax::{DateTimeFormatOptions, skeleton_symbol};

/// A run of one repeated letter, with byte offsets into the skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonRun {
    pub letter: char,
    pub count: usize,
    pub start: usize,
    pub end: usize,
}

/// Run-length encode a skeleton.
pub fn skeleton_runs(skeleton: &str) -> Vec<SkeletonRun> {
    let mut runs: Vec<SkeletonRun> = Vec::new();
    for (index, ch) in skeleton.char_indices() {
        let end = index + ch.len_utf8();
        match runs.last_mut() {
            Some(run) if run.letter == ch => {
                run.count += 1;
                run.end = end;
            }
            _ => runs.push(SkeletonRun {
                letter: ch,
                count: 1,
                start: index,
                end,
            }),
        }
    }
    runs
}

/// Turn a skeleton into date/time options.
///
/// `span` locates the skeleton in the message. Unknown letters and lengths
/// are reported and skipped; a skeleton that sets no date or time field at
/// all is reported as insufficient. Both are soft.
pub fn parse_date_skeleton(skeleton: &str, span: Span) -> (DateTimeFormatOptions, Vec<Diagnostic>) {
    let offset = usize::from(span.start);
    let mut options = DateTimeFormatOptions::default();
    let mut diagnostics = Vec::new();

    for run in skeleton_runs(skeleton) {
        let mapped = skeleton_symbol(run.letter)
            .and_then(|symbol| symbol.value(run.count).map(|value| (symbol, value)));
        match mapped {
            Some((symbol, value)) => {
                options.set(symbol.field, value);
                if symbol.hour_cycle.is_some() {
                    options.hour_cycle = symbol.hour_cycle;
                }
            }
            None => diagnostics.push(Diagnostic::new(
                DiagnosticKind::InvalidDateSkeleton {
                    component: skeleton[run.start..run.end].to_string(),
                },
                Span::from_usize(run.start, run.end).shift(offset),
            )),
        }
    }

    if !options.has_required_field() {
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::InsufficientFieldsInDateSkeleton,
            span,
        ));
    }

    (options, diagnostics)
}
