//! Syntax tree for MF1 messages.
//!
//! This crate defines the immutable tree the parser produces, the number and
//! date/time option records attached to typed arguments, the ICU date
//! skeleton field table, and a printer back to MF1 source.

mod node;
mod options;
mod print;

pub use node::{ArgName, Node, NodeKind, PluralBranch, Selector};
pub use options::{
    DateField, DateTimeFormatOptions, DateTimeStyle, FieldStyle, HourCycle, NumberFormatOptions,
    NumberStyle, SKELETON_SYMBOLS, SkeletonSymbol, SkeletonValue, skeleton_symbol,
};
pub use print::{PrintError, to_source};
