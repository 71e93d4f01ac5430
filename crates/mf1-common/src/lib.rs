//! Common data structures for the MF1 message parser.
//!
//! This crate provides the source location types used across the pipeline:
//! - `BytePos`: an offset into the message source
//! - `Span`: a half-open range of offsets

mod span;

pub use span::{BytePos, Span};
