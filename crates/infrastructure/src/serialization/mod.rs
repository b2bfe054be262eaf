//! Deterministic JSON helpers for files written to disk.
//!
//! Output uses 2-space indentation and a trailing newline so settings files
//! diff cleanly.

mod json;

pub use json::*;
