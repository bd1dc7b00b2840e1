#![warn(missing_docs)]

//! Closed one-dimensional line segments.
//!
//! # Overview
//!
//! A [`Segment`] is an immutable `[low, high]` pair of `f64`
//! values. Segments can be shifted, intersected and tested
//! for containment.
//!
//! The console front end lives in [`linseg_console`] and is
//! driven by the `linseg` binary.

pub use linseg_console::*;
pub use linseg_core::*;

pub mod prelude;

/// Get the linseg version number.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
