//! Closed line segments on the real line.
//!
//! The central type is [`Segment`], an immutable
//! `[low, high]` pair of `f64` values with `low <= high`.

use thiserror::Error;

mod policy;
#[cfg(feature = "rand")]
mod rand_segment;
mod segment;

pub use policy::ConstructionPolicy;
#[cfg(feature = "rand")]
pub use rand_segment::SegmentsWithin;
pub use segment::Segment;

/// Errors raised when building or converting a [`Segment`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SegmentError {
    /// Strict construction received `low > high`.
    #[error("invalid range: start {low} is greater than end {high}")]
    InvalidRange {
        /// The requested start
        low: f64,
        /// The requested end
        high: f64,
    },
    /// A bound was NaN.
    #[error("segment bound is not a number")]
    NotANumber,
    /// The value does not fit in the target integer type.
    #[error("{0} cannot be represented as i32")]
    NotRepresentable(f64),
}
