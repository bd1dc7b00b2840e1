//! Error handling
use linseg_core::SegmentError;
use thiserror::Error;

/// Primary error type.
///
/// Some members of this enum implement ``From``
/// in order to redirect other error types.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("{value}")]
    Io {
        /// The redirected error
        #[from]
        value: std::io::Error,
    },
    /// The input ended before a value was read.
    #[error("input ended before a number was read")]
    InputExhausted,
    /// A window that random segments cannot be drawn from.
    #[error("cannot draw segments from the window [{low}, {high}]")]
    InvalidWindow {
        /// Lower bound of the window
        low: f64,
        /// Upper bound of the window
        high: f64,
    },
    /// A redirection of a [``SegmentError``].
    #[error("{value}")]
    Segment {
        /// The redirected error
        #[from]
        value: SegmentError,
    },
}
