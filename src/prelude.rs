//! The crate prelude
//!
//! # Example
//! ```
//! use linseg::prelude::*;
//!
//! let s = Segment::new(1.0, 10.0);
//! assert!(s.contains(&Segment::point(4.0)));
//! ```

pub use linseg_console::{BoundReader, ConsoleError, Showcase};
pub use linseg_core::{ConstructionPolicy, Segment, SegmentError, SegmentsWithin};
