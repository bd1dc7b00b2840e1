//! Console front end for [`linseg_core::Segment`].
//!
//! Reads segment bounds from any [`std::io::BufRead`],
//! retrying on malformed input, and writes the
//! demonstration output to any [`std::io::Write`].

mod demo;
mod error;
mod input;
#[cfg(feature = "rand")]
mod rand_showcase;
mod report;

pub use demo::run_interactive;
pub use demo::run_showcase;
pub use demo::Showcase;
pub use error::ConsoleError;
pub use input::BoundReader;
pub use input::RETRY_PROMPT;
pub use report::describe_approximate_int;
pub use report::describe_intersection;
