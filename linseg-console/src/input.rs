use std::collections::VecDeque;
use std::io::{BufRead, Write};

use linseg_core::{ConstructionPolicy, Segment, SegmentError};
use log::{debug, warn};

use crate::ConsoleError;

/// Printed after every rejected token of input.
pub const RETRY_PROMPT: &str = "Invalid input. Please enter a number: ";

/// Prompts for segment bounds, retrying until a
/// finite number is entered.
///
/// Input is split into whitespace-separated tokens, so
/// several bounds may share a line. A rejected token
/// discards the rest of its line.
#[derive(Debug)]
pub struct BoundReader<R, W> {
    input: R,
    output: W,
    line: String,
    pending: VecDeque<String>,
}

impl<R, W> BoundReader<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read a single bound.
    ///
    /// # Errors
    ///
    /// * [`ConsoleError::InputExhausted`] if the input ends first
    /// * [`ConsoleError::Io`] if reading or writing fails
    pub fn read_bound(&mut self, prompt: &str) -> Result<f64, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        loop {
            let token = self.next_token()?.ok_or(ConsoleError::InputExhausted)?;
            match parse_bound(&token) {
                Some(value) => {
                    debug!("read bound {}", value);
                    return Ok(value);
                }
                None => {
                    warn!("rejected input {:?}", token);
                    self.pending.clear();
                    write!(self.output, "{}", RETRY_PROMPT)?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// The next whitespace-separated token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<String>, ConsoleError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
    }

    /// Read the start and end of a segment labelled `label`.
    ///
    /// Under [`ConstructionPolicy::Strict`] an out-of-order pair
    /// is reported and both bounds are requested again.
    pub fn read_segment(
        &mut self,
        label: &str,
        policy: ConstructionPolicy,
    ) -> Result<Segment, ConsoleError> {
        writeln!(self.output, "Let's create the {} segment:", label)?;
        loop {
            let start = self.read_bound("Enter the start coordinate: ")?;
            let end = self.read_bound("Enter the end coordinate: ")?;
            match Segment::with_policy(start, end, policy) {
                Ok(segment) => return Ok(segment),
                Err(e @ SegmentError::InvalidRange { .. }) => {
                    warn!("{} segment rejected: {}", label, e);
                    writeln!(self.output, "Error: {}. Please try again.", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn parse_bound(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
