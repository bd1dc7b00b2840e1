use std::io::{BufRead, Write};

use linseg_core::{ConstructionPolicy, Segment};
use log::info;

use crate::report::{describe_approximate_int, describe_intersection};
use crate::{BoundReader, ConsoleError};

/// The three segments walked through by [`run_showcase`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Showcase {
    pub first: Segment,
    pub second: Segment,
    pub third: Segment,
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            first: Segment::new(2.5, 7.8),
            second: Segment::new(4.0, 6.0),
            third: Segment::new(1.0, 10.0),
        }
    }
}

/// Read two segments, then report both, their
/// intersection and a copy of the first one.
pub fn run_interactive<R, W>(
    reader: &mut BoundReader<R, W>,
    policy: ConstructionPolicy,
) -> Result<(), ConsoleError>
where
    R: BufRead,
    W: Write,
{
    info!("reading two segments ({} policy)", policy);
    let first = reader.read_segment("first", policy)?;
    let second = reader.read_segment("second", policy)?;

    let out = reader.output();
    writeln!(out)?;
    writeln!(out, "First segment: {}", first)?;
    writeln!(out, "Second segment: {}", second)?;
    writeln!(out, "{}", describe_intersection(&first, &second))?;

    let copy = first;
    writeln!(out)?;
    writeln!(out, "Copy of the first segment: {}", copy)?;
    out.flush()?;
    Ok(())
}

/// Walk through every segment operation on `showcase`.
pub fn run_showcase<W: Write>(
    showcase: &Showcase,
    shift: i32,
    out: &mut W,
) -> Result<(), ConsoleError> {
    let Showcase {
        first: seg1,
        second: seg2,
        third: seg3,
    } = *showcase;
    info!("showcase with {}, {}, {}", seg1, seg2, seg3);

    writeln!(out, "Original segments:")?;
    writeln!(out, "seg1: {}", seg1)?;
    writeln!(out, "seg2: {}", seg2)?;
    writeln!(out, "seg3: {}", seg3)?;

    writeln!(out)?;
    writeln!(out, "seg1 with the low bound zeroed: {}", seg1.zeroed_low())?;

    writeln!(out)?;
    writeln!(out, "Conversions of seg1:")?;
    writeln!(out, "approximate int: {}", describe_approximate_int(&seg1))?;
    writeln!(out, "start: {}", seg1.to_start())?;

    writeln!(out)?;
    writeln!(out, "seg1 shifted by {}: {}", shift, seg1.shifted_by(shift))?;

    writeln!(out)?;
    writeln!(out, "Containment:")?;
    writeln!(out, "seg3 contains seg1: {}", seg3.contains(&seg1))?;
    writeln!(out, "seg1 contains seg2: {}", seg1.contains(&seg2))?;
    writeln!(out, "seg2 contains seg3: {}", seg2.contains(&seg3))?;

    writeln!(out)?;
    writeln!(out, "Intersection of seg1 and seg2:")?;
    writeln!(out, "{}", describe_intersection(&seg1, &seg2))?;
    out.flush()?;
    Ok(())
}
