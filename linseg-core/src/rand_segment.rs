use rand::distributions::{Distribution, Uniform};
use rand::prelude::Rng;

use crate::Segment;

/// Samples segments lying inside a fixed window.
///
/// Both endpoints are drawn uniformly from the window
/// (bounds included) and then ordered.
///
/// ```
/// use linseg_core::{Segment, SegmentsWithin};
/// use rand::{Rng, SeedableRng};
///
/// let window = Segment::new(-10.0, 10.0);
/// let dist = SegmentsWithin::new(window).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let s: Segment = rng.sample(dist);
/// assert!(window.contains(&s));
/// ```
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct SegmentsWithin(Uniform<f64>);

impl SegmentsWithin {
    /// # Returns
    ///
    /// * `Some` if the window has finite bounds
    /// * `None` if a bound is infinite or the window is wider
    ///   than half the range of `f64`
    pub fn new(window: Segment) -> Option<Self> {
        if !(window.length() * 2.0).is_finite() {
            return None;
        }
        Some(Self(Uniform::new_inclusive(window.low(), window.high())))
    }
}

impl Distribution<Segment> for SegmentsWithin {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Segment {
        Segment::new(self.0.sample(rng), self.0.sample(rng))
    }
}
