use rand::distributions::Distribution;
use rand::prelude::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use linseg_core::{ConstructionPolicy, Segment, SegmentsWithin};

use crate::{ConsoleError, Showcase};

impl Showcase {
    /// Draw all three segments from `window`.
    ///
    /// # Returns
    ///
    /// * `None` if [`SegmentsWithin`] cannot sample `window`
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, window: Segment) -> Option<Self> {
        let dist = SegmentsWithin::new(window)?;
        Some(Self {
            first: dist.sample(rng),
            second: dist.sample(rng),
            third: dist.sample(rng),
        })
    }

    /// Draw a showcase from a window given as raw bounds,
    /// using a [`StdRng`] seeded with `seed`.
    ///
    /// # Errors
    ///
    /// * [`ConsoleError::Segment`] if the bounds do not form a segment under `policy`
    /// * [`ConsoleError::InvalidWindow`] if the window cannot be sampled
    pub fn seeded(
        seed: u64,
        bounds: (f64, f64),
        policy: ConstructionPolicy,
    ) -> Result<Self, ConsoleError> {
        let window = Segment::with_policy(bounds.0, bounds.1, policy)?;
        let mut rng = StdRng::seed_from_u64(seed);
        Self::sample(&mut rng, window).ok_or(ConsoleError::InvalidWindow {
            low: window.low(),
            high: window.high(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linseg_core::SegmentError;

    #[test]
    fn test_seeded_is_reproducible() {
        let a = Showcase::seeded(101, (-10.0, 10.0), ConstructionPolicy::Normalize).unwrap();
        let b = Showcase::seeded(101, (10.0, -10.0), ConstructionPolicy::Normalize).unwrap();
        assert_eq!(a, b);
        let window = Segment::new(-10.0, 10.0);
        for s in [a.first, a.second, a.third] {
            assert!(window.contains(&s));
        }
    }

    #[test]
    fn test_infinite_window() {
        assert!(matches!(
            Showcase::seeded(0, (0.0, f64::INFINITY), ConstructionPolicy::Normalize),
            Err(ConsoleError::InvalidWindow { .. })
        ));
        assert!(matches!(
            Showcase::seeded(0, (f64::MIN, f64::MAX), ConstructionPolicy::Normalize),
            Err(ConsoleError::InvalidWindow { .. })
        ));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Showcase::sample(&mut rng, Segment::new(f64::NEG_INFINITY, 0.0)).is_none());
    }

    #[test]
    fn test_invalid_window_bounds() {
        assert!(matches!(
            Showcase::seeded(0, (f64::NAN, 1.0), ConstructionPolicy::Normalize),
            Err(ConsoleError::Segment {
                value: SegmentError::NotANumber
            })
        ));
        assert!(matches!(
            Showcase::seeded(0, (5.0, 1.0), ConstructionPolicy::Strict),
            Err(ConsoleError::Segment {
                value: SegmentError::InvalidRange { .. }
            })
        ));
    }
}
