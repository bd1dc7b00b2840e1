use crate::ConstructionPolicy;
use crate::SegmentError;

/// A closed interval `[low, high]` on the real line.
///
/// The bounds always satisfy `low <= high`.
/// Values are plain copies; no operation mutates a segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    low: f64,
    high: f64,
}

impl Segment {
    /// Create a new segment from two bounds given in any order.
    ///
    /// The smaller bound becomes [`Segment::low`].
    ///
    /// # Examples
    ///
    /// ```
    /// let s = linseg_core::Segment::new(7.8, 2.5);
    /// assert_eq!(s.low(), 2.5);
    /// assert_eq!(s.high(), 7.8);
    /// ```
    ///
    /// # Notes
    ///
    /// Neither bound may be NaN. Use [`Segment::try_new`] or
    /// [`Segment::with_policy`] for unvalidated input.
    pub fn new(a: f64, b: f64) -> Self {
        debug_assert!(!a.is_nan() && !b.is_nan(), "segment bounds must not be NaN");
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// Create a degenerate segment `[point, point]`.
    ///
    /// ```
    /// let s = linseg_core::Segment::point(4.0);
    /// assert_eq!(s.low(), 4.0);
    /// assert_eq!(s.high(), 4.0);
    /// assert!(s.is_degenerate());
    /// ```
    pub fn point(point: f64) -> Self {
        debug_assert!(!point.is_nan(), "segment bounds must not be NaN");
        Self {
            low: point,
            high: point,
        }
    }

    /// Create a new segment, requiring `low <= high`.
    ///
    /// # Errors
    ///
    /// * [`SegmentError::NotANumber`] if either bound is NaN
    /// * [`SegmentError::InvalidRange`] if `low > high`
    ///
    /// ```
    /// use linseg_core::{Segment, SegmentError};
    ///
    /// assert_eq!(Segment::try_new(1.0, 5.0), Ok(Segment::new(1.0, 5.0)));
    /// assert_eq!(
    ///     Segment::try_new(5.0, 1.0),
    ///     Err(SegmentError::InvalidRange { low: 5.0, high: 1.0 })
    /// );
    /// ```
    pub fn try_new(low: f64, high: f64) -> Result<Self, SegmentError> {
        if low.is_nan() || high.is_nan() {
            return Err(SegmentError::NotANumber);
        }
        if low > high {
            return Err(SegmentError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Create a new segment according to `policy`.
    ///
    /// Under [`ConstructionPolicy::Normalize`] the only failure is a NaN bound.
    pub fn with_policy(a: f64, b: f64, policy: ConstructionPolicy) -> Result<Self, SegmentError> {
        match policy {
            ConstructionPolicy::Normalize => {
                if a.is_nan() || b.is_nan() {
                    Err(SegmentError::NotANumber)
                } else {
                    Ok(Self::new(a, b))
                }
            }
            ConstructionPolicy::Strict => Self::try_new(a, b),
        }
    }

    /// Lower bound
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Distance between the bounds, `high - low`.
    pub fn length(&self) -> f64 {
        self.high - self.low
    }

    /// `true` if the segment is a single point.
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    /// The upper bound truncated toward zero.
    ///
    /// ```
    /// let s = linseg_core::Segment::new(2.5, 7.8);
    /// assert_eq!(s.to_approximate_int(), Ok(7));
    /// let s = linseg_core::Segment::new(-9.0, -2.9);
    /// assert_eq!(s.to_approximate_int(), Ok(-2));
    /// ```
    ///
    /// # Errors
    ///
    /// [`SegmentError::NotRepresentable`] when the truncated value
    /// lies outside the range of `i32`. Values are never wrapped
    /// or saturated.
    pub fn to_approximate_int(&self) -> Result<i32, SegmentError> {
        let truncated = self.high.trunc();
        if truncated >= f64::from(i32::MIN) && truncated <= f64::from(i32::MAX) {
            Ok(truncated as i32)
        } else {
            Err(SegmentError::NotRepresentable(self.high))
        }
    }

    /// The lower bound, as an explicit conversion.
    pub fn to_start(&self) -> f64 {
        self.low
    }

    /// A copy of this segment moved by `offset`.
    ///
    /// ```
    /// use linseg_core::Segment;
    /// assert_eq!(Segment::new(2.5, 7.8).shifted_by(3), Segment::new(5.5, 10.8));
    /// ```
    pub fn shifted_by(&self, offset: i32) -> Self {
        let offset = f64::from(offset);
        Self::new(self.low + offset, self.high + offset)
    }

    /// The segment from zero to [`Segment::high`].
    ///
    /// The bounds are normalized, so a segment lying entirely
    /// below zero yields `[high, 0]`.
    pub fn zeroed_low(&self) -> Self {
        Self::new(0.0, self.high)
    }

    /// Check if `other` lies entirely within `self`.
    ///
    /// Endpoints are inclusive, so every segment contains itself.
    ///
    /// ```
    /// use linseg_core::Segment;
    /// assert!(Segment::new(1.0, 10.0).contains(&Segment::new(2.0, 5.0)));
    /// assert!(!Segment::new(2.0, 5.0).contains(&Segment::new(1.0, 10.0)));
    /// ```
    pub fn contains(&self, other: &Segment) -> bool {
        self.low <= other.low && self.high >= other.high
    }

    /// The overlap of two segments.
    ///
    /// # Returns
    ///
    /// * `Some` segment shared by both inputs. Segments that only
    ///   touch give a degenerate result.
    /// * `None` if the segments are disjoint.
    ///
    /// ```
    /// use linseg_core::Segment;
    /// let a = Segment::new(2.0, 5.0);
    /// assert_eq!(a.intersect(&Segment::new(5.0, 8.0)), Some(Segment::point(5.0)));
    /// assert_eq!(a.intersect(&Segment::new(6.0, 8.0)), None);
    /// ```
    pub fn intersect(&self, other: &Segment) -> Option<Segment> {
        let low = self.low.max(other.low);
        let high = self.high.min(other.high);
        if low <= high {
            Some(Self { low, high })
        } else {
            None
        }
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::point(0.0)
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl From<f64> for Segment {
    fn from(value: f64) -> Self {
        Self::point(value)
    }
}

impl From<Segment> for (f64, f64) {
    fn from(value: Segment) -> Self {
        (value.low, value.high)
    }
}
