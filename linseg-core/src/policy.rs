/// How out-of-order bounds are treated when building a
/// [`Segment`](crate::Segment).
///
/// # Examples
///
/// ```
/// use linseg_core::{ConstructionPolicy, Segment, SegmentError};
///
/// let s = Segment::with_policy(5.0, 1.0, ConstructionPolicy::Normalize).unwrap();
/// assert_eq!(s, Segment::new(1.0, 5.0));
///
/// let e = Segment::with_policy(5.0, 1.0, ConstructionPolicy::Strict);
/// assert!(matches!(e, Err(SegmentError::InvalidRange { .. })));
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, std::hash::Hash)]
#[non_exhaustive]
pub enum ConstructionPolicy {
    /// Swap the bounds so that `low <= high`.
    #[default]
    Normalize,
    /// Reject `low > high`.
    Strict,
}

impl std::fmt::Display for ConstructionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ConstructionPolicy::Normalize => write!(f, "normalize"),
            ConstructionPolicy::Strict => write!(f, "strict"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normalize() {
        assert_eq!(ConstructionPolicy::default(), ConstructionPolicy::Normalize);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConstructionPolicy::Normalize.to_string(), "normalize");
        assert_eq!(ConstructionPolicy::Strict.to_string(), "strict");
    }
}
