use linseg_core::Segment;
use proptest::prelude::*;

fn bound() -> impl Strategy<Value = f64> {
    -1e6..1e6f64
}

fn segment() -> impl Strategy<Value = Segment> {
    (bound(), bound()).prop_map(|(a, b)| Segment::new(a, b))
}

proptest! {
    #[test]
    fn test_bounds_are_ordered(a in bound(), b in bound()) {
        let s = Segment::new(a, b);
        prop_assert!(s.low() <= s.high());
        prop_assert_eq!(s, Segment::new(b, a));
    }
}

proptest! {
    #[test]
    fn test_contains_is_reflexive(s in segment()) {
        prop_assert!(s.contains(&s));
    }
}

proptest! {
    #[test]
    fn test_contains_is_transitive(a in segment(), b in segment(), c in segment()) {
        if a.contains(&b) && b.contains(&c) {
            prop_assert!(a.contains(&c));
        }
    }
}

proptest! {
    #[test]
    fn test_intersect_is_symmetric(s1 in segment(), s2 in segment()) {
        prop_assert_eq!(s1.intersect(&s2), s2.intersect(&s1));
    }
}

proptest! {
    #[test]
    fn test_intersection_is_enclosed(s1 in segment(), s2 in segment()) {
        if let Some(r) = s1.intersect(&s2) {
            prop_assert!(s1.contains(&r));
            prop_assert!(s2.contains(&r));
        } else {
            prop_assert!(s1.high() < s2.low() || s2.high() < s1.low());
        }
    }
}

proptest! {
    #[test]
    fn test_contained_segment_is_its_own_intersection(s1 in segment(), s2 in segment()) {
        if s1.contains(&s2) {
            prop_assert_eq!(s1.intersect(&s2), Some(s2));
        }
    }
}

proptest! {
    #[test]
    fn test_shift_keeps_length(s in segment(), offset in -1000..1000i32) {
        let shifted = s.shifted_by(offset);
        prop_assert!(shifted.low() <= shifted.high());
        prop_assert_eq!(shifted.low(), s.low() + f64::from(offset));
        prop_assert_eq!(shifted.high(), s.high() + f64::from(offset));
    }
}

proptest! {
    #[test]
    fn test_zeroed_low_keeps_high_or_zero(s in segment()) {
        let z = s.zeroed_low();
        prop_assert!(z.low() <= z.high());
        prop_assert!(z.low() == 0.0 || z.high() == 0.0);
        prop_assert!(z.low() == s.high() || z.high() == s.high());
    }
}

proptest! {
    #[test]
    fn test_approximate_int_truncates(s in segment()) {
        let i = s.to_approximate_int().unwrap();
        prop_assert!((f64::from(i) - s.high()).abs() < 1.0);
        prop_assert!(f64::from(i).abs() <= s.high().abs());
    }
}

#[test]
fn test_touching_segments_intersect_at_a_point() {
    let r = Segment::new(2., 5.).intersect(&Segment::new(5., 8.));
    assert_eq!(r, Some(Segment::new(5., 5.)));
    assert!(r.unwrap().is_degenerate());
}

#[test]
fn test_disjoint_segments() {
    assert!(Segment::new(1., 2.).intersect(&Segment::new(3., 4.)).is_none());
}

#[cfg(feature = "rand")]
mod test_rand_traits {
    use linseg_core::{Segment, SegmentsWithin};
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};

    proptest! {
        #[test]
        fn test_samples_within_window(a in -1e6..1e6f64, b in -1e6..1e6f64,
                                      seed in 0..u64::MAX) {
            let window = Segment::new(a, b);
            let dist = SegmentsWithin::new(window).unwrap();
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            for _ in 0..100 {
                let s = rng.sample(dist);
                prop_assert!(window.contains(&s));
            }
        }
    }
}
