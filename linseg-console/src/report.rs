use linseg_core::Segment;

/// One sentence describing the overlap of two segments.
///
/// ```
/// use linseg_console::describe_intersection;
/// use linseg_core::Segment;
///
/// let text = describe_intersection(&Segment::new(1., 2.), &Segment::new(3., 4.));
/// assert_eq!(text, "The segments do not intersect.");
/// ```
pub fn describe_intersection(first: &Segment, second: &Segment) -> String {
    match first.intersect(second) {
        Some(overlap) if overlap.is_degenerate() => {
            format!("The segments touch at a single point: {}", overlap)
        }
        Some(overlap) => format!("The segments intersect. Intersection: {}", overlap),
        None => "The segments do not intersect.".to_string(),
    }
}

pub fn describe_approximate_int(segment: &Segment) -> String {
    match segment.to_approximate_int() {
        Ok(value) => value.to_string(),
        Err(e) => format!("unavailable ({})", e),
    }
}
