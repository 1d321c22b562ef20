//! Gesture geometry
//!
//! A gesture's direction is the angle of the vector from its first
//! recorded point to its last, in screen coordinates.

use crate::capture::input::types::Point;

/// Angle in degrees of the vector `start -> end`, normalized to [0, 360)
///
/// 0° points right and angles grow clockwise on screen, since y grows
/// downward. `start == end` is not special-cased and yields 0°.
pub fn angle_between(start: Point, end: Point) -> f64 {
    let dy = f64::from(end.y) - f64::from(start.y);
    let dx = f64::from(end.x) - f64::from(start.x);
    let degrees = dy.atan2(dx).to_degrees();

    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "angle {} should be {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_cardinal_directions() {
        let origin = Point::new(0, 0);
        assert_close(angle_between(origin, Point::new(10, 0)), 0.0);
        assert_close(angle_between(origin, Point::new(0, 10)), 90.0);
        assert_close(angle_between(origin, Point::new(-10, 0)), 180.0);
        assert_close(angle_between(origin, Point::new(0, -10)), 270.0);
    }

    #[test]
    fn test_diagonal_down_right_is_45() {
        assert_close(angle_between(Point::new(100, 100), Point::new(150, 150)), 45.0);
    }

    #[test]
    fn test_zero_length_vector_is_deterministic() {
        let p = Point::new(42, 7);
        assert_eq!(angle_between(p, p), angle_between(p, p));
        assert_close(angle_between(p, p), 0.0);
    }

    proptest! {
        #[test]
        fn prop_angle_in_range(
            x1 in -10_000i32..10_000, y1 in -10_000i32..10_000,
            x2 in -10_000i32..10_000, y2 in -10_000i32..10_000,
        ) {
            let (p, q) = (Point::new(x1, y1), Point::new(x2, y2));
            prop_assume!(p != q);
            let angle = angle_between(p, q);
            prop_assert!((0.0..360.0).contains(&angle), "angle {} out of range", angle);
        }

        #[test]
        fn prop_reverse_differs_by_half_turn(
            x1 in -10_000i32..10_000, y1 in -10_000i32..10_000,
            x2 in -10_000i32..10_000, y2 in -10_000i32..10_000,
        ) {
            let (p, q) = (Point::new(x1, y1), Point::new(x2, y2));
            prop_assume!(p != q);
            let diff = (angle_between(p, q) - angle_between(q, p)).rem_euclid(360.0);
            prop_assert!((diff - 180.0).abs() < 1e-9, "difference was {}", diff);
        }
    }
}
