//! Direction classification
//!
//! Maps a gesture angle onto one of eight compass directions. Each
//! direction accepts angles strictly within `±tolerance` of its center;
//! angles in the gaps between windows classify as [`Direction::Unknown`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Net direction of a gesture in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Right,
    RightDown,
    Down,
    LeftDown,
    Left,
    LeftUp,
    Up,
    RightUp,
    Unknown,
}

impl Direction {
    /// Candidates in match order, each with its center angle
    pub const COMPASS: [(Direction, f64); 8] = [
        (Direction::Right, 0.0),
        (Direction::RightDown, 45.0),
        (Direction::Down, 90.0),
        (Direction::LeftDown, 135.0),
        (Direction::Left, 180.0),
        (Direction::LeftUp, 225.0),
        (Direction::Up, 270.0),
        (Direction::RightUp, 315.0),
    ];

    /// Center angle of the direction's window, `None` for `Unknown`
    pub fn center(self) -> Option<f64> {
        Self::COMPASS
            .iter()
            .find(|(direction, _)| *direction == self)
            .map(|(_, angle)| *angle)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::RightDown => "right-down",
            Direction::Down => "down",
            Direction::LeftDown => "left-down",
            Direction::Left => "left",
            Direction::LeftUp => "left-up",
            Direction::Up => "up",
            Direction::RightUp => "right-up",
            Direction::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Half-width in degrees of the window accepted around each compass angle
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ToleranceWindow(f64);

impl ToleranceWindow {
    pub const DEFAULT_DEGREES: f64 = 15.0;

    pub fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    fn contains(self, center: f64, degrees: f64) -> bool {
        if center == 0.0 {
            // RIGHT straddles the 0°/360° seam
            degrees > 360.0 - self.0 || degrees < self.0
        } else {
            degrees > center - self.0 && degrees < center + self.0
        }
    }
}

impl Default for ToleranceWindow {
    fn default() -> Self {
        Self(Self::DEFAULT_DEGREES)
    }
}

/// Classify an angle in [0, 360) into a compass direction
///
/// Candidates are tested in compass order and the first match wins, so
/// overlapping windows (tolerance above 22.5°) resolve toward the earlier
/// direction.
pub fn classify(degrees: f64, tolerance: ToleranceWindow) -> Direction {
    Direction::COMPASS
        .iter()
        .find(|(_, center)| tolerance.contains(*center, degrees))
        .map(|(direction, _)| *direction)
        .unwrap_or(Direction::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classify_default(degrees: f64) -> Direction {
        classify(degrees, ToleranceWindow::default())
    }

    #[test]
    fn test_compass_centers() {
        for (direction, center) in Direction::COMPASS {
            assert_eq!(classify_default(center), direction, "center {}", center);
        }
    }

    #[test]
    fn test_reference_angles() {
        assert_eq!(classify_default(0.0), Direction::Right);
        assert_eq!(classify_default(44.0), Direction::RightDown);
        assert_eq!(classify_default(90.0), Direction::Down);
        assert_eq!(classify_default(359.0), Direction::Right);
        assert_eq!(classify_default(22.5), Direction::Unknown);
    }

    #[test]
    fn test_window_edges_are_exclusive() {
        assert_eq!(classify_default(15.0), Direction::Unknown);
        assert_eq!(classify_default(345.0), Direction::Unknown);
        assert_eq!(classify_default(30.0), Direction::Unknown);
        assert_eq!(classify_default(60.0), Direction::Unknown);
        assert_eq!(classify_default(14.999), Direction::Right);
        assert_eq!(classify_default(345.001), Direction::Right);
    }

    #[test]
    fn test_narrow_window_leaves_gaps() {
        let narrow = ToleranceWindow::new(7.5);
        assert_eq!(classify(180.0, narrow), Direction::Left);
        assert_eq!(classify(190.0, narrow), Direction::Unknown);
        assert_eq!(classify(276.0, narrow), Direction::Up);
    }

    #[test]
    fn test_overlapping_windows_prefer_compass_order() {
        let wide = ToleranceWindow::new(40.0);
        // 30° lies in both RIGHT (<40) and RIGHT_DOWN (>5)
        assert_eq!(classify(30.0, wide), Direction::Right);
        // 100° lies in both DOWN and LEFT_DOWN
        assert_eq!(classify(100.0, wide), Direction::Down);
    }

    #[test]
    fn test_full_coverage_at_half_spacing() {
        let touching = ToleranceWindow::new(22.5);
        assert_eq!(classify(22.5, touching), Direction::Unknown);
        assert_eq!(classify(22.4, touching), Direction::Right);
        assert_eq!(classify(22.6, touching), Direction::RightDown);
    }

    #[test]
    fn test_center_lookup() {
        assert_eq!(Direction::LeftUp.center(), Some(225.0));
        assert_eq!(Direction::Unknown.center(), None);
    }

    proptest! {
        #[test]
        fn prop_classify_is_total_and_consistent(degrees in 0.0f64..360.0, tol in 0.1f64..=22.5) {
            let tolerance = ToleranceWindow::new(tol);
            let direction = classify(degrees, tolerance);
            match direction.center() {
                Some(center) => {
                    let distance = (degrees - center).abs().min(360.0 - (degrees - center).abs());
                    prop_assert!(distance < tol + 1e-9, "{} classified as {} at tolerance {}", degrees, direction, tol);
                }
                None => {
                    for (_, center) in Direction::COMPASS {
                        let distance = (degrees - center).abs().min(360.0 - (degrees - center).abs());
                        prop_assert!(distance >= tol - 1e-9, "{} should match center {}", degrees, center);
                    }
                }
            }
        }
    }
}
