//! Trajectory buffer for the gesture being drawn
//!
//! Not synchronized. The interceptor that owns it lives on the hook thread
//! and is the only writer.

use crate::capture::input::types::Point;

/// Ordered points of the in-progress gesture, oldest first
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    points: Vec<Point>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for a typical gesture
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Drop every recorded point, keeping the allocation
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn snapshot(&self) -> &[Point] {
        &self.points
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last recorded points, if any
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        Some((*self.points.first()?, *self.points.last()?))
    }
}
