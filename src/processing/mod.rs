//! Gesture processing
//!
//! Pure algorithms applied to a captured gesture: the trajectory buffer,
//! the angle of its net movement, and the compass classification of that angle.

pub mod classifier;
pub mod geometry;
pub mod trajectory;

pub use classifier::{classify, Direction, ToleranceWindow};
pub use geometry::angle_between;
pub use trajectory::Trajectory;
