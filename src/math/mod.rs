pub mod distance_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Squared length at or below which a segment is treated as a single point.
pub const DEGENERATE_EPSILON: f64 = 1e-9;

/// Per-axis movement a marker must exceed before it is replaced.
pub const CHANGE_TOLERANCE: f64 = 1e-4;
