pub mod distance_2d;
pub mod intersect_2d;
pub mod orientation;
pub mod polygon_2d;

pub use distance_2d::point_to_segment_dist;
pub use intersect_2d::{line_line_intersect_2d, point_at, segments_cross};
pub use orientation::{is_between, turn, Turn};
pub use polygon_2d::{edge_normal, point_in_polygon, signed_area_2d};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default absolute tolerance for orientation, containment and parallel tests.
///
/// Not scale-relative: near-collinear triples at large coordinate magnitudes
/// can be misclassified. Override through
/// [`PlannerConfig::with_tolerance`](crate::config::PlannerConfig::with_tolerance).
pub const TOLERANCE: f64 = 1e-10;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}
