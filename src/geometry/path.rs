use crate::math::{distance, Point2};

/// Outcome of a planning query: waypoints from start to goal (inclusive) and
/// their total Euclidean length.
///
/// An unreachable goal is a regular result, not an error: no waypoints and an
/// infinite length. A query whose start equals its goal yields the single
/// start point and length zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Waypoints from start to goal.
    pub points: Vec<Point2>,
    /// Total Euclidean length; `f64::INFINITY` when unreachable.
    pub length: f64,
}

impl PathResult {
    /// Creates a result from waypoints and their length.
    #[must_use]
    pub fn new(points: Vec<Point2>, length: f64) -> Self {
        Self { points, length }
    }

    /// The "no path" result.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            points: Vec::new(),
            length: f64::INFINITY,
        }
    }

    /// The zero-length path of a query whose start is its goal.
    #[must_use]
    pub fn stationary(point: Point2) -> Self {
        Self {
            points: vec![point],
            length: 0.0,
        }
    }

    /// Returns `true` if the goal was reached.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        !self.points.is_empty()
    }

    /// Sum of segment lengths between consecutive waypoints.
    ///
    /// Equal to `length` up to rounding for any planner-produced result.
    #[must_use]
    pub fn polyline_length(&self) -> f64 {
        if self.points.is_empty() {
            return f64::INFINITY;
        }
        self.points
            .windows(2)
            .map(|w| distance(&w[0], &w[1]))
            .sum()
    }
}
