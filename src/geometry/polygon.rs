use crate::error::{ObstacleError, Result};
use crate::math::{point_in_polygon, segments_cross, signed_area_2d, Point2};

/// A simple obstacle polygon, implicitly closed (last vertex connects to the
/// first).
///
/// Construction is unchecked; call [`Polygon::validate`] to reject input the
/// planner cannot reason about.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its boundary vertices.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon from `(x, y)` coordinate pairs.
    #[must_use]
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Returns the boundary vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the number of vertices (and edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the closed boundary edges `(v[i], v[(i + 1) % n])`.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Signed area; positive for counter-clockwise winding, negative for
    /// clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Returns `true` if `point` lies strictly inside the polygon.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point_in_polygon(point, &self.vertices)
    }

    /// Checks that the polygon is usable as an obstacle.
    ///
    /// `index` is the obstacle's position in its set and is only used to label
    /// errors.
    ///
    /// # Errors
    ///
    /// - `ObstacleError::TooFewVertices` for fewer than 3 vertices
    /// - `ObstacleError::NonFinite` for a NaN or infinite coordinate
    /// - `ObstacleError::ZeroArea` when the enclosed area is below `eps`
    /// - `ObstacleError::SelfIntersecting` when two edges that share no
    ///   endpoint touch or cross
    pub fn validate(&self, index: usize, eps: f64) -> Result<()> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(ObstacleError::TooFewVertices {
                obstacle: index,
                count: n,
            }
            .into());
        }

        if let Some(vertex) = self
            .vertices
            .iter()
            .position(|v| !v.x.is_finite() || !v.y.is_finite())
        {
            return Err(ObstacleError::NonFinite {
                obstacle: index,
                vertex,
            }
            .into());
        }

        if self.signed_area().abs() < eps {
            return Err(ObstacleError::ZeroArea { obstacle: index }.into());
        }

        let edges: Vec<(&Point2, &Point2)> = self.edges().collect();
        for (i, &(a1, a2)) in edges.iter().enumerate() {
            for (j, &(b1, b2)) in edges.iter().enumerate().skip(i + 1) {
                // Adjacent edges (and edges around a repeated vertex) meet at
                // a shared point by construction.
                if a1 == b1 || a1 == b2 || a2 == b1 || a2 == b2 {
                    continue;
                }
                if segments_cross(a1, a2, b1, b2, eps) {
                    return Err(ObstacleError::SelfIntersecting {
                        obstacle: index,
                        first: i,
                        second: j,
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}

impl From<Vec<Point2>> for Polygon {
    fn from(vertices: Vec<Point2>) -> Self {
        Self::new(vertices)
    }
}
