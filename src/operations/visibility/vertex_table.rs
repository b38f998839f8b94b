use std::collections::HashSet;

use crate::geometry::Polygon;
use crate::math::Point2;

/// Query-scoped vertex indexing.
///
/// Index 0 is the start, index 1 the goal, followed by every obstacle vertex
/// in obstacle order and boundary order. Coincident vertices keep separate
/// indices.
#[derive(Debug, Clone)]
pub struct VertexTable {
    points: Vec<Point2>,
    /// Obstacle owning each vertex; `None` for start and goal.
    owners: Vec<Option<usize>>,
    /// Boundary edges as `(min, max)` index pairs.
    boundary: HashSet<(usize, usize)>,
    /// Boundary edges as point pairs, in obstacle order.
    obstacle_edges: Vec<(Point2, Point2)>,
}

impl VertexTable {
    /// Indexes `start`, `goal` and every obstacle vertex.
    #[must_use]
    pub fn new(obstacles: &[Polygon], start: Point2, goal: Point2) -> Self {
        let total: usize = obstacles.iter().map(Polygon::len).sum();
        let mut points = Vec::with_capacity(total + 2);
        let mut owners = Vec::with_capacity(total + 2);
        let mut boundary = HashSet::with_capacity(total);
        let mut obstacle_edges = Vec::with_capacity(total);

        points.extend([start, goal]);
        owners.extend([None, None]);

        for (k, obstacle) in obstacles.iter().enumerate() {
            let base = points.len();
            let n = obstacle.len();
            points.extend_from_slice(obstacle.vertices());
            owners.extend(std::iter::repeat(Some(k)).take(n));
            for i in 0..n {
                let (a, b) = (base + i, base + (i + 1) % n);
                boundary.insert((a.min(b), a.max(b)));
            }
            obstacle_edges.extend(obstacle.edges().map(|(a, b)| (*a, *b)));
        }

        Self {
            points,
            owners,
            boundary,
            obstacle_edges,
        }
    }

    /// Number of indexed vertices, start and goal included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: start and goal are always indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`.
    #[must_use]
    pub fn point(&self, index: usize) -> &Point2 {
        &self.points[index]
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the obstacle that owns the vertex at `index`.
    #[must_use]
    pub fn owner(&self, index: usize) -> Option<usize> {
        self.owners[index]
    }

    /// Returns `true` if `(i, j)` is a boundary edge of some obstacle.
    #[must_use]
    pub fn is_boundary_edge(&self, i: usize, j: usize) -> bool {
        self.boundary.contains(&(i.min(j), i.max(j)))
    }

    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.boundary.len()
    }

    /// Every obstacle boundary edge as a point pair.
    #[must_use]
    pub fn obstacle_edges(&self) -> &[(Point2, Point2)] {
        &self.obstacle_edges
    }
}
