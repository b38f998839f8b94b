use tracing::debug;

use super::{VertexTable, VisibilityGraph};
use crate::config::PlannerConfig;
use crate::geometry::Polygon;
use crate::math::{distance, segments_cross, Point2};

/// Builds the visibility graph over `{start, goal} ∪ obstacle vertices`.
///
/// A pair of vertices is connected when it is a boundary edge of an obstacle,
/// or when no obstacle edge blocks the straight segment between them. An
/// obstacle edge sharing an endpoint location with the segment never blocks
/// it; any other touch or crossing does.
///
/// Θ(V²·E) in the number of vertices V and obstacle edges E.
#[derive(Debug)]
pub struct BuildVisibilityGraph<'a> {
    obstacles: &'a [Polygon],
    start: Point2,
    goal: Point2,
    config: PlannerConfig,
}

impl<'a> BuildVisibilityGraph<'a> {
    /// Creates a new graph construction with the default configuration.
    #[must_use]
    pub fn new(obstacles: &'a [Polygon], start: Point2, goal: Point2) -> Self {
        Self {
            obstacles,
            start,
            goal,
            config: PlannerConfig::default(),
        }
    }

    /// Uses the tolerance, interior-diagonal and parallel settings of `config`.
    #[must_use]
    pub fn with_config(mut self, config: &PlannerConfig) -> Self {
        self.config = *config;
        self
    }

    /// Executes the construction.
    #[must_use]
    pub fn execute(&self) -> VisibilityGraph {
        let table = VertexTable::new(self.obstacles, self.start, self.goal);
        let rows = self.upper_rows(&table);

        let mut graph = VisibilityGraph::with_points(table.points().to_vec());
        for (i, row) in rows.into_iter().enumerate() {
            for (j, weight) in row {
                graph.add_edge(i, j, weight);
            }
        }

        debug!(
            vertices = graph.len(),
            obstacle_edges = table.boundary_edge_count(),
            edges = graph.edge_count(),
            "visibility graph built"
        );
        graph
    }

    /// For every vertex `i`, the visible vertices `j > i` with their distance.
    fn upper_rows(&self, table: &VertexTable) -> Vec<Vec<(usize, f64)>> {
        let n = table.len();

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                use rayon::prelude::*;
                return (0..n)
                    .into_par_iter()
                    .map(|i| self.upper_row(table, i))
                    .collect();
            }
        }

        (0..n).map(|i| self.upper_row(table, i)).collect()
    }

    fn upper_row(&self, table: &VertexTable, i: usize) -> Vec<(usize, f64)> {
        ((i + 1)..table.len())
            .filter(|&j| self.can_see(table, i, j))
            .map(|j| (j, distance(table.point(i), table.point(j))))
            .collect()
    }

    fn can_see(&self, table: &VertexTable, i: usize, j: usize) -> bool {
        if table.is_boundary_edge(i, j) {
            return true;
        }

        let (a, b) = (table.point(i), table.point(j));
        let eps = self.config.tolerance;
        for (e1, e2) in table.obstacle_edges() {
            if a == e1 || a == e2 || b == e1 || b == e2 {
                continue;
            }
            if segments_cross(a, b, e1, e2, eps) {
                return false;
            }
        }

        if self.config.block_interior_diagonals {
            if let (Some(oi), Some(oj)) = (table.owner(i), table.owner(j)) {
                if oi == oj {
                    let mid = nalgebra::center(a, b);
                    return !self.obstacles[oi].contains(&mid);
                }
            }
        }

        true
    }
}

/// Builds the visibility graph with the default configuration.
#[must_use]
pub fn build_visibility_graph(
    obstacles: &[Polygon],
    start: Point2,
    goal: Point2,
) -> VisibilityGraph {
    BuildVisibilityGraph::new(obstacles, start, goal).execute()
}
