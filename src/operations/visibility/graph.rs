use crate::math::Point2;

/// Weighted visibility graph over a query's vertex table.
///
/// Dense adjacency: one neighbor list per vertex index, each entry
/// `(neighbor, euclidean_distance)`. Every edge is stored in both directions
/// with the same weight.
#[derive(Debug, Clone, Default)]
pub struct VisibilityGraph {
    points: Vec<Point2>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl VisibilityGraph {
    /// Index of the start vertex.
    pub const START: usize = 0;
    /// Index of the goal vertex.
    pub const GOAL: usize = 1;

    /// Creates a graph with no edges over `points`.
    #[must_use]
    pub fn with_points(points: Vec<Point2>) -> Self {
        let adjacency = vec![Vec::new(); points.len()];
        Self { points, adjacency }
    }

    /// Inserts the undirected edge `(i, j)`.
    pub(crate) fn add_edge(&mut self, i: usize, j: usize, weight: f64) {
        self.adjacency[i].push((j, weight));
        self.adjacency[j].push((i, weight));
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at vertex `index`.
    #[must_use]
    pub fn point(&self, index: usize) -> &Point2 {
        &self.points[index]
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Neighbors of vertex `index` with edge weights.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[(usize, f64)] {
        &self.adjacency[index]
    }

    /// Raw adjacency rows, as consumed by [`dijkstra`](crate::operations::search::dijkstra).
    #[must_use]
    pub fn adjacency(&self) -> &[Vec<(usize, f64)>] {
        &self.adjacency
    }

    /// Weight of edge `(i, j)`, if present.
    #[must_use]
    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        self.adjacency
            .get(i)?
            .iter()
            .find(|&&(n, _)| n == j)
            .map(|&(_, w)| w)
    }

    #[must_use]
    pub fn contains_edge(&self, i: usize, j: usize) -> bool {
        self.weight(i, j).is_some()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Iterates over each undirected edge once as `(i, j, weight)` with `i < j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .filter(move |&&(j, _)| i < j)
                .map(move |&(j, w)| (i, j, w))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn path_graph() -> VisibilityGraph {
        let mut graph = VisibilityGraph::with_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 0.0),
        ]);
        graph.add_edge(0, 2, 1.0);
        graph.add_edge(2, 1, 1.0);
        graph
    }

    #[test]
    fn edges_are_stored_both_ways() {
        let graph = path_graph();
        assert_eq!(graph.weight(0, 2), Some(1.0));
        assert_eq!(graph.weight(2, 0), Some(1.0));
        assert!(!graph.contains_edge(0, 1));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn edges_iterator_lists_each_edge_once() {
        let graph = path_graph();
        let mut edges: Vec<_> = graph.edges().map(|(i, j, _)| (i, j)).collect();
        edges.sort_unstable();
        assert_eq!(edges, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn out_of_range_weight_is_none() {
        assert_eq!(path_graph().weight(9, 0), None);
    }
}
