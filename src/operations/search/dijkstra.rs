//! Dijkstra's shortest path algorithm over dense adjacency rows.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

/// State for Dijkstra's algorithm priority queue.
#[derive(Clone, Copy, Debug)]
pub struct DijkstraState {
    /// Tentative path cost.
    pub cost: f64,
    /// Node index.
    pub node: usize,
}

impl PartialEq for DijkstraState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraState {}

impl Ord for DijkstraState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for DijkstraState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of a Dijkstra search.
#[derive(Clone, Debug, PartialEq)]
pub struct DijkstraResult {
    /// Node indices from source to target, both inclusive.
    pub path: Vec<usize>,
    /// Total path distance.
    pub distance: f64,
}

/// Finds the shortest path from `source` to `target`.
///
/// `edges[i]` lists `(neighbor, weight)` pairs; weights must be non-negative.
/// The search stops as soon as `target` is settled.
///
/// Returns `None` if `target` is unreachable or either index is out of range.
#[must_use]
pub fn dijkstra(
    edges: &[Vec<(usize, f64)>],
    source: usize,
    target: usize,
) -> Option<DijkstraResult> {
    let n = edges.len();
    if source >= n || target >= n {
        return None;
    }

    if source == target {
        return Some(DijkstraResult {
            path: vec![source],
            distance: 0.0,
        });
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    dist[source] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(DijkstraState {
        cost: 0.0,
        node: source,
    });

    let mut settled = 0usize;
    while let Some(DijkstraState { cost, node }) = heap.pop() {
        // Stale entry: a shorter route was already found.
        if cost > dist[node] {
            continue;
        }
        settled += 1;

        if node == target {
            break;
        }

        for &(neighbor, weight) in &edges[node] {
            let candidate = cost + weight;
            if candidate < dist[neighbor] {
                dist[neighbor] = candidate;
                prev[neighbor] = Some(node);
                heap.push(DijkstraState {
                    cost: candidate,
                    node: neighbor,
                });
            }
        }
    }

    trace!(settled, reached = dist[target].is_finite(), "dijkstra finished");

    if dist[target].is_infinite() {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(p) = prev[current] {
        path.push(p);
        current = p;
    }
    path.reverse();

    Some(DijkstraResult {
        path,
        distance: dist[target],
    })
}
