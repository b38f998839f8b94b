//! Visibility graph construction.
//!
//! 1. **Indexing**: start, goal, then every obstacle vertex ([`VertexTable`])
//! 2. **Edge construction**: boundary edges plus every unblocked sightline
//!    ([`BuildVisibilityGraph`])
//! 3. **Output**: symmetric dense adjacency ([`VisibilityGraph`])

mod build;
mod graph;
mod vertex_table;

pub use build::{build_visibility_graph, BuildVisibilityGraph};
pub use graph::VisibilityGraph;
pub use vertex_table::VertexTable;
