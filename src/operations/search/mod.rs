mod dijkstra;

pub use dijkstra::{dijkstra, DijkstraResult, DijkstraState};
