mod path;
mod polygon;

pub use path::PathResult;
pub use polygon::Polygon;
