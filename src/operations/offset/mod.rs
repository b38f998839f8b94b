mod inflate;

pub use inflate::{inflate, CornerPolicy, InflatePolygon};
