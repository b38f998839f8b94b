use thiserror::Error;

/// Top-level error type for the planner.
#[derive(Debug, Error)]
pub enum VispathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Obstacle(#[from] ObstacleError),
}

/// Errors related to query parameters (points, radius, tolerance).
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{what} has a non-finite coordinate")]
    NonFinite { what: &'static str },
}

/// An obstacle polygon that cannot be planned around.
#[derive(Debug, Error, PartialEq)]
pub enum ObstacleError {
    #[error("obstacle {obstacle} has {count} vertices, at least 3 are required")]
    TooFewVertices { obstacle: usize, count: usize },

    #[error("obstacle {obstacle} vertex {vertex} has a non-finite coordinate")]
    NonFinite { obstacle: usize, vertex: usize },

    #[error("obstacle {obstacle} has zero area")]
    ZeroArea { obstacle: usize },

    #[error("obstacle {obstacle} edges {first} and {second} intersect")]
    SelfIntersecting {
        obstacle: usize,
        first: usize,
        second: usize,
    },
}

/// Convenience type alias for results using [`VispathError`].
pub type Result<T> = std::result::Result<T, VispathError>;
