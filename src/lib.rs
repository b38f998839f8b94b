//! Shortest collision-free paths among polygonal obstacles.
//!
//! A point robot plans over the visibility graph of the obstacle vertices. A
//! disk robot plans the same way against obstacles inflated by its radius.
//!
//! ```
//! use vispath::{plan_point_robot, Point2, Polygon};
//!
//! let square = Polygon::from_coords(&[(4.0, -1.0), (4.0, 1.0), (6.0, 1.0), (6.0, -1.0)]);
//! let path = plan_point_robot(&[square], Point2::new(0.0, 0.0), Point2::new(10.0, 0.0))?;
//! assert_eq!(path.points.len(), 4);
//! # Ok::<(), vispath::VispathError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use config::PlannerConfig;
pub use error::{Result, VispathError};
pub use geometry::{PathResult, Polygon};
pub use math::Point2;
pub use operations::offset::inflate;
pub use operations::plan::{plan_disk_robot, plan_point_robot, Planner, Robot};
pub use operations::visibility::{build_visibility_graph, VisibilityGraph};
