use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::error::{GeometryError, Result};
use crate::geometry::{PathResult, Polygon};
use crate::math::{point_to_segment_dist, Point2};
use crate::operations::offset::InflatePolygon;
use crate::operations::search::dijkstra;
use crate::operations::visibility::{BuildVisibilityGraph, VisibilityGraph};

/// Robot model for a planning query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Robot {
    /// Dimensionless robot; obstacles are used as given.
    Point,
    /// Circular robot; obstacles are inflated by `radius` before planning.
    Disk { radius: f64 },
}

impl Robot {
    /// Inflation radius, zero for a point robot.
    #[must_use]
    pub fn radius(&self) -> f64 {
        match self {
            Self::Point => 0.0,
            Self::Disk { radius } => *radius,
        }
    }
}

/// Shortest path planner over a fixed configuration.
///
/// Every call is independent: the vertex table, graph and search state live
/// only for the duration of [`Planner::plan`].
///
/// With the default configuration a segment between two vertices of the same
/// obstacle is blocked only by edges that touch neither endpoint, so a path
/// may cut through an obstacle along its own diagonal. Enable
/// [`PlannerConfig::with_interior_diagonal_check`] to rule that out.
#[derive(Clone, Copy, Debug, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    #[must_use]
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans the shortest collision-free path from `start` to `goal`.
    ///
    /// An unreachable goal is not an error: it yields
    /// [`PathResult::unreachable`].
    ///
    /// # Errors
    ///
    /// With validation enabled, returns [`GeometryError`] for a non-finite
    /// start or goal, a negative or non-finite radius or tolerance, and
    /// [`ObstacleError`](crate::error::ObstacleError) for a malformed obstacle.
    pub fn plan(
        &self,
        obstacles: &[Polygon],
        start: Point2,
        goal: Point2,
        robot: Robot,
    ) -> Result<PathResult> {
        let planning = self.prepare(obstacles, start, goal, robot)?;

        if start == goal {
            debug!("start equals goal");
            return Ok(PathResult::stationary(start));
        }

        let graph = self.build(&planning, start, goal);
        let Some(found) = dijkstra(
            graph.adjacency(),
            VisibilityGraph::START,
            VisibilityGraph::GOAL,
        ) else {
            debug!(vertices = graph.len(), "goal unreachable");
            return Ok(PathResult::unreachable());
        };

        let points = found.path.iter().map(|&i| *graph.point(i)).collect();
        debug!(
            waypoints = found.path.len(),
            length = found.distance,
            "path found"
        );
        Ok(PathResult::new(points, found.distance))
    }

    /// Returns the visibility graph [`Planner::plan`] would search, built
    /// over the inflated obstacles for a disk robot.
    ///
    /// # Errors
    ///
    /// Same validation errors as [`Planner::plan`].
    pub fn visibility_graph(
        &self,
        obstacles: &[Polygon],
        start: Point2,
        goal: Point2,
        robot: Robot,
    ) -> Result<VisibilityGraph> {
        let planning = self.prepare(obstacles, start, goal, robot)?;
        Ok(self.build(&planning, start, goal))
    }

    /// Validates the query, then returns the obstacles to plan against.
    fn prepare(
        &self,
        obstacles: &[Polygon],
        start: Point2,
        goal: Point2,
        robot: Robot,
    ) -> Result<Vec<Polygon>> {
        if self.config.validate {
            self.validate(obstacles, &start, &goal, robot)?;
        }

        let radius = robot.radius();
        let planning: Vec<Polygon> = if radius.abs() < self.config.tolerance {
            obstacles.to_vec()
        } else {
            obstacles
                .iter()
                .map(|obstacle| {
                    InflatePolygon::new(obstacle, radius)
                        .with_policy(self.config.corner_policy)
                        .with_tolerance(self.config.tolerance)
                        .execute()
                })
                .collect()
        };

        self.diagnose(obstacles, &planning, &start, &goal, radius);
        Ok(planning)
    }

    fn build(&self, planning: &[Polygon], start: Point2, goal: Point2) -> VisibilityGraph {
        BuildVisibilityGraph::new(planning, start, goal)
            .with_config(&self.config)
            .execute()
    }

    fn validate(
        &self,
        obstacles: &[Polygon],
        start: &Point2,
        goal: &Point2,
        robot: Robot,
    ) -> Result<()> {
        let tolerance = self.config.tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "tolerance",
                value: tolerance,
                min: 0.0,
                max: f64::MAX,
            }
            .into());
        }

        if !start.coords.iter().all(|c| c.is_finite()) {
            return Err(GeometryError::NonFinite { what: "start" }.into());
        }
        if !goal.coords.iter().all(|c| c.is_finite()) {
            return Err(GeometryError::NonFinite { what: "goal" }.into());
        }

        if let Robot::Disk { radius } = robot {
            if radius.is_nan() {
                return Err(GeometryError::NonFinite { what: "radius" }.into());
            }
            if !radius.is_finite() || radius < 0.0 {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter: "radius",
                    value: radius,
                    min: 0.0,
                    max: f64::MAX,
                }
                .into());
            }
        }

        for (index, obstacle) in obstacles.iter().enumerate() {
            obstacle.validate(index, tolerance)?;
        }
        Ok(())
    }

    /// Warns about queries whose endpoints are not in free space. The result
    /// is unaffected.
    fn diagnose(
        &self,
        original: &[Polygon],
        planning: &[Polygon],
        start: &Point2,
        goal: &Point2,
        radius: f64,
    ) {
        for (what, point) in [("start", start), ("goal", goal)] {
            if let Some(index) = planning.iter().position(|o| o.contains(point)) {
                warn!(
                    endpoint = what,
                    x = point.x,
                    y = point.y,
                    obstacle = index,
                    "endpoint lies inside an obstacle"
                );
            }

            if radius > self.config.tolerance {
                let clearance = original
                    .iter()
                    .flat_map(Polygon::edges)
                    .map(|(a, b)| point_to_segment_dist(point, a, b))
                    .fold(f64::INFINITY, f64::min);
                if clearance < radius {
                    warn!(
                        endpoint = what,
                        clearance,
                        radius,
                        "endpoint is closer to an obstacle than the robot radius"
                    );
                }
            }
        }
    }
}

/// Plans a path for a point robot with the default configuration.
///
/// The default configuration admits an obstacle's own interior diagonals; see
/// [`Planner`] and [`PlannerConfig::with_interior_diagonal_check`].
///
/// # Errors
///
/// See [`Planner::plan`].
pub fn plan_point_robot(obstacles: &[Polygon], start: Point2, goal: Point2) -> Result<PathResult> {
    Planner::default().plan(obstacles, start, goal, Robot::Point)
}

/// Plans a path for a disk robot of `radius` with the default configuration.
///
/// # Errors
///
/// See [`Planner::plan`].
pub fn plan_disk_robot(
    obstacles: &[Polygon],
    start: Point2,
    goal: Point2,
    radius: f64,
) -> Result<PathResult> {
    Planner::default().plan(obstacles, start, goal, Robot::Disk { radius })
}
