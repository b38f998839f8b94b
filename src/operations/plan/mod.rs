mod planner;

pub use planner::{plan_disk_robot, plan_point_robot, Planner, Robot};
