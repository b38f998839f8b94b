//! Runs the reference planning scenarios and prints the resulting paths.
//!
//! Usage:
//! ```text
//! cargo run --example scenarios                      # all scenarios
//! cargo run --example scenarios -- maze              # scenarios whose name contains "maze"
//! RUST_LOG=vispath=debug cargo run --example scenarios
//! ```

use vispath::{Planner, PlannerConfig, Point2, Polygon, Robot};

struct Scenario {
    name: &'static str,
    obstacles: &'static [&'static [(f64, f64)]],
    start: (f64, f64),
    goal: (f64, f64),
    robot: Robot,
}

const TRIANGLES: &[&[(f64, f64)]] = &[
    &[(2.0, 1.0), (1.0, 3.0), (3.0, 3.0)],
    &[(4.0, 0.0), (4.0, 2.0), (6.0, 1.0)],
    &[(5.0, 4.0), (7.0, 6.0), (7.0, 2.0)],
    &[(8.0, 3.0), (10.0, 4.0), (9.0, 1.0)],
];

const MIXED: &[&[(f64, f64)]] = &[
    &[(2.0, 2.0), (2.0, 5.0), (4.0, 5.0), (4.0, 2.0)],
    &[(6.0, 1.0), (7.0, 3.0), (9.0, 3.0), (10.0, 1.0), (8.0, 0.0)],
    &[(5.0, 6.0), (6.0, 8.0), (8.0, 8.0), (9.0, 6.0), (7.0, 5.0)],
    &[(12.0, 4.0), (13.0, 6.0), (15.0, 6.0), (16.0, 4.0), (14.0, 3.0)],
];

const NARROW: &[&[(f64, f64)]] = &[
    &[(2.0, 0.0), (2.0, 4.0), (4.0, 4.0), (4.0, 0.0)],
    &[(6.0, 6.0), (6.0, 10.0), (8.0, 10.0), (8.0, 6.0)],
    &[(10.0, 0.0), (10.0, 4.0), (12.0, 4.0), (12.0, 0.0)],
];

const MAZE: &[&[(f64, f64)]] = &[
    &[(2.0, 0.0), (2.0, 8.0), (3.0, 8.0), (3.0, 0.0)],
    &[(5.0, 2.0), (5.0, 10.0), (6.0, 10.0), (6.0, 2.0)],
    &[(8.0, 0.0), (8.0, 8.0), (9.0, 8.0), (9.0, 0.0)],
    &[(11.0, 2.0), (11.0, 10.0), (12.0, 10.0), (12.0, 2.0)],
    &[(14.0, 0.0), (14.0, 8.0), (15.0, 8.0), (15.0, 0.0)],
];

const SEALED: &[&[(f64, f64)]] = &[
    &[(2.0, 0.0), (2.0, 10.0), (3.0, 10.0), (3.0, 0.0)],
    &[(3.0, 9.0), (15.0, 9.0), (15.0, 10.0), (3.0, 10.0)],
    &[(15.0, 0.0), (15.0, 10.0), (16.0, 10.0), (16.0, 0.0)],
    &[(3.0, 0.0), (15.0, 0.0), (15.0, 1.0), (3.0, 1.0)],
];

const SQUARE_AND_DIAMOND: &[&[(f64, f64)]] = &[
    &[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)],
    &[(5.0, 2.0), (7.0, 4.0), (9.0, 2.0), (7.0, 0.0)],
];

const UNIT_DISK: Robot = Robot::Disk { radius: 1.0 };

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "triangles",
        obstacles: TRIANGLES,
        start: (0.0, 0.0),
        goal: (12.0, 5.0),
        robot: Robot::Point,
    },
    Scenario {
        name: "mixed",
        obstacles: MIXED,
        start: (1.0, 1.0),
        goal: (10.0, 8.0),
        robot: Robot::Point,
    },
    Scenario {
        name: "narrow passage",
        obstacles: NARROW,
        start: (0.0, 2.0),
        goal: (14.0, 8.0),
        robot: Robot::Point,
    },
    Scenario {
        name: "maze",
        obstacles: MAZE,
        start: (0.0, 5.0),
        goal: (17.0, 5.0),
        robot: Robot::Point,
    },
    Scenario {
        name: "no feasible path",
        obstacles: SEALED,
        start: (5.0, 5.0),
        goal: (20.0, 5.0),
        robot: Robot::Point,
    },
    Scenario {
        name: "disk: square and diamond",
        obstacles: SQUARE_AND_DIAMOND,
        start: (0.0, 0.0),
        goal: (10.0, 3.0),
        robot: UNIT_DISK,
    },
    Scenario {
        name: "disk: narrow passage",
        obstacles: NARROW,
        start: (0.0, 2.0),
        goal: (14.0, 8.0),
        robot: UNIT_DISK,
    },
    Scenario {
        name: "disk: mixed",
        obstacles: MIXED,
        start: (1.0, 1.0),
        goal: (15.0, 7.0),
        robot: UNIT_DISK,
    },
];

fn main() -> vispath::Result<()> {
    // Default: WARN for everything, INFO for vispath.
    // Override with RUST_LOG env var (e.g. RUST_LOG=vispath=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("vispath=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let filter = std::env::args().nth(1);
    let planner = Planner::new(PlannerConfig::default());

    for scenario in SCENARIOS {
        if let Some(f) = &filter {
            if !scenario.name.contains(f.as_str()) {
                continue;
            }
        }

        let obstacles: Vec<Polygon> = scenario
            .obstacles
            .iter()
            .map(|ring| Polygon::from_coords(ring))
            .collect();
        let start = Point2::new(scenario.start.0, scenario.start.1);
        let goal = Point2::new(scenario.goal.0, scenario.goal.1);

        let graph = planner.visibility_graph(&obstacles, start, goal, scenario.robot)?;
        let result = planner.plan(&obstacles, start, goal, scenario.robot)?;

        println!("{} ({:?})", scenario.name, scenario.robot);
        println!(
            "  graph: {} vertices, {} edges",
            graph.len(),
            graph.edge_count()
        );
        if result.is_reachable() {
            let waypoints: Vec<String> = result
                .points
                .iter()
                .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
                .collect();
            println!("  distance: {:.2}", result.length);
            println!("  path: {}", waypoints.join(" -> "));
        } else {
            println!("  distance: inf (no path)");
        }
    }

    Ok(())
}
