//! Randomized properties of the planner over disjoint rectangle fields.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use vispath::math::distance;
use vispath::{
    build_visibility_graph, plan_disk_robot, plan_point_robot, PathResult, Point2, Polygon,
};

const CELL: f64 = 10.0;

/// One clockwise rectangle per occupied cell of a 3x3 grid, so obstacles
/// never overlap.
fn rectangles() -> impl Strategy<Value = Vec<Polygon>> {
    prop::collection::vec(
        (0usize..9, 0.5..4.0f64, 0.5..4.0f64, 1.0..5.0f64, 1.0..5.0f64),
        0..6,
    )
    .prop_map(|specs| {
        let mut used = [false; 9];
        specs
            .into_iter()
            .filter(|(cell, ..)| !std::mem::replace(&mut used[*cell], true))
            .map(|(cell, dx, dy, w, h)| {
                let x0 = (cell % 3) as f64 * CELL + dx;
                let y0 = (cell / 3) as f64 * CELL + dy;
                let (x1, y1) = (x0 + w, y0 + h);
                Polygon::from_coords(&[(x0, y0), (x0, y1), (x1, y1), (x1, y0)])
            })
            .collect()
    })
}

fn point() -> impl Strategy<Value = Point2> {
    (-5.0..35.0f64, -5.0..35.0f64).prop_map(|(x, y)| Point2::new(x, y))
}

proptest! {
    #[test]
    fn graph_is_symmetric(obstacles in rectangles(), start in point(), goal in point()) {
        let graph = build_visibility_graph(&obstacles, start, goal);
        for (i, j, w) in graph.edges() {
            prop_assert_eq!(graph.weight(j, i), Some(w));
            prop_assert!((w - distance(graph.point(i), graph.point(j))).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_radius_disk_is_point_robot(
        obstacles in rectangles(),
        start in point(),
        goal in point()
    ) {
        let point_path = plan_point_robot(&obstacles, start, goal).unwrap();
        let disk_path = plan_disk_robot(&obstacles, start, goal, 0.0).unwrap();
        prop_assert_eq!(point_path, disk_path);
    }

    #[test]
    fn empty_field_goes_straight(start in point(), goal in point()) {
        let result = plan_point_robot(&[], start, goal).unwrap();
        if start == goal {
            prop_assert_eq!(result, PathResult::stationary(start));
        } else {
            prop_assert_eq!(&result.points, &vec![start, goal]);
            prop_assert!((result.length - distance(&start, &goal)).abs() < 1e-12);
        }
    }

    #[test]
    fn length_matches_waypoints(obstacles in rectangles(), start in point(), goal in point()) {
        let result = plan_point_robot(&obstacles, start, goal).unwrap();
        if result.is_reachable() {
            prop_assert!((result.length - result.polyline_length()).abs() < 1e-9);
            prop_assert!(result.length + 1e-9 >= distance(&start, &goal));
            prop_assert_eq!(result.points.first(), Some(&start));
            prop_assert_eq!(result.points.last(), Some(&goal));
        } else {
            prop_assert!(result.length.is_infinite());
        }
    }
}
