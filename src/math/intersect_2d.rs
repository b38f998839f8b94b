use super::orientation::{is_between, turn, Turn};
use super::{Point2, Vector2};

/// Segment intersection predicate used for visibility blocking.
///
/// Returns `true` for a proper crossing and also for every collinear touch:
/// a T-junction or a collinear overlap counts as crossing. Segments that are
/// collinear but disjoint, or parallel, do not cross.
#[must_use]
pub fn segments_cross(p1: &Point2, p2: &Point2, q1: &Point2, q2: &Point2, eps: f64) -> bool {
    let turn1 = turn(p1, p2, q1, eps);
    let turn2 = turn(p1, p2, q2, eps);
    let turn3 = turn(q1, q2, p1, eps);
    let turn4 = turn(q1, q2, p2, eps);

    if turn1 != turn2 && turn3 != turn4 {
        return true;
    }

    (turn1 == Turn::Collinear && is_between(p1, q1, p2, eps))
        || (turn2 == Turn::Collinear && is_between(p1, q2, p2, eps))
        || (turn3 == Turn::Collinear && is_between(q1, p1, q2, eps))
        || (turn4 == Turn::Collinear && is_between(q1, p2, q2, eps))
}

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
    eps: f64,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < eps {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn cross(p1: (f64, f64), p2: (f64, f64), q1: (f64, f64), q2: (f64, f64)) -> bool {
        segments_cross(
            &Point2::new(p1.0, p1.1),
            &Point2::new(p2.0, p2.1),
            &Point2::new(q1.0, q1.1),
            &Point2::new(q2.0, q2.1),
            TOLERANCE,
        )
    }

    #[test]
    fn proper_crossing() {
        assert!(cross((0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0)));
    }

    #[test]
    fn disjoint_segments() {
        assert!(!cross((0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)));
        assert!(!cross((0.0, 0.0), (1.0, 1.0), (3.0, 0.0), (2.0, 1.0)));
    }

    #[test]
    fn lines_cross_beyond_segment_extent() {
        // The infinite lines meet at (3, 0), outside the first segment.
        assert!(!cross((0.0, 0.0), (2.0, 0.0), (3.0, -1.0), (3.0, 1.0)));
    }

    // ── Boundary-touching fixtures ──
    //
    // Each case pins the collinear branch: every touch is a block, and the
    // branch only fires when the touching endpoint is on the *other* segment.

    #[test]
    fn t_junction_obstacle_endpoint_on_query() {
        // Obstacle edge starts on the interior of the query segment.
        assert!(cross((0.0, 0.0), (4.0, 0.0), (2.0, 0.0), (2.0, 3.0)));
    }

    #[test]
    fn t_junction_query_endpoint_on_obstacle() {
        // Query segment ends on the interior of the obstacle edge.
        assert!(cross((2.0, 3.0), (2.0, 0.0), (0.0, 0.0), (4.0, 0.0)));
    }

    #[test]
    fn collinear_overlap_blocks() {
        assert!(cross((0.0, 0.0), (3.0, 0.0), (2.0, 0.0), (5.0, 0.0)));
    }

    #[test]
    fn collinear_containment_blocks() {
        assert!(cross((0.0, 0.0), (10.0, 0.0), (2.0, 0.0), (5.0, 0.0)));
        assert!(cross((2.0, 0.0), (5.0, 0.0), (0.0, 0.0), (10.0, 0.0)));
    }

    #[test]
    fn collinear_disjoint_does_not_block() {
        assert!(!cross((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)));
        assert!(!cross((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)));
    }

    #[test]
    fn shared_endpoint_counts_as_touch() {
        // The predicate itself does not exempt shared endpoints; the
        // visibility builder does.
        assert!(cross((0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 1.0)));
    }

    #[test]
    fn collinear_touch_outside_bounding_box_does_not_block() {
        // q1 is on the line through p1-p2 but beyond p2; q2 is off the line,
        // on the same side of the q-line as both p points.
        assert!(!cross((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 1.0)));
    }

    #[test]
    fn parallel_offset_segments_do_not_block() {
        assert!(!cross((0.0, 0.0), (4.0, 0.0), (0.0, 1e-3), (4.0, 1e-3)));
    }

    #[test]
    fn line_line_perpendicular() {
        let (t, u) = line_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.5, -1.0),
            &Vector2::new(0.0, 1.0),
            TOLERANCE,
        )
        .unwrap();
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        assert!(line_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Vector2::new(2.0, 0.0),
            TOLERANCE,
        )
        .is_none());
    }

    #[test]
    fn point_at_interpolation() {
        let pt = point_at(&Point2::new(1.0, 2.0), &Vector2::new(4.0, 6.0), 0.5);
        assert!((pt.x - 3.0).abs() < TOLERANCE);
        assert!((pt.y - 5.0).abs() < TOLERANCE);
    }
}
