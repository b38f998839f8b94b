use super::Point2;

/// Orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation test: sign of the cross product `(q - p) × (r - q)`.
///
/// Magnitudes below `eps` are treated as exactly collinear.
#[must_use]
pub fn turn(p: &Point2, q: &Point2, r: &Point2, eps: f64) -> Turn {
    let cross = (q.x - p.x) * (r.y - q.y) - (q.y - p.y) * (r.x - q.x);
    if cross.abs() < eps {
        Turn::Collinear
    } else if cross > 0.0 {
        Turn::CounterClockwise
    } else {
        Turn::Clockwise
    }
}

/// Returns `true` if `q` lies inside the axis-aligned bounding box of `p` and
/// `r` (inclusive, widened by `eps`).
///
/// Only meaningful once the three points are known to be collinear.
#[must_use]
pub fn is_between(p: &Point2, q: &Point2, r: &Point2, eps: f64) -> bool {
    q.x <= p.x.max(r.x) + eps
        && q.x >= p.x.min(r.x) - eps
        && q.y <= p.y.max(r.y) + eps
        && q.y >= p.y.min(r.y) - eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn left_turn_is_counter_clockwise() {
        let t = turn(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(1.0, 1.0),
            TOLERANCE,
        );
        assert_eq!(t, Turn::CounterClockwise);
    }

    #[test]
    fn right_turn_is_clockwise() {
        let t = turn(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(1.0, -1.0),
            TOLERANCE,
        );
        assert_eq!(t, Turn::Clockwise);
    }

    #[test]
    fn straight_line_is_collinear() {
        let t = turn(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 1.0),
            &Point2::new(3.0, 3.0),
            TOLERANCE,
        );
        assert_eq!(t, Turn::Collinear);
    }

    #[test]
    fn tiny_cross_product_is_collinear() {
        // cross = 1e-11, below the default tolerance.
        let t = turn(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(2.0, 1e-11),
            TOLERANCE,
        );
        assert_eq!(t, Turn::Collinear);

        // A tighter tolerance sees the turn.
        let t = turn(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(2.0, 1e-11),
            1e-14,
        );
        assert_eq!(t, Turn::CounterClockwise);
    }

    #[test]
    fn between_inclusive_bounds() {
        let p = Point2::new(0.0, 0.0);
        let r = Point2::new(2.0, 0.0);
        assert!(is_between(&p, &Point2::new(1.0, 0.0), &r, TOLERANCE));
        assert!(is_between(&p, &Point2::new(0.0, 0.0), &r, TOLERANCE));
        assert!(is_between(&p, &Point2::new(2.0, 0.0), &r, TOLERANCE));
        assert!(!is_between(&p, &Point2::new(2.1, 0.0), &r, TOLERANCE));
        assert!(!is_between(&p, &Point2::new(-0.1, 0.0), &r, TOLERANCE));
    }

    #[test]
    fn between_ignores_argument_order_of_bounds() {
        let q = Point2::new(1.0, 1.0);
        assert!(is_between(
            &Point2::new(2.0, 2.0),
            &q,
            &Point2::new(0.0, 0.0),
            TOLERANCE
        ));
    }
}
