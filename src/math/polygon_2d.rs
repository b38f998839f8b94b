use super::{Point2, Vector2};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the unit left-pointing normal of the edge `a → b`.
///
/// A zero-length edge has no direction and yields the zero vector.
#[must_use]
pub fn edge_normal(a: &Point2, b: &Point2) -> Vector2 {
    let d = b - a;
    let len = d.norm();
    if len > 0.0 {
        Vector2::new(-d.y / len, d.x / len)
    } else {
        Vector2::zeros()
    }
}

/// Even-odd ray casting point-in-polygon test.
///
/// Points exactly on the boundary may land on either side.
#[must_use]
pub fn point_in_polygon(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&polygon[i], &polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
