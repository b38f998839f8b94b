use crate::geometry::Polygon;
use crate::math::{edge_normal, line_line_intersect_2d, point_at, Point2, Vector2, TOLERANCE};

/// How the corners of an inflated polygon are reconnected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerPolicy {
    /// Vertex `i` is the intersection of the offset lines of the two edges
    /// meeting at original vertex `i`. Parallel neighbors fall back to the
    /// translated endpoint of the previous offset edge.
    #[default]
    Miter,
    /// Vertex `i` is original vertex `i` translated by the normal of the edge
    /// leaving it. Leaves gaps or overlaps at corners.
    TranslatedEndpoint,
}

/// Offsets a polygon outward by a fixed radius.
///
/// Each edge is translated along its unit outward normal: the left normal for
/// clockwise polygons, the right normal for counter-clockwise ones. A negative
/// radius insets. The result has one vertex per input vertex and
/// vertex `i` corresponds to original vertex `i`.
///
/// Sharp corners under [`CornerPolicy::Miter`] produce miter points far from
/// the original vertex; no miter limit is applied.
#[derive(Debug)]
pub struct InflatePolygon<'a> {
    polygon: &'a Polygon,
    radius: f64,
    policy: CornerPolicy,
    tolerance: f64,
}

impl<'a> InflatePolygon<'a> {
    /// Creates a new inflation operation with the default corner policy.
    #[must_use]
    pub fn new(polygon: &'a Polygon, radius: f64) -> Self {
        Self {
            polygon,
            radius,
            policy: CornerPolicy::default(),
            tolerance: TOLERANCE,
        }
    }

    /// Selects the corner reconnection policy.
    #[must_use]
    pub fn with_policy(mut self, policy: CornerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the determinant threshold below which adjacent offset lines are
    /// considered parallel.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the inflation.
    #[must_use]
    pub fn execute(&self) -> Polygon {
        let points = self.polygon.vertices();
        let n = points.len();
        if n == 0 || self.radius.abs() < self.tolerance {
            return self.polygon.clone();
        }

        // Left normals point outward only for clockwise winding.
        let outward = if self.polygon.signed_area() > 0.0 {
            -self.radius
        } else {
            self.radius
        };

        // Phase A: offset every edge along its normal.
        let normals: Vec<Vector2> = (0..n)
            .map(|i| edge_normal(&points[i], &points[(i + 1) % n]) * outward)
            .collect();
        let offset_edges: Vec<(Point2, Point2)> = (0..n)
            .map(|i| (points[i] + normals[i], points[(i + 1) % n] + normals[i]))
            .collect();

        // Phase B: reconnect.
        let vertices = match self.policy {
            CornerPolicy::TranslatedEndpoint => offset_edges.iter().map(|e| e.0).collect(),
            CornerPolicy::Miter => (0..n)
                .map(|i| {
                    let prev = if i == 0 { n - 1 } else { i - 1 };
                    miter_corner(&offset_edges[prev], &offset_edges[i], self.tolerance)
                })
                .collect(),
        };

        Polygon::new(vertices)
    }
}

/// Offsets `polygon` outward by `radius` using [`CornerPolicy::Miter`].
#[must_use]
pub fn inflate(polygon: &Polygon, radius: f64) -> Polygon {
    InflatePolygon::new(polygon, radius).execute()
}

/// Intersects two adjacent offset edges and returns the corner point.
///
/// Falls back to the end of the previous offset edge when the lines are
/// parallel, or to the start of the next one when the previous edge has zero
/// length.
fn miter_corner(seg_prev: &(Point2, Point2), seg_next: &(Point2, Point2), eps: f64) -> Point2 {
    let d_prev = seg_prev.1 - seg_prev.0;
    let d_next = seg_next.1 - seg_next.0;

    if let Some((t, _u)) = line_line_intersect_2d(&seg_prev.1, &d_prev, &seg_next.0, &d_next, eps) {
        point_at(&seg_prev.1, &d_prev, t)
    } else if d_prev.norm_squared() > 0.0 {
        seg_prev.1
    } else {
        seg_next.0
    }
}
