use super::{Point2, TOLERANCE};

/// Returns the minimum distance from point `p` to the line segment
/// from `a` to `b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return ((p.x - a.x).powi(2) + (p.y - a.y).powi(2)).sqrt();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = a.x + t * dx;
    let closest_y = a.y + t * dy;

    ((p.x - closest_x).powi(2) + (p.y - closest_y).powi(2)).sqrt()
}

/// Checks whether two points occupy the same grid position.
#[must_use]
pub fn points_coincident(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}

/// Checks whether `b` is collinear with its neighbors `a` and `c`.
///
/// Degenerate configurations (duplicate points) count as collinear.
#[must_use]
pub fn is_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let ab_x = b.x - a.x;
    let ab_y = b.y - a.y;
    let bc_x = c.x - b.x;
    let bc_y = c.y - b.y;
    (ab_x * bc_y - ab_y * bc_x).abs() < TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn segment_dist_perpendicular_projection() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), dist = 1.
        let d = point_to_segment_dist(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOLERANCE, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = point_to_segment_dist(&p(-1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOLERANCE, "d={d}");
    }

    #[test]
    fn segment_dist_on_segment() {
        let d = point_to_segment_dist(&p(1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!(d.abs() < TOLERANCE, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        // Zero-length segment: distance is point-to-point.
        let d = point_to_segment_dist(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert!((d - 5.0).abs() < TOLERANCE, "d={d}");
    }

    #[test]
    fn coincident_points() {
        assert!(points_coincident(&p(5.0, 10.0), &p(5.0, 10.0)));
        assert!(!points_coincident(&p(5.0, 10.0), &p(5.0, 10.5)));
    }

    #[test]
    fn collinear_horizontal_run() {
        assert!(is_collinear(&p(0.0, 2.0), &p(4.0, 2.0), &p(8.0, 2.0)));
        assert!(!is_collinear(&p(0.0, 2.0), &p(4.0, 4.0), &p(8.0, 2.0)));
    }

    #[test]
    fn collinear_duplicate_points() {
        assert!(is_collinear(&p(0.0, 2.0), &p(0.0, 2.0), &p(4.0, 4.0)));
    }
}
