use super::{Point2, TOLERANCE};
use crate::error::GeometryError;

/// Computes the signed area of a polygon (shoelace formula).
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

/// Returns the ring with the requested winding, reversing it if needed.
#[must_use]
pub fn with_winding(mut points: Vec<Point2>, counter_clockwise: bool) -> Vec<Point2> {
    let is_ccw = signed_area_2d(&points) > 0.0;
    if is_ccw != counter_clockwise {
        points.reverse();
    }
    points
}

/// Removes consecutive duplicate vertices, including a closing vertex that
/// repeats the first one.
#[must_use]
pub fn dedup_ring(points: &[Point2]) -> Vec<Point2> {
    let mut ring: Vec<Point2> = Vec::with_capacity(points.len());
    for &p in points {
        if ring.last().is_some_and(|last| (p - *last).norm() < TOLERANCE) {
            continue;
        }
        ring.push(p);
    }
    while ring.len() > 1 {
        let (first, last) = (ring[0], ring[ring.len() - 1]);
        if (first - last).norm() < TOLERANCE {
            ring.pop();
        } else {
            break;
        }
    }
    ring
}

/// Midpoint of the axis-aligned bounding box of a point set.
///
/// This is the "shape center" used for label anchoring. It is not a
/// centroid: it only depends on the extreme coordinates, so it is invariant
/// under any permutation of the input.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyPointSet`] for an empty slice and
/// [`GeometryError::NonFiniteCoordinate`] if a coordinate is NaN or infinite.
pub fn bounding_box_midpoint(points: &[Point2]) -> Result<Point2, GeometryError> {
    if points.is_empty() {
        return Err(GeometryError::EmptyPointSet);
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate { x: p.x, y: p.y });
        }
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    Ok(Point2::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0))
}

/// Returns `true` if no two non-adjacent edges of the closed ring touch.
#[must_use]
pub fn is_simple(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 4 {
        return true;
    }
    for i in 0..n {
        let a0 = &points[i];
        let a1 = &points[(i + 1) % n];
        for j in (i + 2)..n {
            // Edge n-1 shares vertex 0 with edge 0.
            if i == 0 && j == n - 1 {
                continue;
            }
            let b0 = &points[j];
            let b1 = &points[(j + 1) % n];
            if segments_touch(a0, a1, b0, b1) {
                return false;
            }
        }
    }
    true
}

/// Orientation of `c` relative to the directed line `a -> b`.
#[inline]
fn orient(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Whether `p`, known to be collinear with `a -> b`, lies within the segment.
fn within_segment(a: &Point2, b: &Point2, p: &Point2) -> bool {
    p.x >= a.x.min(b.x) - TOLERANCE
        && p.x <= a.x.max(b.x) + TOLERANCE
        && p.y >= a.y.min(b.y) - TOLERANCE
        && p.y <= a.y.max(b.y) + TOLERANCE
}

fn segments_touch(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let d1 = orient(b0, b1, a0);
    let d2 = orient(b0, b1, a1);
    let d3 = orient(a0, a1, b0);
    let d4 = orient(a0, a1, b1);

    let straddles_b = (d1 > TOLERANCE && d2 < -TOLERANCE) || (d1 < -TOLERANCE && d2 > TOLERANCE);
    let straddles_a = (d3 > TOLERANCE && d4 < -TOLERANCE) || (d3 < -TOLERANCE && d4 > TOLERANCE);
    if straddles_a && straddles_b {
        return true;
    }

    (d1.abs() <= TOLERANCE && within_segment(b0, b1, a0))
        || (d2.abs() <= TOLERANCE && within_segment(b0, b1, a1))
        || (d3.abs() <= TOLERANCE && within_segment(a0, a1, b0))
        || (d4.abs() <= TOLERANCE && within_segment(a0, a1, b1))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert_relative_eq!(signed_area_2d(&pts), 1.0);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert_relative_eq!(signed_area_2d(&pts), -1.0);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn with_winding_reverses_cw_ring() {
        let cw = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        let ccw = with_winding(cw, true);
        assert!(signed_area_2d(&ccw) > 0.0);
        let back = with_winding(ccw, false);
        assert!(signed_area_2d(&back) < 0.0);
    }

    #[test]
    fn dedup_ring_drops_repeats_and_closing_vertex() {
        let pts = vec![
            p(0.0, 0.0),
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 0.0),
        ];
        let ring = dedup_ring(&pts);
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn midpoint_of_square() {
        let pts = vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
        let mid = bounding_box_midpoint(&pts).unwrap();
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.y, 5.0);
    }

    #[test]
    fn midpoint_is_not_the_centroid() {
        // Most vertices cluster near the origin; the centroid would follow them.
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(9.0, 0.5)];
        let mid = bounding_box_midpoint(&pts).unwrap();
        assert_relative_eq!(mid.x, 4.5);
        assert_relative_eq!(mid.y, 0.5);
    }

    #[test]
    fn midpoint_is_order_independent_and_idempotent() {
        let pts = vec![p(-3.0, 2.0), p(7.0, -1.0), p(4.0, 9.0), p(0.5, 0.5)];
        let expected = bounding_box_midpoint(&pts).unwrap();

        let mut rotated = pts.clone();
        rotated.rotate_left(2);
        let mut reversed = pts.clone();
        reversed.reverse();

        for permutation in [rotated, reversed] {
            let mid = bounding_box_midpoint(&permutation).unwrap();
            assert_relative_eq!(mid.x, expected.x);
            assert_relative_eq!(mid.y, expected.y);
        }

        let again = bounding_box_midpoint(&[expected]).unwrap();
        assert_relative_eq!(again.x, expected.x);
        assert_relative_eq!(again.y, expected.y);
    }

    #[test]
    fn midpoint_of_empty_set_fails() {
        assert!(matches!(
            bounding_box_midpoint(&[]),
            Err(GeometryError::EmptyPointSet)
        ));
    }

    #[test]
    fn midpoint_rejects_nan() {
        assert!(matches!(
            bounding_box_midpoint(&[p(f64::NAN, 0.0)]),
            Err(GeometryError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn square_is_simple() {
        let pts = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        assert!(is_simple(&pts));
    }

    #[test]
    fn l_shape_is_simple() {
        let pts = vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 2.0),
            p(2.0, 2.0),
            p(2.0, 4.0),
            p(0.0, 4.0),
        ];
        assert!(is_simple(&pts));
    }

    #[test]
    fn bowtie_is_not_simple() {
        let pts = vec![p(0.0, 0.0), p(4.0, 4.0), p(4.0, 0.0), p(0.0, 4.0)];
        assert!(!is_simple(&pts));
    }
}
