use geo::{Coord, LineString, MultiPolygon, Polygon};

use crate::math::polygon_2d::{dedup_ring, signed_area_2d};
use crate::math::{Point2, TOLERANCE};
use crate::topology::ProfileRegion;

/// Converts cross-section regions into a `geo` multipolygon.
pub(super) fn to_multi_polygon(regions: &[ProfileRegion]) -> MultiPolygon<f64> {
    MultiPolygon(
        regions
            .iter()
            .map(|region| {
                Polygon::new(
                    ring_to_line_string(region.outer()),
                    region.holes().iter().map(|h| ring_to_line_string(h)).collect(),
                )
            })
            .collect(),
    )
}

/// Converts a `geo` multipolygon back into regions, dropping slivers whose
/// area falls below tolerance.
pub(super) fn from_multi_polygon(multi: &MultiPolygon<f64>) -> Vec<ProfileRegion> {
    multi
        .0
        .iter()
        .filter_map(|polygon| {
            let outer = line_string_to_ring(polygon.exterior())?;
            let holes = polygon
                .interiors()
                .iter()
                .filter_map(line_string_to_ring)
                .collect();
            Some(ProfileRegion::new(outer, holes))
        })
        .filter(|region| region.area() > TOLERANCE)
        .collect()
}

fn ring_to_line_string(ring: &[Point2]) -> LineString<f64> {
    // `Polygon::new` closes the ring.
    LineString::new(ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect())
}

fn line_string_to_ring(line: &LineString<f64>) -> Option<Vec<Point2>> {
    let points: Vec<Point2> = line.coords().map(|c| Point2::new(c.x, c.y)).collect();
    let ring = dedup_ring(&points);
    (ring.len() >= 3 && signed_area_2d(&ring).abs() > TOLERANCE).then_some(ring)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn square(min: f64, max: f64) -> Vec<Point2> {
        vec![
            Point2::new(min, min),
            Point2::new(max, min),
            Point2::new(max, max),
            Point2::new(min, max),
        ]
    }

    #[test]
    fn conversion_preserves_holes() {
        let region = ProfileRegion::new(square(0.0, 10.0), vec![square(3.0, 7.0)]);
        let multi = to_multi_polygon(std::slice::from_ref(&region));
        assert_eq!(multi.0.len(), 1);
        assert_eq!(multi.0[0].interiors().len(), 1);

        let back = from_multi_polygon(&multi);
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].outer().len(), 4);
        assert_relative_eq!(back[0].area(), 100.0 - 16.0);
    }

    #[test]
    fn degenerate_rings_are_dropped() {
        let sliver = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let multi = MultiPolygon(vec![Polygon::new(ring_to_line_string(&sliver), vec![])]);
        assert!(from_multi_polygon(&multi).is_empty());
    }
}
