use crate::math::polygon_2d::{signed_area_2d, with_winding};
use crate::math::{Point2, Vector2};

/// A bounded planar region: one outer ring and zero or more hole rings.
///
/// The outer ring is stored counter-clockwise and holes clockwise, so the
/// material of the region always lies to the left of every ring edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRegion {
    outer: Vec<Point2>,
    holes: Vec<Vec<Point2>>,
}

impl ProfileRegion {
    /// Creates a region, normalizing ring windings.
    #[must_use]
    pub fn new(outer: Vec<Point2>, holes: Vec<Vec<Point2>>) -> Self {
        Self {
            outer: with_winding(outer, true),
            holes: holes
                .into_iter()
                .map(|hole| with_winding(hole, false))
                .collect(),
        }
    }

    /// The outer boundary ring (counter-clockwise).
    #[must_use]
    pub fn outer(&self) -> &[Point2] {
        &self.outer
    }

    /// The hole rings (clockwise).
    #[must_use]
    pub fn holes(&self) -> &[Vec<Point2>] {
        &self.holes
    }

    /// Iterates over the outer ring followed by every hole ring.
    pub fn rings(&self) -> impl Iterator<Item = &[Point2]> {
        std::iter::once(self.outer.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }

    /// Net area: outer area minus hole areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.rings().map(signed_area_2d).sum()
    }

    /// Axis-aligned bounds of the outer ring as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> (Point2, Point2) {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &self.outer {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Shifts every ring by `offset`.
    pub fn translate(&mut self, offset: &Vector2) {
        for p in self.outer.iter_mut().chain(self.holes.iter_mut().flatten()) {
            *p += *offset;
        }
    }
}
