use super::region::ProfileRegion;
use crate::math::{Point2, TOLERANCE};

slotmap::new_key_type! {
    /// Unique identifier for a solid in the solid store.
    pub struct SolidId;
}

/// Closed interval along the z axis occupied by a prism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZSpan {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ZSpan {
    /// Creates a span from two bounds, in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Extent of the span.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if the open interiors of the two spans intersect.
    #[must_use]
    pub fn overlaps(&self, other: &ZSpan) -> bool {
        self.min < other.max - TOLERANCE && self.max > other.min + TOLERANCE
    }

    /// Returns `true` if this span contains `other` entirely.
    #[must_use]
    pub fn covers(&self, other: &ZSpan) -> bool {
        self.min <= other.min + TOLERANCE && self.max >= other.max - TOLERANCE
    }

    /// Shifts the span by `dz`.
    pub fn translate(&mut self, dz: f64) {
        self.min += dz;
        self.max += dz;
    }
}

/// A right prism: one or more planar regions swept along z.
///
/// This is the only solid kind the kernel needs. Extruded floor-plan
/// polygons are prisms, and subtracting a prism that spans the full height
/// of another leaves a prism again.
#[derive(Debug, Clone, PartialEq)]
pub struct PrismSolid {
    /// Disjoint cross-section regions.
    pub regions: Vec<ProfileRegion>,
    /// Vertical extent.
    pub span: ZSpan,
}

impl PrismSolid {
    /// Creates a prism from its cross-section and vertical extent.
    #[must_use]
    pub fn new(regions: Vec<ProfileRegion>, span: ZSpan) -> Self {
        Self { regions, span }
    }

    /// Total cross-section area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.regions.iter().map(ProfileRegion::area).sum()
    }

    /// Plan-view bounds of all regions as `(min, max)`, or `None` for a
    /// prism without regions.
    #[must_use]
    pub fn plan_bounds(&self) -> Option<(Point2, Point2)> {
        self.regions
            .iter()
            .map(ProfileRegion::bounds)
            .reduce(|(amin, amax), (bmin, bmax)| {
                (
                    Point2::new(amin.x.min(bmin.x), amin.y.min(bmin.y)),
                    Point2::new(amax.x.max(bmax.x), amax.y.max(bmax.y)),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn span_orders_bounds() {
        let span = ZSpan::new(5.0, -1.0);
        assert_relative_eq!(span.min, -1.0);
        assert_relative_eq!(span.max, 5.0);
        assert_relative_eq!(span.height(), 6.0);
    }

    #[test]
    fn touching_spans_do_not_overlap() {
        let a = ZSpan::new(0.0, 1.0);
        let b = ZSpan::new(1.0, 2.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&ZSpan::new(0.5, 2.0)));
    }

    #[test]
    fn covering_span() {
        let tool = ZSpan::new(-10.0, 10.0);
        assert!(tool.covers(&ZSpan::new(0.0, 5.0)));
        assert!(tool.covers(&ZSpan::new(-10.0, 10.0)));
        assert!(!ZSpan::new(1.0, 10.0).covers(&ZSpan::new(0.0, 5.0)));
    }

    #[test]
    fn area_of_box() {
        let region = ProfileRegion::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(2.0, 3.0),
                Point2::new(0.0, 3.0),
            ],
            vec![],
        );
        let solid = PrismSolid::new(vec![region], ZSpan::new(0.0, 4.0));
        assert_relative_eq!(solid.area(), 6.0);
    }
}
