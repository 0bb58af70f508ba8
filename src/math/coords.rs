use super::{Point2, Point3};

/// Mapping between venue source coordinates and scene coordinates.
///
/// Source points are scaled down by `divisor` and mirrored across the y
/// axis: `(x, y) -> (-x / divisor, y / divisor)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapping {
    divisor: f64,
}

impl CoordinateMapping {
    /// Creates a mapping with the given number of source units per scene unit.
    #[must_use]
    pub fn new(divisor: f64) -> Self {
        Self { divisor }
    }

    /// Returns the number of source units per scene unit.
    #[must_use]
    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// Maps a source point into the scene plane.
    #[must_use]
    pub fn to_scene(&self, x: f64, y: f64) -> Point2 {
        Point2::new(-x / self.divisor, y / self.divisor)
    }

    /// Maps a source point onto a horizontal plane at scene height `z`.
    ///
    /// `z` is taken as-is; only the planar coordinates are converted.
    #[must_use]
    pub fn to_scene_at(&self, x: f64, y: f64, z: f64) -> Point3 {
        let p = self.to_scene(x, y);
        Point3::new(p.x, p.y, z)
    }

    /// Inverse of [`CoordinateMapping::to_scene`].
    #[must_use]
    pub fn to_source(&self, point: &Point2) -> (f64, f64) {
        (-point.x * self.divisor, point.y * self.divisor)
    }
}
