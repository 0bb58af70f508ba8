use serde::Serialize;

use crate::math::Point3;
use crate::tessellation::TriangleMesh;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Smallest box containing every point, or `None` for an empty set.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(
            Self {
                min: first,
                max: first,
            },
            |mut acc, p| {
                acc.min = acc.min.inf(p);
                acc.max = acc.max.sup(p);
                acc
            },
        ))
    }

    /// Bounds of a triangle mesh, or `None` if it has no vertices.
    #[must_use]
    pub fn of_mesh(mesh: &TriangleMesh) -> Option<Self> {
        Self::from_points(&mesh.vertices)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn bounds_of_points() {
        let points = [
            Point3::new(-1.0, 0.0, 2.0),
            Point3::new(2.0, 3.0, 0.0),
            Point3::new(0.0, -4.0, 1.0),
        ];
        let aabb = Aabb::from_points(&points).unwrap();
        assert_relative_eq!(aabb.min, Point3::new(-1.0, -4.0, 0.0));
        assert_relative_eq!(aabb.max, Point3::new(2.0, 3.0, 2.0));
    }

    #[test]
    fn empty_point_set_has_no_box() {
        let none: [Point3; 0] = [];
        assert!(Aabb::from_points(&none).is_none());
        assert!(Aabb::of_mesh(&TriangleMesh::default()).is_none());
    }
}
