use crate::error::{GeometryError, OperationError, Result};
use crate::math::polygon_2d::{dedup_ring, is_simple, signed_area_2d};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::topology::{PrismSolid, ProfileRegion, SolidId, SolidStore, ZSpan};

/// Solidifies a horizontal n-gon face into a prism.
///
/// The face normal follows the vertex order (right-hand rule). `offset`
/// places the solid relative to the face, in the range `[-1, 1]`:
/// `-1` grows against the normal, `1` along it, and `0` centers the solid
/// on the face plane.
pub struct Extrude {
    face: Vec<Point3>,
    thickness: f64,
    offset: f64,
}

impl Extrude {
    /// Creates a new `Extrude` operation with a centered (`offset = 0`) solid.
    #[must_use]
    pub fn new(face: Vec<Point3>, thickness: f64) -> Self {
        Self {
            face,
            thickness,
            offset: 0.0,
        }
    }

    /// Sets the solidify offset, clamped to `[-1, 1]`.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset.clamp(-1.0, 1.0);
        self
    }

    /// Executes the extrusion, creating the solid in the store.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if the face has fewer than 3 distinct
    /// vertices, non-finite coordinates, zero area, self-intersections, or
    /// if the thickness is not a positive finite number.
    /// Returns [`OperationError::InvalidInput`] if the face is not horizontal.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(GeometryError::InvalidThickness(self.thickness).into());
        }
        if self.face.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: self.face.len(),
            }
            .into());
        }
        if let Some(p) = self
            .face
            .iter()
            .find(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(GeometryError::NonFiniteCoordinate { x: p.x, y: p.y }.into());
        }

        let plane_z = self.face[0].z;
        if self.face.iter().any(|p| (p.z - plane_z).abs() > TOLERANCE) {
            return Err(
                OperationError::InvalidInput("prism faces must be horizontal".into()).into(),
            );
        }

        let projected: Vec<Point2> = self.face.iter().map(|p| Point2::new(p.x, p.y)).collect();
        let ring = dedup_ring(&projected);
        if ring.len() < 3 {
            return Err(GeometryError::TooFewVertices { count: ring.len() }.into());
        }

        if !is_simple(&ring) {
            return Err(GeometryError::SelfIntersecting.into());
        }
        let normal = newell_normal(&self.face)?;

        // The face lies in a horizontal plane, so the normal is +z or -z.
        let direction = normal.z.signum();
        let lower = plane_z + direction * self.thickness * (self.offset - 1.0) / 2.0;
        let upper = plane_z + direction * self.thickness * (self.offset + 1.0) / 2.0;

        debug_assert!(signed_area_2d(&ring).abs() > TOLERANCE);
        let region = ProfileRegion::new(ring, Vec::new());
        Ok(store.add_solid(PrismSolid::new(vec![region], ZSpan::new(lower, upper))))
    }
}

/// Computes the unit normal of a polygon using Newell's method.
fn newell_normal(points: &[Point3]) -> Result<Vector3> {
    let n = points.len();
    let mut normal = Vector3::new(0.0, 0.0, 0.0);
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate("polygon has zero area".into()).into());
    }
    Ok(normal / len)
}
