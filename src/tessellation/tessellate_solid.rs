use crate::error::Result;
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::topology::{SolidId, SolidStore, ZSpan};

use super::{TessellateFace, TriangleMesh};

/// Tessellates all faces of a prism (caps and walls) into a combined
/// triangle mesh.
pub struct TessellateSolid {
    solid: SolidId,
}

impl TessellateSolid {
    /// Creates a new `TessellateSolid` operation.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the tessellation, returning a combined triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing or any of its faces cannot be
    /// tessellated.
    pub fn execute(&self, store: &SolidStore) -> Result<TriangleMesh> {
        let solid = store.solid(self.solid)?;

        let mut combined = TriangleMesh::default();
        for region in &solid.regions {
            combined.merge(&TessellateFace::new(region, solid.span.max, true).execute()?);
            combined.merge(&TessellateFace::new(region, solid.span.min, false).execute()?);
            for ring in region.rings() {
                add_walls(&mut combined, ring, solid.span);
            }
        }

        Ok(combined)
    }
}

/// Adds one quad per ring edge. Rings keep the material on their left, so
/// the outward normal is the edge direction turned clockwise.
fn add_walls(mesh: &mut TriangleMesh, ring: &[Point2], span: ZSpan) {
    let n = ring.len();
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let edge = b - a;
        let length = edge.norm();
        if length < TOLERANCE {
            continue;
        }
        let normal = Vector3::new(edge.y / length, -edge.x / length, 0.0);

        let a_bot = mesh.push_vertex(Point3::new(a.x, a.y, span.min), normal);
        let b_bot = mesh.push_vertex(Point3::new(b.x, b.y, span.min), normal);
        let b_top = mesh.push_vertex(Point3::new(b.x, b.y, span.max), normal);
        let a_top = mesh.push_vertex(Point3::new(a.x, a.y, span.max), normal);
        mesh.indices.push([a_bot, b_bot, b_top]);
        mesh.indices.push([a_bot, b_top, a_top]);
    }
}
