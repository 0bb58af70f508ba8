use std::fmt::Debug;

use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::operations::boolean::Subtract;
use crate::operations::shaping::Extrude;
use crate::operations::transform::Translate;
use crate::tessellation::{TessellateSolid, TriangleMesh};
use crate::topology::{SolidId, SolidStore};

/// The solid-modeling operations the importer needs.
///
/// Solids are referred to through opaque handles owned by the
/// implementation. Every solid returned by `extrude` must eventually be
/// consumed by `subtract` (as the tool) or released with `remove`.
pub trait GeometryOps {
    /// Handle to a solid owned by the implementation.
    type Solid: Copy + Debug;

    /// Solidifies a planar face by `thickness` using the implementation's
    /// solidify offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is degenerate or the thickness is invalid.
    fn extrude(&mut self, face: &[Point3], thickness: f64) -> Result<Self::Solid>;

    /// Moves a solid by `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid does not exist.
    fn translate(&mut self, solid: Self::Solid, offset: Vector3) -> Result<()>;

    /// Replaces `target` with `target - tool` and destroys `tool`.
    ///
    /// # Errors
    ///
    /// Returns an error if the boolean fails. `tool` is destroyed either way.
    fn subtract(&mut self, target: Self::Solid, tool: Self::Solid) -> Result<Self::Solid>;

    /// Triangulates the boundary of a solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid does not exist or cannot be triangulated.
    fn tessellate(&self, solid: Self::Solid) -> Result<TriangleMesh>;

    /// Destroys a solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid does not exist.
    fn remove(&mut self, solid: Self::Solid) -> Result<()>;
}

/// Kernel of right prisms over horizontal profiles.
#[derive(Debug, Default)]
pub struct PrismKernel {
    store: SolidStore,
    solidify_offset: f64,
}

impl PrismKernel {
    /// Creates an empty kernel with a centered solidify offset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the solidify offset used by [`GeometryOps::extrude`].
    #[must_use]
    pub fn with_solidify_offset(mut self, offset: f64) -> Self {
        self.solidify_offset = offset;
        self
    }

    /// The underlying solid store.
    #[must_use]
    pub fn store(&self) -> &SolidStore {
        &self.store
    }

    /// Number of solids currently alive.
    #[must_use]
    pub fn live_solids(&self) -> usize {
        self.store.len()
    }
}

impl GeometryOps for PrismKernel {
    type Solid = SolidId;

    fn extrude(&mut self, face: &[Point3], thickness: f64) -> Result<SolidId> {
        Extrude::new(face.to_vec(), thickness)
            .with_offset(self.solidify_offset)
            .execute(&mut self.store)
    }

    fn translate(&mut self, solid: SolidId, offset: Vector3) -> Result<()> {
        Translate::new(solid, offset).execute(&mut self.store)
    }

    fn subtract(&mut self, target: SolidId, tool: SolidId) -> Result<SolidId> {
        Subtract::new(target, tool).execute(&mut self.store)
    }

    fn tessellate(&self, solid: SolidId) -> Result<TriangleMesh> {
        TessellateSolid::new(solid).execute(&self.store)
    }

    fn remove(&mut self, solid: SolidId) -> Result<()> {
        self.store.remove_solid(solid)?;
        Ok(())
    }
}
