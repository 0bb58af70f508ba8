use crate::error::Result;
use crate::math::{Vector2, Vector3};
use crate::topology::{SolidId, SolidStore};

/// Translates a solid by a displacement vector.
pub struct Translate {
    solid: SolidId,
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: SolidId, displacement: Vector3) -> Self {
        Self {
            solid,
            displacement,
        }
    }

    /// Executes the translation, modifying the solid in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn execute(&self, store: &mut SolidStore) -> Result<()> {
        let solid = store.solid_mut(self.solid)?;
        let planar = Vector2::new(self.displacement.x, self.displacement.y);
        if planar.norm_squared() > 0.0 {
            for region in &mut solid.regions {
                region.translate(&planar);
            }
        }
        solid.span.translate(self.displacement.z);
        Ok(())
    }
}
