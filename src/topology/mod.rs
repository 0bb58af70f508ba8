pub mod region;
pub mod solid;

pub use region::ProfileRegion;
pub use solid::{PrismSolid, SolidId, ZSpan};

use crate::error::OperationError;
use slotmap::SlotMap;

/// Central arena that owns all solids created by the prism kernel.
///
/// Solids are referenced via typed IDs (generational indices), so a
/// removed solid can never be reached through a stale handle.
#[derive(Debug, Default)]
pub struct SolidStore {
    solids: SlotMap<SolidId, PrismSolid>,
}

impl SolidStore {
    /// Creates a new, empty solid store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a solid and returns its ID.
    pub fn add_solid(&mut self, data: PrismSolid) -> SolidId {
        self.solids.insert(data)
    }

    /// Returns a reference to the solid, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::SolidNotFound`] if the ID is stale or unknown.
    pub fn solid(&self, id: SolidId) -> Result<&PrismSolid, OperationError> {
        self.solids.get(id).ok_or(OperationError::SolidNotFound)
    }

    /// Returns a mutable reference to the solid, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::SolidNotFound`] if the ID is stale or unknown.
    pub fn solid_mut(&mut self, id: SolidId) -> Result<&mut PrismSolid, OperationError> {
        self.solids.get_mut(id).ok_or(OperationError::SolidNotFound)
    }

    /// Removes a solid from the store and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::SolidNotFound`] if the ID is stale or unknown.
    pub fn remove_solid(&mut self, id: SolidId) -> Result<PrismSolid, OperationError> {
        self.solids.remove(id).ok_or(OperationError::SolidNotFound)
    }

    /// Returns `true` if the store holds a solid with this ID.
    #[must_use]
    pub fn contains(&self, id: SolidId) -> bool {
        self.solids.contains_key(id)
    }

    /// Number of live solids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    /// Returns `true` if the store holds no solids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }
}
