use geo::BooleanOps;

use crate::error::{OperationError, Result};
use crate::topology::{PrismSolid, SolidId, SolidStore};

use super::profile::{from_multi_polygon, to_multi_polygon};

/// Subtracts a tool prism from a target prism.
///
/// The tool is consumed: it is removed from the store whether or not the
/// subtraction succeeds. The target is modified in place.
///
/// A tool that spans the full height of the target cuts through it. A tool
/// that misses the target (in height or in plan) leaves it unchanged. A tool
/// that only partially pierces the target cannot be represented as a prism
/// and is rejected.
pub struct Subtract {
    target: SolidId,
    tool: SolidId,
}

impl Subtract {
    /// Creates a new `Subtract` operation (target - tool).
    #[must_use]
    pub fn new(target: SolidId, tool: SolidId) -> Self {
        Self { target, tool }
    }

    /// Executes the subtraction and returns the target ID.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::SolidNotFound`] if either solid is missing,
    /// and [`OperationError::Failed`] if the tool only partially pierces the
    /// target or the result would be empty.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        if self.target == self.tool {
            return Err(
                OperationError::InvalidInput("cannot subtract a solid from itself".into()).into(),
            );
        }
        let tool = store.remove_solid(self.tool)?;
        let target = store.solid_mut(self.target)?;

        if !tool.span.overlaps(&target.span) || !plans_overlap(&tool, target) {
            return Ok(self.target);
        }
        if !tool.span.covers(&target.span) {
            return Err(OperationError::Failed(format!(
                "tool spans z [{}, {}] and only partially pierces target spanning z [{}, {}]",
                tool.span.min, tool.span.max, target.span.min, target.span.max
            ))
            .into());
        }

        let difference =
            to_multi_polygon(&target.regions).difference(&to_multi_polygon(&tool.regions));
        let regions = from_multi_polygon(&difference);
        if regions.is_empty() {
            return Err(OperationError::Failed("subtraction removes the entire solid".into()).into());
        }

        target.regions = regions;
        Ok(self.target)
    }
}

/// Whether the plan-view bounds of the two prisms intersect.
fn plans_overlap(a: &PrismSolid, b: &PrismSolid) -> bool {
    match (a.plan_bounds(), b.plan_bounds()) {
        (Some((amin, amax)), Some((bmin, bmax))) => {
            amin.x < bmax.x && bmin.x < amax.x && amin.y < bmax.y && bmin.y < amax.y
        }
        _ => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::VenueError;
    use crate::math::{Point3, Vector3};
    use crate::operations::shaping::Extrude;
    use crate::operations::transform::Translate;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point3> {
        vec![
            Point3::new(x0, y0, 0.0),
            Point3::new(x1, y0, 0.0),
            Point3::new(x1, y1, 0.0),
            Point3::new(x0, y1, 0.0),
        ]
    }

    /// A slab spanning z in `[0, height]`.
    fn slab(store: &mut SolidStore, face: Vec<Point3>, height: f64) -> SolidId {
        let id = Extrude::new(face, height).execute(store).unwrap();
        Translate::new(id, Vector3::new(0.0, 0.0, height / 2.0))
            .execute(store)
            .unwrap();
        id
    }

    #[test]
    fn through_hole_leaves_inner_ring() {
        let mut store = SolidStore::new();
        let target = slab(&mut store, rect(0.0, 0.0, 10.0, 10.0), 5.0);
        let tool = Extrude::new(rect(4.0, 4.0, 6.0, 6.0), 999.0)
            .execute(&mut store)
            .unwrap();

        let result = Subtract::new(target, tool).execute(&mut store).unwrap();
        assert_eq!(result, target);
        assert!(!store.contains(tool));
        assert_eq!(store.len(), 1);

        let solid = store.solid(target).unwrap();
        assert_eq!(solid.regions.len(), 1);
        assert_eq!(solid.regions[0].holes().len(), 1);
        assert_relative_eq!(solid.area(), 96.0, epsilon = 1e-9);
        assert_relative_eq!(solid.span.min, 0.0);
        assert_relative_eq!(solid.span.max, 5.0);
    }

    #[test]
    fn sequential_holes_accumulate() {
        let mut store = SolidStore::new();
        let target = slab(&mut store, rect(0.0, 0.0, 10.0, 10.0), 1.0);
        for (x0, y0) in [(1.0, 1.0), (6.0, 6.0)] {
            let tool = Extrude::new(rect(x0, y0, x0 + 2.0, y0 + 2.0), 999.0)
                .execute(&mut store)
                .unwrap();
            Subtract::new(target, tool).execute(&mut store).unwrap();
        }
        let solid = store.solid(target).unwrap();
        assert_eq!(solid.regions[0].holes().len(), 2);
        assert_relative_eq!(solid.area(), 92.0, epsilon = 1e-9);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn cut_across_splits_target() {
        let mut store = SolidStore::new();
        let target = slab(&mut store, rect(0.0, 0.0, 10.0, 2.0), 1.0);
        let tool = Extrude::new(rect(4.0, -1.0, 6.0, 3.0), 999.0)
            .execute(&mut store)
            .unwrap();
        Subtract::new(target, tool).execute(&mut store).unwrap();

        let solid = store.solid(target).unwrap();
        assert_eq!(solid.regions.len(), 2);
        assert_relative_eq!(solid.area(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn disjoint_tool_leaves_target_unchanged() {
        let mut store = SolidStore::new();
        let target = slab(&mut store, rect(0.0, 0.0, 1.0, 1.0), 1.0);
        let before = store.solid(target).unwrap().clone();
        let tool = Extrude::new(rect(5.0, 5.0, 6.0, 6.0), 999.0)
            .execute(&mut store)
            .unwrap();

        Subtract::new(target, tool).execute(&mut store).unwrap();
        assert_eq!(store.solid(target).unwrap(), &before);
        assert!(!store.contains(tool));
    }

    #[test]
    fn partial_pierce_fails_and_consumes_tool() {
        let mut store = SolidStore::new();
        let target = slab(&mut store, rect(0.0, 0.0, 10.0, 10.0), 10.0);
        // Spans z in [-1, 1]: enters the bottom of the target only.
        let tool = Extrude::new(rect(4.0, 4.0, 6.0, 6.0), 2.0)
            .execute(&mut store)
            .unwrap();

        let result = Subtract::new(target, tool).execute(&mut store);
        assert!(matches!(
            result,
            Err(VenueError::GeometryOperationFailed(OperationError::Failed(_)))
        ));
        assert!(!store.contains(tool));
        assert!(store.contains(target));
    }

    #[test]
    fn covering_tool_fails() {
        let mut store = SolidStore::new();
        let target = slab(&mut store, rect(0.0, 0.0, 1.0, 1.0), 1.0);
        let tool = Extrude::new(rect(-1.0, -1.0, 2.0, 2.0), 999.0)
            .execute(&mut store)
            .unwrap();

        let result = Subtract::new(target, tool).execute(&mut store);
        assert!(matches!(
            result,
            Err(VenueError::GeometryOperationFailed(OperationError::Failed(_)))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_target_still_consumes_tool() {
        let mut store = SolidStore::new();
        let target = slab(&mut store, rect(0.0, 0.0, 1.0, 1.0), 1.0);
        store.remove_solid(target).unwrap();
        let tool = Extrude::new(rect(0.0, 0.0, 1.0, 1.0), 999.0)
            .execute(&mut store)
            .unwrap();

        let result = Subtract::new(target, tool).execute(&mut store);
        assert!(matches!(
            result,
            Err(VenueError::GeometryOperationFailed(OperationError::SolidNotFound))
        ));
        assert!(store.is_empty());
    }
}
