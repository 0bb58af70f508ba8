use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::FixedFaceHandle;
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3};
use crate::topology::ProfileRegion;

use super::TriangleMesh;

/// Tessellates a horizontal planar region (outer ring plus holes) into a
/// triangle mesh lying at a fixed height.
pub struct TessellateFace<'a> {
    region: &'a ProfileRegion,
    z: f64,
    facing_up: bool,
}

impl<'a> TessellateFace<'a> {
    /// Creates a new `TessellateFace` operation. `facing_up` selects a `+z`
    /// normal, otherwise the face looks down.
    #[must_use]
    pub fn new(region: &'a ProfileRegion, z: f64, facing_up: bool) -> Self {
        Self {
            region,
            z,
            facing_up,
        }
    }

    /// Executes the tessellation, returning a triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if a ring has fewer than 3 points, if a vertex
    /// cannot be inserted, or if two ring edges cross.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let mut cdt = ConstrainedDelaunayTriangulation::<SpadePoint2<f64>>::new();
        for ring in self.region.rings() {
            let points: Vec<_> = ring.iter().map(|p| SpadePoint2::new(p.x, p.y)).collect();
            insert_constraint_loop(&mut cdt, &points)?;
        }

        let interior_faces = classify_interior_faces(&cdt);
        let normal = if self.facing_up {
            Vector3::z()
        } else {
            -Vector3::z()
        };

        let mut mesh = TriangleMesh::default();
        let mut vertex_map: HashMap<usize, u32> = HashMap::new();

        for face_handle in cdt.inner_faces() {
            if !interior_faces.contains(&face_handle.fix().index()) {
                continue;
            }

            let mut tri_indices = [0u32; 3];
            for (i, vh) in face_handle.vertices().iter().enumerate() {
                let idx = vh.fix().index();
                tri_indices[i] = *vertex_map.entry(idx).or_insert_with(|| {
                    let pos = vh.position();
                    mesh.push_vertex(Point3::new(pos.x, pos.y, self.z), normal)
                });
            }

            // Inner faces are counter-clockwise seen from +z.
            if !self.facing_up {
                tri_indices.swap(1, 2);
            }
            mesh.indices.push(tri_indices);
        }

        if mesh.is_empty() {
            return Err(OperationError::Failed("region produced no triangles".into()).into());
        }
        Ok(mesh)
    }
}

/// Inserts a closed ring as constraint edges into the CDT.
fn insert_constraint_loop(
    cdt: &mut ConstrainedDelaunayTriangulation<SpadePoint2<f64>>,
    points: &[SpadePoint2<f64>],
) -> Result<()> {
    if points.len() < 3 {
        return Err(
            OperationError::Failed("constraint loop needs at least 3 points".into()).into(),
        );
    }

    let mut handles = Vec::with_capacity(points.len());
    for &pt in points {
        let h = cdt
            .insert(pt)
            .map_err(|e: InsertionError| OperationError::Failed(format!("CDT insert: {e}")))?;
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        // Adding a constraint that crosses an existing one panics.
        if !cdt.can_add_constraint(from, to) {
            return Err(OperationError::Failed("ring edges intersect".into()).into());
        }
        cdt.add_constraint(from, to);
    }

    Ok(())
}

/// Classifies which inner faces of the CDT are inside the region using flood-fill.
///
/// Starts from faces adjacent to the outer (infinite) face at depth 0. Each time
/// a constraint edge is crossed, depth increments. Odd depth = interior.
fn classify_interior_faces(
    cdt: &ConstrainedDelaunayTriangulation<SpadePoint2<f64>>,
) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<spade::handles::InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() == outer_fix {
            if let Some(inner) = edge.rev().face().as_inner() {
                let idx = inner.fix().index();
                if depth_map.contains_key(&idx) {
                    continue;
                }
                let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
                depth_map.insert(idx, depth);
                if depth % 2 == 1 {
                    interior.insert(idx);
                }
                queue.push_back((inner.fix(), depth));
            }
        }
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        let face = cdt.face(face_fix);
        for edge in face.adjacent_edges() {
            let neighbor = edge.rev().face();
            if let Some(inner_neighbor) = neighbor.as_inner() {
                let n_idx = inner_neighbor.fix().index();
                if depth_map.contains_key(&n_idx) {
                    continue;
                }
                let new_depth = depth + u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
                depth_map.insert(n_idx, new_depth);
                if new_depth % 2 == 1 {
                    interior.insert(n_idx);
                }
                queue.push_back((inner_neighbor.fix(), new_depth));
            }
        }
    }

    interior
}
