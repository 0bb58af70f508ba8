use serde::{Deserialize, Serialize};

use crate::material::ColorAttribute;
use crate::math::{Point3, Vector3};
use crate::tessellation::TriangleMesh;

/// Horizontal text alignment. Unknown values fall back to center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
    #[default]
    #[serde(other)]
    Center,
}

/// A triangulated, optionally colored solid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshObject {
    pub name: String,
    /// Index of the shape record the mesh was built from.
    pub shape: usize,
    pub mesh: TriangleMesh,
    /// Per-vertex colors, absent when the material could not be applied.
    pub colors: Option<ColorAttribute>,
}

/// A 3D text object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextObject {
    pub name: String,
    pub body: String,
    pub size: f64,
    pub align: Alignment,
    pub location: Point3,
    /// XYZ Euler angles in radians.
    pub rotation: Vector3,
}

/// Anything that can be linked into a scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SceneObject {
    Mesh(MeshObject),
    Text(TextObject),
}

impl SceneObject {
    /// The object's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Mesh(mesh) => &mesh.name,
            Self::Text(text) => &text.name,
        }
    }

    #[must_use]
    pub fn as_mesh(&self) -> Option<&MeshObject> {
        match self {
            Self::Mesh(mesh) => Some(mesh),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&TextObject> {
        match self {
            Self::Text(text) => Some(text),
            Self::Mesh(_) => None,
        }
    }
}
