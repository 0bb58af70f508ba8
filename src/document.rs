use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::scene::Alignment;

/// A point in source units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourcePoint {
    pub x: f64,
    pub y: f64,
}

/// Optional x/y/z triple, used for positions, scales and rotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

/// Placement and extrusion depth of a shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryRecord {
    #[serde(default)]
    pub position: Axes,
    /// `scale.z` is the extrusion depth.
    #[serde(default)]
    pub scale: Axes,
    pub visible: Option<bool>,
}

/// Flat color of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// `#RRGGBB`.
    pub color: String,
    /// Alpha in `[0, 1]`.
    pub opacity: f64,
}

/// Text label attached to a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRecord {
    /// Required once the label is visible; hidden labels are never read.
    pub text: Option<String>,
    #[serde(rename = "fontSize")]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub align: Alignment,
    /// Only `z` is used unless offset placement is enabled.
    #[serde(default)]
    pub position: Axes,
    /// Degrees.
    #[serde(default)]
    pub rotation: Axes,
    /// A label without this key is never created.
    pub visible: Option<bool>,
}

impl LabelRecord {
    /// The label's text and font size.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingKey`] naming whichever of the two is absent.
    pub fn content(&self, shape: usize) -> Result<(&str, f64), InputError> {
        let missing = |key| InputError::MissingKey { shape, key };
        let text = self.text.as_deref().ok_or_else(|| missing("label.text"))?;
        let font_size = self.font_size.ok_or_else(|| missing("label.fontSize"))?;
        Ok((text, font_size))
    }
}

/// One entry of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: Option<String>,
    pub vertexes: Option<Vec<SourcePoint>>,
    pub geometry: Option<GeometryRecord>,
    #[serde(default)]
    pub holes: Vec<Vec<SourcePoint>>,
    pub material: Option<MaterialRecord>,
    pub label: Option<LabelRecord>,
}

impl ShapeRecord {
    /// Whether this shape yields a mesh: it has vertexes and is visible.
    #[must_use]
    pub fn produces_mesh(&self) -> bool {
        self.vertexes.is_some()
            && self
                .geometry
                .as_ref()
                .and_then(|g| g.visible)
                .unwrap_or(false)
    }

    /// The label to create, if the record carries one with `visible: true`.
    #[must_use]
    pub fn visible_label(&self) -> Option<&LabelRecord> {
        self.label.as_ref().filter(|l| l.visible == Some(true))
    }

    /// Name given to objects created from this shape.
    #[must_use]
    pub fn object_name(&self, index: usize) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("Mesh.{index:03}"),
        }
    }
}

/// A parsed and validated venue document: an array of shape records.
///
/// Every key is optional at the serde level. [`Document::validate`] then
/// enforces the keys the import pipeline dereferences, so a broken file is
/// rejected before any scene mutation happens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub shapes: Vec<ShapeRecord>,
}

impl Document {
    /// Loads a document from a `.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if the extension is not `.json`, the file
    /// cannot be read, or its contents are malformed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !is_json {
            return Err(InputError::UnsupportedExtension(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parses and validates a document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] on a parse failure or a missing required key.
    pub fn from_json_str(json: &str) -> Result<Self, InputError> {
        let document: Self = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Checks that every key the pipeline needs is present.
    ///
    /// Shapes with vertexes need `geometry` and `geometry.visible`. Shapes
    /// that produce a mesh additionally need `geometry.position.z`,
    /// `geometry.scale.z` and `material`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingKey`] for the first missing key.
    pub fn validate(&self) -> Result<(), InputError> {
        for (shape, record) in self.shapes.iter().enumerate() {
            if record.vertexes.is_none() {
                continue;
            }
            let missing = |key| InputError::MissingKey { shape, key };

            let geometry = record.geometry.as_ref().ok_or_else(|| missing("geometry"))?;
            let visible = geometry.visible.ok_or_else(|| missing("geometry.visible"))?;
            if !visible {
                continue;
            }
            if geometry.position.z.is_none() {
                return Err(missing("geometry.position.z"));
            }
            if geometry.scale.z.is_none() {
                return Err(missing("geometry.scale.z"));
            }
            if record.material.is_none() {
                return Err(missing("material"));
            }
        }
        Ok(())
    }

    /// Number of shape records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the document holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
