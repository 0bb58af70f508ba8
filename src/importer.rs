use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, debug_span, info, info_span, warn};

use crate::config::ImportOptions;
use crate::document::{Document, ShapeRecord, SourcePoint};
use crate::error::{InputError, Result, VenueError};
use crate::kernel::{GeometryOps, PrismKernel};
use crate::label::LabelPlacer;
use crate::material::{ColorAttribute, Rgba};
use crate::math::coords::CoordinateMapping;
use crate::math::{Point3, Vector3};
use crate::operations::query::Aabb;
use crate::scene::{MeshObject, SceneObject, SceneSink};

/// Pipeline step at which a shape failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Extrude,
    Subtract,
    Tessellate,
    Color,
    Label,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Extrude => "extrude",
            Self::Subtract => "subtract",
            Self::Tessellate => "tessellate",
            Self::Color => "color",
            Self::Label => "label",
        };
        f.write_str(name)
    }
}

/// A failure isolated to one shape (or to its color or label step).
#[derive(Debug)]
pub struct ShapeFailure {
    /// Index of the shape record.
    pub shape: usize,
    /// Index of the hole being processed, if any.
    pub hole: Option<usize>,
    pub stage: Stage,
    pub error: VenueError,
}

impl fmt::Display for ShapeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape {}", self.shape)?;
        if let Some(hole) = self.hole {
            write!(f, " hole {hole}")?;
        }
        write!(f, " ({}): {}", self.stage, self.error)
    }
}

/// Summary of an import run.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Mesh objects linked into the scene.
    pub meshes: usize,
    /// Text objects linked into the scene.
    pub labels: usize,
    /// Successful hole subtractions.
    pub holes_cut: usize,
    /// Per-shape failures, in input order.
    pub failures: Vec<ShapeFailure>,
}

impl ImportReport {
    /// Returns `true` if no shape failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Imports venue documents into a scene through a geometry kernel.
pub struct Importer<K: GeometryOps> {
    kernel: K,
    options: ImportOptions,
    mapping: CoordinateMapping,
    labels: LabelPlacer,
}

impl Importer<PrismKernel> {
    /// Creates an importer backed by the built-in prism kernel.
    #[must_use]
    pub fn with_prism_kernel(options: ImportOptions) -> Self {
        Self::new(PrismKernel::new(), options)
    }
}

impl<K: GeometryOps> Importer<K> {
    #[must_use]
    pub fn new(kernel: K, options: ImportOptions) -> Self {
        Self {
            kernel,
            mapping: CoordinateMapping::new(options.unit_divisor),
            labels: LabelPlacer::new(&options),
            options,
        }
    }

    /// The geometry kernel.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Consumes the importer and returns its kernel.
    pub fn into_kernel(self) -> K {
        self.kernel
    }

    /// Imports every shape of `document` into `scene`, in order.
    ///
    /// Errors local to a shape are recorded in the report and do not stop
    /// the import. A shape whose geometry fails is skipped entirely,
    /// including its label. A color failure leaves the mesh uncolored. A
    /// visible label without text or font size fails alone.
    ///
    /// # Errors
    ///
    /// Returns [`VenueError::MalformedInput`] if the document is missing a
    /// required key. Nothing is added to the scene in that case.
    pub fn import_document<S: SceneSink>(
        &mut self,
        document: &Document,
        scene: &mut S,
    ) -> Result<ImportReport> {
        document.validate()?;
        let _span = info_span!("import", shapes = document.len()).entered();

        let mut report = ImportReport::default();
        for (index, shape) in document.shapes.iter().enumerate() {
            let _shape_span = debug_span!("shape", index).entered();

            if shape.produces_mesh() {
                match self.build_mesh(index, shape, &mut report) {
                    Ok(mesh) => {
                        scene.add_object(SceneObject::Mesh(mesh));
                        report.meshes += 1;
                    }
                    Err(failure) => {
                        warn!(%failure, "shape skipped");
                        report.failures.push(failure);
                        continue;
                    }
                }
            }

            if let Some(label) = shape.visible_label() {
                let parent = shape.vertexes.as_deref().unwrap_or_default();
                match self.labels.place(index, label_name(shape, index), label, parent) {
                    Ok(text) => {
                        scene.add_object(SceneObject::Text(text));
                        report.labels += 1;
                    }
                    Err(error) => {
                        let failure = ShapeFailure {
                            shape: index,
                            hole: None,
                            stage: Stage::Label,
                            error,
                        };
                        warn!(%failure, "label skipped");
                        report.failures.push(failure);
                    }
                }
            }
        }

        info!(
            meshes = report.meshes,
            labels = report.labels,
            holes = report.holes_cut,
            failures = report.failures.len(),
            "import finished"
        );
        Ok(report)
    }

    /// Builds the mesh of one shape: solid, holes, tessellation, color.
    ///
    /// The shape solid is released from the kernel on every path.
    fn build_mesh(
        &mut self,
        index: usize,
        shape: &ShapeRecord,
        report: &mut ImportReport,
    ) -> std::result::Result<MeshObject, ShapeFailure> {
        let fail = move |stage: Stage, hole: Option<usize>| move |error: VenueError| ShapeFailure {
            shape: index,
            hole,
            stage,
            error,
        };

        let (z, depth) = placement(index, shape).map_err(fail(Stage::Extrude, None))?;
        let vertexes = shape.vertexes.as_deref().unwrap_or_default();
        let solid = self
            .build_solid(vertexes, z, depth, depth)
            .map_err(fail(Stage::Extrude, None))?;

        // Cutters always reach through the shape, however tall it is.
        let cutter_thickness = self.options.hole_thickness.max(depth);
        for (hole_index, hole) in shape.holes.iter().enumerate() {
            let cut = self
                .build_solid(hole, z, cutter_thickness, depth)
                .map_err(fail(Stage::Extrude, Some(hole_index)))
                .and_then(|tool| {
                    self.kernel
                        .subtract(solid, tool)
                        .map_err(fail(Stage::Subtract, Some(hole_index)))
                });
            if let Err(failure) = cut {
                self.release(solid);
                return Err(failure);
            }
            debug!(hole = hole_index, "hole subtracted");
            report.holes_cut += 1;
        }

        let mesh = self.kernel.tessellate(solid);
        self.release(solid);
        let mesh = mesh.map_err(fail(Stage::Tessellate, None))?;
        if let Some(bounds) = Aabb::of_mesh(&mesh) {
            debug!(min = ?bounds.min, max = ?bounds.max, "mesh built");
        }

        // Colors go on last: the boolean rebuilds the vertex set.
        let colors = shape
            .material
            .as_ref()
            .ok_or_else(|| InputError::MissingKey {
                shape: index,
                key: "material",
            })
            .map_err(VenueError::from)
            .and_then(|material| Rgba::from_material(material).map_err(VenueError::from));
        let colors = match colors {
            Ok(color) => Some(ColorAttribute::uniform(color, mesh.vertex_count())),
            Err(error) => {
                let failure = fail(Stage::Color, None)(error);
                warn!(%failure, "mesh left uncolored");
                report.failures.push(failure);
                None
            }
        };

        Ok(MeshObject {
            name: shape.object_name(index),
            shape: index,
            mesh,
            colors,
        })
    }

    /// Extrudes an outline in scene units and lifts it by `lift / 2`.
    fn build_solid(
        &mut self,
        outline: &[SourcePoint],
        z: f64,
        thickness: f64,
        lift: f64,
    ) -> Result<K::Solid> {
        let face: Vec<Point3> = outline
            .iter()
            .map(|p| self.mapping.to_scene_at(p.x, p.y, z))
            .collect();
        let solid = self.kernel.extrude(&face, thickness)?;
        if let Err(error) = self
            .kernel
            .translate(solid, Vector3::new(0.0, 0.0, lift / 2.0))
        {
            self.release(solid);
            return Err(error);
        }
        Ok(solid)
    }

    fn release(&mut self, solid: K::Solid) {
        if let Err(error) = self.kernel.remove(solid) {
            debug!(?solid, %error, "solid already released");
        }
    }
}

/// Imports a `.json` venue file into `scene` with the built-in kernel.
///
/// # Errors
///
/// Returns [`VenueError::MalformedInput`] if the file cannot be read or
/// parsed. Per-shape errors are reported in the returned [`ImportReport`].
pub fn import_file<P: AsRef<Path>, S: SceneSink>(
    path: P,
    scene: &mut S,
    options: ImportOptions,
) -> Result<ImportReport> {
    let document = Document::from_path(path)?;
    Importer::with_prism_kernel(options).import_document(&document, scene)
}

/// `position.z` and `scale.z` of a mesh-producing shape.
fn placement(index: usize, shape: &ShapeRecord) -> Result<(f64, f64)> {
    let missing = |key| InputError::MissingKey { shape: index, key };
    let geometry = shape.geometry.as_ref().ok_or_else(|| missing("geometry"))?;
    let z = geometry
        .position
        .z
        .ok_or_else(|| missing("geometry.position.z"))?;
    let depth = geometry.scale.z.ok_or_else(|| missing("geometry.scale.z"))?;
    Ok((z, depth))
}

fn label_name(shape: &ShapeRecord, index: usize) -> String {
    match &shape.id {
        Some(id) => format!("{id}.label"),
        None => format!("Label.{index:03}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, MaterialError, OperationError};

    fn import(json: &str) -> (Vec<SceneObject>, ImportReport, PrismKernel) {
        let document = Document::from_json_str(json).unwrap();
        let mut importer = Importer::with_prism_kernel(ImportOptions::default());
        let mut scene = Vec::new();
        let report = importer.import_document(&document, &mut scene).unwrap();
        (scene, report, importer.into_kernel())
    }

    #[test]
    fn bad_color_keeps_uncolored_mesh_and_label() {
        let (scene, report, _) = import(
            r#"[{"vertexes": [{"x":0,"y":0},{"x":10,"y":0},{"x":10,"y":10}],
                 "geometry": {"position": {"z": 0}, "scale": {"z": 1}, "visible": true},
                 "material": {"color": "green", "opacity": 1},
                 "label": {"text": "T", "fontSize": 3, "visible": true}}]"#,
        );
        assert_eq!(report.meshes, 1);
        assert_eq!(report.labels, 1);
        assert_eq!(report.failures.len(), 1);
        let failure = &report.failures[0];
        assert_eq!(failure.stage, Stage::Color);
        assert!(matches!(
            failure.error,
            VenueError::InvalidMaterial(MaterialError::MalformedColor(_))
        ));
        assert!(scene[0].as_mesh().unwrap().colors.is_none());
    }

    #[test]
    fn degenerate_shape_skips_mesh_and_label() {
        let (scene, report, kernel) = import(
            r##"[{"vertexes": [{"x":0,"y":0},{"x":10,"y":0}],
                  "geometry": {"position": {"z": 0}, "scale": {"z": 1}, "visible": true},
                  "material": {"color": "#FFFFFF", "opacity": 1},
                  "label": {"text": "T", "fontSize": 3, "visible": true}}]"##,
        );
        assert!(scene.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].stage, Stage::Extrude);
        assert!(matches!(
            report.failures[0].error,
            VenueError::InvalidGeometry(GeometryError::TooFewVertices { count: 2 })
        ));
        assert_eq!(kernel.live_solids(), 0);
    }

    #[test]
    fn failed_hole_reports_index_and_frees_solids() {
        // The second hole covers the whole shape.
        let (scene, report, kernel) = import(
            r##"[{"vertexes": [{"x":0,"y":0},{"x":10,"y":0},{"x":10,"y":10},{"x":0,"y":10}],
                  "geometry": {"position": {"z": 0}, "scale": {"z": 1}, "visible": true},
                  "material": {"color": "#FFFFFF", "opacity": 1},
                  "holes": [
                    [{"x":2,"y":2},{"x":4,"y":2},{"x":4,"y":4},{"x":2,"y":4}],
                    [{"x":-5,"y":-5},{"x":15,"y":-5},{"x":15,"y":15},{"x":-5,"y":15}]
                  ]}]"##,
        );
        assert!(scene.is_empty());
        assert_eq!(report.holes_cut, 1);
        let failure = &report.failures[0];
        assert_eq!((failure.shape, failure.hole, failure.stage), (0, Some(1), Stage::Subtract));
        assert!(matches!(
            failure.error,
            VenueError::GeometryOperationFailed(OperationError::Failed(_))
        ));
        assert_eq!(kernel.live_solids(), 0);
    }

    #[test]
    fn label_without_parent_vertexes_fails_alone() {
        let (scene, report, _) = import(
            r#"[{"label": {"text": "Orphan", "fontSize": 3, "visible": true}},
                {"label": {"text": "Also", "fontSize": 3, "visible": true},
                 "vertexes": [{"x": 4, "y": 6}], "geometry": {"visible": false}}]"#,
        );
        assert_eq!(scene.len(), 1);
        assert_eq!(scene[0].as_text().unwrap().body, "Also");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].stage, Stage::Label);
        assert!(matches!(
            report.failures[0].error,
            VenueError::InvalidGeometry(GeometryError::EmptyPointSet)
        ));
    }

    #[test]
    fn label_content_is_only_required_when_visible() {
        let (scene, report, _) = import(
            r##"[{"vertexes": [{"x":0,"y":0},{"x":10,"y":0},{"x":10,"y":10}],
                  "geometry": {"position": {"z": 0}, "scale": {"z": 1}, "visible": true},
                  "material": {"color": "#00FF00", "opacity": 1},
                  "label": {"visible": false}},
                 {"label": {"text": "x"}},
                 {"vertexes": [{"x": 4, "y": 6}], "geometry": {"visible": false},
                  "label": {"text": "x", "visible": true}}]"##,
        );
        assert_eq!(scene.len(), 1);
        assert!(scene[0].as_mesh().is_some());
        assert_eq!(report.labels, 0);
        assert_eq!(report.failures.len(), 1);
        let failure = &report.failures[0];
        assert_eq!((failure.shape, failure.stage), (2, Stage::Label));
        assert!(matches!(
            failure.error,
            VenueError::MalformedInput(InputError::MissingKey {
                shape: 2,
                key: "label.fontSize"
            })
        ));
    }

    #[test]
    fn holes_reach_through_shapes_taller_than_the_cutter() {
        let (scene, report, kernel) = import(
            r##"[{"vertexes": [{"x":0,"y":0},{"x":100,"y":0},{"x":100,"y":100},{"x":0,"y":100}],
                  "holes": [[{"x":40,"y":40},{"x":60,"y":40},{"x":60,"y":60},{"x":40,"y":60}]],
                  "geometry": {"position": {"z": 0}, "scale": {"z": 1500}, "visible": true},
                  "material": {"color": "#FFFFFF", "opacity": 1}}]"##,
        );
        assert!(report.is_clean());
        assert_eq!(report.holes_cut, 1);
        assert_eq!(scene.len(), 1);
        assert_eq!(kernel.live_solids(), 0);
    }

    #[test]
    fn malformed_document_adds_nothing() {
        let document = Document {
            shapes: vec![
                ShapeRecord::default(),
                ShapeRecord {
                    vertexes: Some(vec![]),
                    ..ShapeRecord::default()
                },
            ],
        };
        let mut scene = Vec::new();
        let result = Importer::with_prism_kernel(ImportOptions::default())
            .import_document(&document, &mut scene);
        assert!(matches!(
            result,
            Err(VenueError::MalformedInput(InputError::MissingKey { shape: 1, .. }))
        ));
        assert!(scene.is_empty());
    }

    #[test]
    fn failure_display_names_shape_and_hole() {
        let failure = ShapeFailure {
            shape: 3,
            hole: Some(1),
            stage: Stage::Subtract,
            error: OperationError::Failed("boom".into()).into(),
        };
        assert_eq!(failure.to_string(), "shape 3 hole 1 (subtract): operation failed: boom");
    }
}
