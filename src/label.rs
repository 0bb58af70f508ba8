use crate::config::{ImportOptions, LabelPlacement, LABEL_Z_ROTATION_OFFSET_DEG};
use crate::document::{LabelRecord, SourcePoint};
use crate::error::Result;
use crate::math::coords::CoordinateMapping;
use crate::math::polygon_2d::bounding_box_midpoint;
use crate::math::{Point2, Point3, Vector3};
use crate::scene::TextObject;

/// Builds text objects from label records.
#[derive(Debug, Clone, Copy)]
pub struct LabelPlacer {
    mapping: CoordinateMapping,
    font_size_divisor: f64,
    placement: LabelPlacement,
}

impl LabelPlacer {
    #[must_use]
    pub fn new(options: &ImportOptions) -> Self {
        Self {
            mapping: CoordinateMapping::new(options.unit_divisor),
            font_size_divisor: options.font_size_divisor,
            placement: options.label_placement,
        }
    }

    /// Creates the text object for `label`, anchored on the bounding-box
    /// midpoint of the parent shape's `vertexes`.
    ///
    /// The label's own x/y position is ignored unless the placer was
    /// configured with [`LabelPlacement::ShapeCenterWithOffset`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::InputError::MissingKey`] if the label lacks
    /// its text or font size, and [`crate::error::GeometryError`] if the
    /// parent has no points or a coordinate is not finite.
    pub fn place(
        &self,
        shape: usize,
        name: String,
        label: &LabelRecord,
        parent: &[SourcePoint],
    ) -> Result<TextObject> {
        let (body, font_size) = label.content(shape)?;
        let points: Vec<Point2> = parent.iter().map(|p| Point2::new(p.x, p.y)).collect();
        let origin = bounding_box_midpoint(&points)?;

        let divisor = self.mapping.divisor();
        let mut anchor = self.mapping.to_scene(origin.x, origin.y);
        if self.placement == LabelPlacement::ShapeCenterWithOffset {
            anchor.x -= label.position.x.unwrap_or(0.0) / divisor;
            anchor.y -= label.position.y.unwrap_or(0.0) / divisor;
        }
        let z = label.position.z.map_or(0.0, |z| z / divisor);

        let rotation = Vector3::new(
            label.rotation.x.map_or(0.0, f64::to_radians),
            label.rotation.y.map_or(0.0, f64::to_radians),
            label
                .rotation
                .z
                .map_or(0.0, |z| (z + LABEL_Z_ROTATION_OFFSET_DEG).to_radians()),
        );

        Ok(TextObject {
            name,
            body: body.to_string(),
            size: font_size / self.font_size_divisor,
            align: label.align,
            location: Point3::new(anchor.x, anchor.y, z),
            rotation,
        })
    }
}
