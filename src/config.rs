/// Source units per scene unit. Planar coordinates and label heights are
/// divided by this value.
pub const SOURCE_UNITS_PER_SCENE_UNIT: f64 = 10.0;

/// Solidify thickness of hole cutters. Taller shapes get cutters as tall
/// as themselves.
pub const HOLE_CUTTER_THICKNESS: f64 = 999.0;

/// Label text size is `fontSize / FONT_SIZE_DIVISOR`.
pub const FONT_SIZE_DIVISOR: f64 = 1.5;

/// Added to a label's z rotation (degrees) to compensate for the mirrored
/// x axis of the scene.
pub const LABEL_Z_ROTATION_OFFSET_DEG: f64 = 180.0;

/// Name of the per-vertex color attribute written onto meshes.
pub const COLOR_ATTRIBUTE_NAME: &str = "Color";

/// Where a label is anchored relative to its parent shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Bounding-box midpoint of the parent shape; the label's own x/y
    /// offsets are ignored. Produces the visually correct result for known
    /// exports.
    #[default]
    ShapeCenter,
    /// Bounding-box midpoint minus the label's x/y offsets (scaled by the
    /// unit divisor). The meaning of those offsets is not documented by the
    /// format, so this is opt-in.
    ShapeCenterWithOffset,
}

/// Options controlling an import run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportOptions {
    /// Source units per scene unit.
    pub unit_divisor: f64,
    /// Solidify thickness used for hole cutters.
    pub hole_thickness: f64,
    /// Label size divisor.
    pub font_size_divisor: f64,
    /// Label anchoring mode.
    pub label_placement: LabelPlacement,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            unit_divisor: SOURCE_UNITS_PER_SCENE_UNIT,
            hole_thickness: HOLE_CUTTER_THICKNESS,
            font_size_divisor: FONT_SIZE_DIVISOR,
            label_placement: LabelPlacement::default(),
        }
    }
}

impl ImportOptions {
    /// Creates options with the default conventions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of source units per scene unit.
    #[must_use]
    pub fn with_unit_divisor(mut self, unit_divisor: f64) -> Self {
        self.unit_divisor = unit_divisor;
        self
    }

    /// Sets the hole cutter thickness.
    #[must_use]
    pub fn with_hole_thickness(mut self, hole_thickness: f64) -> Self {
        self.hole_thickness = hole_thickness;
        self
    }

    /// Sets the label anchoring mode.
    #[must_use]
    pub fn with_label_placement(mut self, label_placement: LabelPlacement) -> Self {
        self.label_placement = label_placement;
        self
    }
}
