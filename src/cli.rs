// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use venue_extrude::config::{HOLE_CUTTER_THICKNESS, SOURCE_UNITS_PER_SCENE_UNIT};
use venue_extrude::export::ExportFormat;
use venue_extrude::{ImportOptions, LabelPlacement};

#[derive(Parser, Debug, Clone)]
#[command(name = "venue-extrude")]
#[command(about = "Import a JSON venue floor plan as extruded, colored meshes", long_about = None)]
pub struct Cli {
    /// Venue geometry file (.json)
    pub input: PathBuf,

    /// Write the scene here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: obj or json
    #[arg(long, default_value_t = ExportFormat::Obj)]
    pub format: ExportFormat,

    /// Apply each label's own x/y offset on top of the shape center
    #[arg(long = "label-offsets")]
    pub label_offsets: bool,

    /// Source units per scene unit
    #[arg(long, default_value_t = SOURCE_UNITS_PER_SCENE_UNIT)]
    pub unit_divisor: f64,

    /// Extrusion depth of hole cutters
    #[arg(long = "hole-depth", default_value_t = HOLE_CUTTER_THICKNESS)]
    pub hole_depth: f64,
}

impl Cli {
    pub fn import_options(&self) -> ImportOptions {
        let placement = if self.label_offsets {
            LabelPlacement::ShapeCenterWithOffset
        } else {
            LabelPlacement::ShapeCenter
        };
        ImportOptions::new()
            .with_unit_divisor(self.unit_divisor)
            .with_hole_thickness(self.hole_depth)
            .with_label_placement(placement)
    }
}
