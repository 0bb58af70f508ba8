mod json;
mod obj;

pub use json::write_json;
pub use obj::write_obj;

use std::fmt;
use std::str::FromStr;

/// Output format for a scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Wavefront OBJ with vertex colors; labels become comments.
    #[default]
    Obj,
    /// The full scene serialized as JSON.
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Obj => "obj",
            Self::Json => "json",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "obj" => Ok(Self::Obj),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown export format `{other}`")),
        }
    }
}

/// Writes `scene` in the chosen format.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_scene<W: std::io::Write>(
    scene: &crate::scene::Scene,
    format: ExportFormat,
    writer: W,
) -> std::io::Result<()> {
    match format {
        ExportFormat::Obj => write_obj(scene, writer),
        ExportFormat::Json => write_json(scene, writer),
    }
}
