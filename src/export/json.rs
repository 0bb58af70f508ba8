use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::scene::{Scene, SceneObject};

#[derive(Serialize)]
struct SceneDocument<'a> {
    objects: Vec<&'a SceneObject>,
}

/// Writes the scene as pretty-printed JSON: `{"objects": [...]}` in
/// insertion order, each object tagged with its `kind`.
///
/// # Errors
///
/// Returns an I/O error if serialization or writing fails.
pub fn write_json<W: Write>(scene: &Scene, writer: W) -> std::io::Result<()> {
    let document = SceneDocument {
        objects: scene.iter().map(|(_, object)| object).collect(),
    };
    let mut w = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut w, &document)?;
    writeln!(w)?;
    w.flush()
}
