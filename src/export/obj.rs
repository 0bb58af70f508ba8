use std::io::{BufWriter, Write};

use crate::scene::{MeshObject, Scene, TextObject};

/// Writes every mesh of `scene` as a Wavefront OBJ object.
///
/// Vertex colors use the common `v x y z r g b` extension and are only
/// written for colored meshes. Labels have no OBJ representation and are
/// emitted as comments.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_obj<W: Write>(scene: &Scene, writer: W) -> std::io::Result<()> {
    let mut w = BufWriter::new(writer);
    writeln!(w, "# venue-extrude")?;

    // OBJ indices are global and 1-based.
    let mut base = 1usize;
    for mesh in scene.meshes() {
        write_mesh(&mut w, mesh, base)?;
        base += mesh.mesh.vertex_count();
    }
    for label in scene.labels() {
        write_label(&mut w, label)?;
    }

    w.flush()
}

fn write_mesh<W: Write>(w: &mut W, object: &MeshObject, base: usize) -> std::io::Result<()> {
    let mesh = &object.mesh;
    writeln!(w, "o {}", object.name)?;

    let colors = object.colors.as_ref().map(|attr| &attr.data);
    for (i, p) in mesh.vertices.iter().enumerate() {
        match colors.and_then(|data| data.get(i)) {
            Some(c) => writeln!(w, "v {} {} {} {} {} {}", p.x, p.y, p.z, c.r, c.g, c.b)?,
            None => writeln!(w, "v {} {} {}", p.x, p.y, p.z)?,
        }
    }
    for n in &mesh.normals {
        writeln!(w, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for tri in &mesh.indices {
        let [a, b, c] = tri.map(|i| i as usize + base);
        writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    Ok(())
}

fn write_label<W: Write>(w: &mut W, label: &TextObject) -> std::io::Result<()> {
    let l = &label.location;
    let r = &label.rotation;
    writeln!(
        w,
        "# label {} {:?} at {} {} {} rotation {} {} {} size {} align {:?}",
        label.name, label.body, l.x, l.y, l.z, r.x, r.y, r.z, label.size, label.align
    )
}
