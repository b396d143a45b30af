//! Wavefront OBJ export.
//!
//! Writes `v` (xyz of each position), `vn` (xyz of each normal) and
//! triangle faces as `f a//a b//b c//c` with 1-based indices. The `w`
//! components are dropped.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::types::Mesh;

/// Write `mesh` as a single OBJ object named `name`.
pub fn write_obj<W: Write>(writer: &mut W, name: &str, mesh: &Mesh) -> io::Result<()> {
    writeln!(writer, "o {name}")?;

    for i in 0..mesh.vertex_count() {
        let [x, y, z, _] = mesh.position(i);
        writeln!(writer, "v {x} {y} {z}")?;
    }
    for i in 0..mesh.vertex_count() {
        let [x, y, z, _] = mesh.normal(i);
        writeln!(writer, "vn {x} {y} {z}")?;
    }
    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }

    Ok(())
}

/// Write `mesh` to `<dir>/<name>.obj`, returning the path written.
pub fn save_obj(dir: &Path, name: &str, mesh: &Mesh) -> io::Result<PathBuf> {
    let path = dir.join(format!("{name}.obj"));
    let mut writer = BufWriter::new(File::create(&path)?);
    write_obj(&mut writer, name, mesh)?;
    writer.flush()?;
    Ok(path)
}
