use std::fmt;
use std::io::{self, Write};

use mesh_types::{Corner, ObjMesh};

/// OBJ text rendering of a mesh.
struct ObjText<'a>(&'a ObjMesh);

impl fmt::Display for ObjText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mesh = self.0;
        for [x, y, z] in mesh.vertices() {
            writeln!(f, "v {} {} {}", x, y, z)?;
        }
        for [u, v] in mesh.textures() {
            writeln!(f, "vt {} {}", u, v)?;
        }
        for [x, y, z] in mesh.normals() {
            writeln!(f, "vn {} {} {}", x, y, z)?;
        }
        for face in mesh.faces() {
            f.write_str("f")?;
            for corner in face {
                write!(f, " {}", corner_token(corner))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Write a mesh back out as OBJ text.
///
/// Records are grouped by kind (`v`, `vt`, `vn`, then `f`). Floats use the
/// shortest representation that parses back to the same value, so
/// `parse(write_obj(mesh)) == mesh` for finite coordinates.
pub fn write_obj<W: Write>(mesh: &ObjMesh, writer: &mut W) -> io::Result<()> {
    write!(writer, "{}", ObjText(mesh))
}

/// Render a mesh as an OBJ string.
pub fn to_obj_string(mesh: &ObjMesh) -> String {
    ObjText(mesh).to_string()
}

fn corner_token(corner: &Corner) -> String {
    let field = |index: Option<u32>| index.map(|i| i.to_string()).unwrap_or_default();
    match (corner.vertex, corner.texture, corner.normal) {
        (Some(v), None, None) => v.to_string(),
        (vertex, texture, None) if vertex.is_some() || texture.is_some() => {
            format!("{}/{}", field(vertex), field(texture))
        }
        (vertex, texture, normal) => {
            format!("{}/{}/{}", field(vertex), field(texture), field(normal))
        }
    }
}
