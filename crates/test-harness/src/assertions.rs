//! Mesh assertions with diagnostic output.
//!
//! Every failure names the first field and element where the meshes differ.

use mesh_types::ObjMesh;

use crate::fixtures::Fixture;
use crate::helpers::HarnessError;

fn fail(ctx: &str, detail: String) -> HarnessError {
    HarnessError::AssertionFailed {
        detail: format!("[{}] {}", ctx, detail),
    }
}

fn compare_seq<T: PartialEq + std::fmt::Debug>(
    field: &str,
    expected: &[T],
    actual: &[T],
    ctx: &str,
) -> Result<(), HarnessError> {
    if expected.len() != actual.len() {
        return Err(fail(
            ctx,
            format!(
                "{}: expected {} entries, got {}",
                field,
                expected.len(),
                actual.len()
            ),
        ));
    }
    match expected.iter().zip(actual).position(|(e, a)| e != a) {
        Some(i) => Err(fail(
            ctx,
            format!(
                "{}[{}]: expected {:?}, got {:?}",
                field, i, expected[i], actual[i]
            ),
        )),
        None => Ok(()),
    }
}

/// Assert two meshes are equal field by field, element by element.
pub fn assert_meshes_equal(
    expected: &ObjMesh,
    actual: &ObjMesh,
    ctx: &str,
) -> Result<(), HarnessError> {
    compare_seq("vertices", expected.vertices(), actual.vertices(), ctx)?;
    compare_seq("textures", expected.textures(), actual.textures(), ctx)?;
    compare_seq("normals", expected.normals(), actual.normals(), ctx)?;
    compare_seq("faces", expected.faces(), actual.faces(), ctx)?;
    if expected.is_triangle_mesh() != actual.is_triangle_mesh() {
        return Err(fail(
            ctx,
            format!(
                "is_triangle_mesh: expected {}, got {}",
                expected.is_triangle_mesh(),
                actual.is_triangle_mesh()
            ),
        ));
    }
    Ok(())
}

/// Assert a mesh has the counts and face sizes a fixture promises.
pub fn assert_fixture_shape(mesh: &ObjMesh, fixture: &Fixture) -> Result<(), HarnessError> {
    let ctx = fixture.name;
    let counts = [
        ("vertices", fixture.vertices, mesh.vertex_count()),
        ("textures", fixture.textures, mesh.texture_count()),
        ("normals", fixture.normals, mesh.normal_count()),
    ];
    for (field, expected, actual) in counts {
        if expected != actual {
            return Err(fail(
                ctx,
                format!("{}: expected {} entries, got {}", field, expected, actual),
            ));
        }
    }

    let sizes: Vec<usize> = mesh.faces().iter().map(Vec::len).collect();
    if sizes != fixture.face_sizes {
        return Err(fail(
            ctx,
            format!(
                "face sizes: expected {:?}, got {:?}",
                fixture.face_sizes, sizes
            ),
        ));
    }
    if mesh.is_triangle_mesh() != fixture.is_triangle_mesh {
        return Err(fail(
            ctx,
            format!(
                "is_triangle_mesh: expected {}, got {}",
                fixture.is_triangle_mesh,
                mesh.is_triangle_mesh()
            ),
        ));
    }
    Ok(())
}
