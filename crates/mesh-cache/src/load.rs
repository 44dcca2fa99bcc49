use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use mesh_types::{faces_are_triangles, Face, ObjMesh};
use ndarray::{Array0, Array2};
use ndarray_npy::ReadNpyExt;
use tracing::{debug, info, instrument};
use zip::ZipArchive;

use crate::errors::{read_npy_error, CacheError, FormatError};
use crate::fields::{check_header, Field};

/// Reconstruct a mesh from a cache archive.
///
/// Fields are looked up by entry name. The archive must hold exactly the
/// five cache fields, and the stored triangle flag must agree with the
/// stored faces.
pub fn read_cache<R: Read + Seek>(reader: R) -> Result<ObjMesh, CacheError> {
    let mut archive = ZipArchive::new(reader)?;
    let version = check_header(archive.comment())?;
    check_field_set(&archive)?;

    let vertices = read_rows::<_, 3>(&mut archive, Field::Vertices)?;
    let textures = read_rows::<_, 2>(&mut archive, Field::Textures)?;
    let normals = read_rows::<_, 3>(&mut archive, Field::Normals)?;
    let faces = read_faces(&mut archive)?;

    let stored = {
        let entry = archive.by_name(Field::IsTriangleMesh.entry())?;
        Array0::<bool>::read_npy(entry)
            .map_err(|e| read_npy_error(Field::IsTriangleMesh, e))?
            .into_scalar()
    };
    let derived = faces_are_triangles(&faces);
    if stored != derived {
        return Err(FormatError::TriangleFlagMismatch { stored, derived }.into());
    }

    let mesh = ObjMesh::new(vertices, textures, normals, faces);
    debug!(
        version,
        vertices = mesh.vertex_count(),
        textures = mesh.texture_count(),
        normals = mesh.normal_count(),
        faces = mesh.face_count(),
        "read mesh cache"
    );
    Ok(mesh)
}

/// Open and read a cache file.
pub fn load_cache(path: impl AsRef<Path>) -> Result<ObjMesh, CacheError> {
    load_path(path.as_ref())
}

#[instrument]
fn load_path(path: &Path) -> Result<ObjMesh, CacheError> {
    let file = File::open(path)?;
    let mesh = read_cache(BufReader::new(file))?;
    info!(faces = mesh.face_count(), "loaded mesh cache");
    Ok(mesh)
}

fn check_field_set<R: Read + Seek>(archive: &ZipArchive<R>) -> Result<(), FormatError> {
    let entries: Vec<&str> = archive.file_names().collect();
    if let Some(missing) = Field::ALL
        .into_iter()
        .find(|field| !entries.contains(&field.entry()))
    {
        return Err(FormatError::MissingField(missing));
    }
    if let Some(extra) = entries.iter().find(|e| Field::from_entry(e).is_none()) {
        return Err(FormatError::UnexpectedField(extra.to_string()));
    }
    Ok(())
}

fn read_rows<R: Read + Seek, const N: usize>(
    archive: &mut ZipArchive<R>,
    field: Field,
) -> Result<Vec<[f64; N]>, CacheError> {
    let entry = archive.by_name(field.entry())?;
    let array = Array2::<f64>::read_npy(entry).map_err(|e| read_npy_error(field, e))?;
    if array.ncols() != N {
        return Err(FormatError::BadShape {
            field,
            columns: N,
            found: array.shape().to_vec(),
        }
        .into());
    }
    Ok(array
        .rows()
        .into_iter()
        .map(|row| std::array::from_fn(|i| row[i]))
        .collect())
}

fn read_faces<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<Face>, CacheError> {
    let entry = archive.by_name(Field::Faces.entry())?;
    let faces: Vec<Face> = bincode::deserialize_from(entry)?;

    for (f, face) in faces.iter().enumerate() {
        if face.is_empty() {
            return Err(FormatError::EmptyFace { face: f }.into());
        }
        if let Some(c) = face.iter().position(|corner| corner.has_zero_index()) {
            return Err(FormatError::ZeroIndex { face: f, corner: c }.into());
        }
    }
    Ok(faces)
}
