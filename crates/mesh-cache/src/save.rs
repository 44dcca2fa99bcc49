use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use mesh_types::ObjMesh;
use ndarray::{arr0, Array2};
use ndarray_npy::WriteNpyExt;
use tracing::{debug, info, instrument};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::errors::CacheError;
use crate::fields::{header, Field};
use crate::options::CacheOptions;

/// Serialize a mesh into a cache archive, returning the writer once the
/// archive is finished.
pub fn write_cache<W: Write + Seek>(
    mesh: &ObjMesh,
    writer: W,
    options: &CacheOptions,
) -> Result<W, CacheError> {
    let entry_options = SimpleFileOptions::default().compression_method(options.compression.method());
    let mut zip = ZipWriter::new(writer);
    zip.set_comment(header());

    zip.start_file(Field::Vertices.entry(), entry_options)?;
    Array2::from(mesh.vertices().to_vec()).write_npy(&mut zip)?;

    zip.start_file(Field::Textures.entry(), entry_options)?;
    Array2::from(mesh.textures().to_vec()).write_npy(&mut zip)?;

    zip.start_file(Field::Normals.entry(), entry_options)?;
    Array2::from(mesh.normals().to_vec()).write_npy(&mut zip)?;

    zip.start_file(Field::Faces.entry(), entry_options)?;
    bincode::serialize_into(&mut zip, mesh.faces())?;

    zip.start_file(Field::IsTriangleMesh.entry(), entry_options)?;
    arr0(mesh.is_triangle_mesh()).write_npy(&mut zip)?;

    let writer = zip.finish()?;
    debug!(
        vertices = mesh.vertex_count(),
        textures = mesh.texture_count(),
        normals = mesh.normal_count(),
        faces = mesh.face_count(),
        compression = ?options.compression,
        "wrote mesh cache"
    );
    Ok(writer)
}

/// Write a mesh to a cache file, replacing any existing file at `path`.
pub fn save_cache(
    mesh: &ObjMesh,
    path: impl AsRef<Path>,
    options: &CacheOptions,
) -> Result<(), CacheError> {
    save_path(mesh, path.as_ref(), options)
}

#[instrument(skip(mesh, options))]
fn save_path(mesh: &ObjMesh, path: &Path, options: &CacheOptions) -> Result<(), CacheError> {
    let file = File::create(path)?;
    write_cache(mesh, BufWriter::new(file), options)?.flush()?;
    info!(faces = mesh.face_count(), "saved mesh cache");
    Ok(())
}
