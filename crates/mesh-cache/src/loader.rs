use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use mesh_types::ObjMesh;
use obj_parser::ObjError;
use tracing::{info, instrument, warn};

use crate::errors::{CacheError, LoaderError};
use crate::load::load_cache;
use crate::options::CacheOptions;
use crate::save::write_cache;

/// Load a mesh through its cache.
///
/// Reads `cache_path` when it exists and is strictly newer than `obj_path`.
/// Otherwise parses `obj_path` and writes a fresh cache next to it. A cache
/// that is empty, truncated, or does not match the layout is discarded and
/// rebuilt. Other I/O failures on the cache propagate.
pub fn load_or_parse(
    obj_path: impl AsRef<Path>,
    cache_path: impl AsRef<Path>,
    options: &CacheOptions,
) -> Result<ObjMesh, LoaderError> {
    load_or_parse_paths(obj_path.as_ref(), cache_path.as_ref(), options)
}

#[instrument(skip(options))]
fn load_or_parse_paths(
    obj_path: &Path,
    cache_path: &Path,
    options: &CacheOptions,
) -> Result<ObjMesh, LoaderError> {
    if cache_is_fresh(obj_path, cache_path)? {
        match load_cache(cache_path) {
            Ok(mesh) => return Ok(mesh),
            Err(err) if is_unreadable(&err) => warn!(%err, "discarding unreadable mesh cache"),
            Err(err) => return Err(err.into()),
        }
    }

    let mesh = obj_parser::parse_file(obj_path)?;
    replace_cache(&mesh, cache_path, options)?;
    info!(faces = mesh.face_count(), "rebuilt mesh cache");
    Ok(mesh)
}

/// Errors that mean the cache bytes are bad rather than inaccessible.
fn is_unreadable(err: &CacheError) -> bool {
    match err {
        CacheError::Format(_) => true,
        CacheError::Io(e) => matches!(e.kind(), ErrorKind::InvalidData | ErrorKind::UnexpectedEof),
    }
}

fn cache_is_fresh(obj_path: &Path, cache_path: &Path) -> Result<bool, LoaderError> {
    let cached = match fs::metadata(cache_path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(CacheError::Io(e).into()),
    };
    let source = fs::metadata(obj_path).map_err(ObjError::Io)?;

    // Equal timestamps are ambiguous on coarse-grained filesystems, so they
    // count as stale. Platforms without modification times always rebuild.
    match (source.modified(), cached.modified()) {
        (Ok(source), Ok(cached)) => Ok(source < cached),
        _ => Ok(false),
    }
}

/// Write to a temporary file in the cache's directory, then rename it over
/// `cache_path`, so readers never observe a partial cache.
///
/// The temporary file is created with the same umask-filtered mode as
/// `File::create`, so the cache ends up with the permissions `save_cache`
/// would give it.
fn replace_cache(mesh: &ObjMesh, cache_path: &Path, options: &CacheOptions) -> Result<(), CacheError> {
    let dir = cache_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut builder = tempfile::Builder::new();
    builder.prefix(".mesh-cache").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir)?;
    write_cache(mesh, BufWriter::new(tmp.as_file_mut()), options)?.flush()?;
    tmp.persist(cache_path).map_err(|e| CacheError::Io(e.error))?;
    Ok(())
}
