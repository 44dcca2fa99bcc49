//! Helper functions: error type and shortcuts for the two mesh producers.

use std::io::Cursor;

use mesh_cache::{read_cache, write_cache, CacheError, CacheOptions};
use mesh_types::ObjMesh;
use obj_parser::ObjError;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("parse failed: {0}")]
    Parse(#[from] ObjError),

    #[error("cache failed: {0}")]
    Cache(#[from] CacheError),

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },
}

// ── Producers ───────────────────────────────────────────────────────────────

/// Parse OBJ text.
pub fn parse_text(text: &str) -> Result<ObjMesh, HarnessError> {
    Ok(obj_parser::parse_str(text)?)
}

/// Encode a mesh into an in-memory cache.
pub fn encode(mesh: &ObjMesh, options: &CacheOptions) -> Result<Vec<u8>, HarnessError> {
    Ok(write_cache(mesh, Cursor::new(Vec::new()), options)?.into_inner())
}

/// Push a mesh through an in-memory cache and read it back.
pub fn cache_round_trip(mesh: &ObjMesh, options: &CacheOptions) -> Result<ObjMesh, HarnessError> {
    let bytes = encode(mesh, options)?;
    Ok(read_cache(Cursor::new(bytes))?)
}
