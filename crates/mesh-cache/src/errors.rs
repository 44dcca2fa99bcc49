use std::io;

use ndarray_npy::{ReadNpyError, WriteNpyError};
use obj_parser::ObjError;

use crate::fields::Field;

/// Errors while reading or writing a cache file.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("malformed cache: {0}")]
    Format(#[from] FormatError),
}

/// The container opened but does not hold a mesh in the expected layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("unknown cache format: {0:?}")]
    UnknownFormat(String),

    #[error("cache version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("missing field `{0}`")]
    MissingField(Field),

    #[error("unexpected entry `{0}`")]
    UnexpectedField(String),

    #[error("field `{field}` is not a valid array: {reason}")]
    BadArray { field: Field, reason: String },

    #[error("field `{field}` has shape {found:?}, expected [n, {columns}]")]
    BadShape {
        field: Field,
        columns: usize,
        found: Vec<usize>,
    },

    #[error("field `faces` could not be decoded: {0}")]
    BadFaces(String),

    #[error("face {face} has no corners")]
    EmptyFace { face: usize },

    #[error("face {face} corner {corner} has a zero index")]
    ZeroIndex { face: usize, corner: usize },

    #[error("stored is_triangle_mesh={stored} but faces give {derived}")]
    TriangleFlagMismatch { stored: bool, derived: bool },
}

/// Errors from [`load_or_parse`](crate::load_or_parse).
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error(transparent)]
    Parse(#[from] ObjError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl From<zip::result::ZipError> for CacheError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => CacheError::Io(e),
            // A truncated or foreign file has no readable central directory.
            other => CacheError::Io(io::Error::new(io::ErrorKind::InvalidData, other.to_string())),
        }
    }
}

impl From<bincode::Error> for CacheError {
    fn from(err: bincode::Error) -> Self {
        match *err {
            bincode::ErrorKind::Io(e) => CacheError::Io(e),
            other => FormatError::BadFaces(other.to_string()).into(),
        }
    }
}

impl From<WriteNpyError> for CacheError {
    fn from(err: WriteNpyError) -> Self {
        match err {
            WriteNpyError::Io(e) => CacheError::Io(e),
            other => CacheError::Io(io::Error::new(io::ErrorKind::Other, other.to_string())),
        }
    }
}

pub(crate) fn read_npy_error(field: Field, err: ReadNpyError) -> CacheError {
    match err {
        ReadNpyError::Io(e) => CacheError::Io(e),
        ReadNpyError::MissingData => CacheError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("field `{}` is truncated", field),
        )),
        other => FormatError::BadArray {
            field,
            reason: other.to_string(),
        }
        .into(),
    }
}
