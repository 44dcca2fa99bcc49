use std::fmt;

use crate::errors::FormatError;

/// Format identifier stored in the archive comment.
pub const FORMAT_TAG: &str = "obj-mesh-cache";

/// Current cache layout version.
pub const FORMAT_VERSION: u32 = 1;

/// The named fields of a cache file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Vertices,
    Textures,
    Normals,
    Faces,
    IsTriangleMesh,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Vertices,
        Field::Textures,
        Field::Normals,
        Field::Faces,
        Field::IsTriangleMesh,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Vertices => "vertices",
            Field::Textures => "textures",
            Field::Normals => "normals",
            Field::Faces => "faces",
            Field::IsTriangleMesh => "is_triangle_mesh",
        }
    }

    /// Archive entry holding this field.
    pub fn entry(self) -> &'static str {
        match self {
            Field::Vertices => "vertices.npy",
            Field::Textures => "textures.npy",
            Field::Normals => "normals.npy",
            Field::Faces => "faces.bin",
            Field::IsTriangleMesh => "is_triangle_mesh.npy",
        }
    }

    pub fn from_entry(entry: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.entry() == entry)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Archive comment identifying the format and version.
pub(crate) fn header() -> String {
    format!("{} v{}", FORMAT_TAG, FORMAT_VERSION)
}

/// Validate an archive comment, returning the version it declares.
pub(crate) fn check_header(comment: &[u8]) -> Result<u32, FormatError> {
    let text = String::from_utf8_lossy(comment);
    let unknown = || FormatError::UnknownFormat(text.to_string());

    let (tag, version) = text.split_once(" v").ok_or_else(unknown)?;
    if tag != FORMAT_TAG {
        return Err(unknown());
    }
    let version: u32 = version.parse().map_err(|_| unknown())?;
    if version == 0 {
        return Err(unknown());
    }
    if version > FORMAT_VERSION {
        return Err(FormatError::FutureVersion {
            file_version: version,
            supported_version: FORMAT_VERSION,
        });
    }
    Ok(version)
}
