use serde::{Deserialize, Serialize};

/// One corner of a face: `v/vt/vn` references into the mesh sequences.
///
/// Present indices are 1-based. `None` means the source did not supply
/// that reference for this corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Corner {
    /// 1-based index into `vertices`.
    pub vertex: Option<u32>,
    /// 1-based index into `textures`.
    pub texture: Option<u32>,
    /// 1-based index into `normals`.
    pub normal: Option<u32>,
}

impl Corner {
    pub fn new(vertex: Option<u32>, texture: Option<u32>, normal: Option<u32>) -> Self {
        Self {
            vertex,
            texture,
            normal,
        }
    }

    /// A corner that references only a vertex position (`f 1 2 3` style).
    pub fn vertex_only(vertex: u32) -> Self {
        Self::new(Some(vertex), None, None)
    }

    /// True if any present index is 0, which no valid 1-based reference can be.
    pub fn has_zero_index(&self) -> bool {
        [self.vertex, self.texture, self.normal].contains(&Some(0))
    }
}

impl From<(Option<u32>, Option<u32>, Option<u32>)> for Corner {
    fn from((vertex, texture, normal): (Option<u32>, Option<u32>, Option<u32>)) -> Self {
        Self::new(vertex, texture, normal)
    }
}

/// A polygon: its corners in the order they were listed.
pub type Face = Vec<Corner>;
