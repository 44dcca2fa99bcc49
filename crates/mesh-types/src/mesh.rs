use serde::{Deserialize, Serialize};

use crate::corner::Face;

/// True iff every face has exactly three corners. Vacuously true for no faces.
pub fn faces_are_triangles(faces: &[Face]) -> bool {
    faces.iter().all(|face| face.len() == 3)
}

/// A polygon mesh as read from an OBJ file.
///
/// Face corners address `vertices`, `textures` and `normals` by 1-based
/// position. Indices are not checked against the sequence lengths.
///
/// The mesh is an immutable snapshot: build it with [`ObjMesh::new`], which
/// derives `is_triangle_mesh` from the faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MeshParts")]
pub struct ObjMesh {
    vertices: Vec<[f64; 3]>,
    textures: Vec<[f64; 2]>,
    normals: Vec<[f64; 3]>,
    faces: Vec<Face>,
    is_triangle_mesh: bool,
}

/// Deserialization shape. The serialized `is_triangle_mesh` is read so that
/// sequential formats stay aligned, then discarded and re-derived.
#[derive(Deserialize)]
struct MeshParts {
    vertices: Vec<[f64; 3]>,
    textures: Vec<[f64; 2]>,
    normals: Vec<[f64; 3]>,
    faces: Vec<Face>,
    #[serde(rename = "is_triangle_mesh", default)]
    _is_triangle_mesh: bool,
}

impl From<MeshParts> for ObjMesh {
    fn from(parts: MeshParts) -> Self {
        Self::new(parts.vertices, parts.textures, parts.normals, parts.faces)
    }
}

impl ObjMesh {
    pub fn new(
        vertices: Vec<[f64; 3]>,
        textures: Vec<[f64; 2]>,
        normals: Vec<[f64; 3]>,
        faces: Vec<Face>,
    ) -> Self {
        let is_triangle_mesh = faces_are_triangles(&faces);
        Self {
            vertices,
            textures,
            normals,
            faces,
            is_triangle_mesh,
        }
    }

    /// A mesh with no data. It counts as a triangle mesh.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }

    pub fn vertices(&self) -> &[[f64; 3]] {
        &self.vertices
    }

    pub fn textures(&self) -> &[[f64; 2]] {
        &self.textures
    }

    pub fn normals(&self) -> &[[f64; 3]] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn is_triangle_mesh(&self) -> bool {
        self.is_triangle_mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Total number of corners across all faces.
    pub fn corner_count(&self) -> usize {
        self.faces.iter().map(Vec::len).sum()
    }

    /// Consume the mesh, returning `(vertices, textures, normals, faces)`.
    pub fn into_parts(self) -> (Vec<[f64; 3]>, Vec<[f64; 2]>, Vec<[f64; 3]>, Vec<Face>) {
        (self.vertices, self.textures, self.normals, self.faces)
    }
}

impl Default for ObjMesh {
    fn default() -> Self {
        Self::empty()
    }
}
