//! OBJ documents with known contents.

/// An OBJ document and the shape of the mesh it must produce.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub text: &'static str,
    pub vertices: usize,
    pub textures: usize,
    pub normals: usize,
    /// Corner count of each face, in order.
    pub face_sizes: &'static [usize],
    pub is_triangle_mesh: bool,
}

pub const EMPTY: Fixture = Fixture {
    name: "empty",
    text: "",
    vertices: 0,
    textures: 0,
    normals: 0,
    face_sizes: &[],
    is_triangle_mesh: true,
};

pub const COMMENTS_ONLY: Fixture = Fixture {
    name: "comments_only",
    text: "# nothing but metadata\nmtllib a.mtl\no thing\ng group\ns 1\nusemtl m\n\n",
    vertices: 0,
    textures: 0,
    normals: 0,
    face_sizes: &[],
    is_triangle_mesh: true,
};

pub const TRIANGLE: Fixture = Fixture {
    name: "triangle",
    text: "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
    vertices: 3,
    textures: 0,
    normals: 0,
    face_sizes: &[3],
    is_triangle_mesh: true,
};

/// One triangle and one quad sharing an edge.
pub const TRIANGLE_AND_QUAD: Fixture = Fixture {
    name: "triangle_and_quad",
    text: "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
f 1 2 3
f 2 3 4 1
",
    vertices: 4,
    textures: 0,
    normals: 0,
    face_sizes: &[3, 4],
    is_triangle_mesh: false,
};

pub const MIXED_CORNERS: Fixture = Fixture {
    name: "mixed_corners",
    text: "f 1/2/3 4//6 7\n",
    vertices: 0,
    textures: 0,
    normals: 0,
    face_sizes: &[3],
    is_triangle_mesh: true,
};

/// Unit cube with per-face normals and texture coordinates, split into
/// triangles.
pub const TEXTURED_CUBE: Fixture = Fixture {
    name: "textured_cube",
    text: "\
# unit cube
o cube
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
v 0 1 1
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 -1
vn 0 0 1
vn 0 -1 0
vn 1 0 0
vn 0 1 0
vn -1 0 0
s off
f 1/1/1 4/4/1 3/3/1
f 1/1/1 3/3/1 2/2/1
f 5/1/2 6/2/2 7/3/2
f 5/1/2 7/3/2 8/4/2
f 1/1/3 2/2/3 6/3/3
f 1/1/3 6/3/3 5/4/3
f 2/1/4 3/2/4 7/3/4
f 2/1/4 7/3/4 6/4/4
f 3/1/5 4/2/5 8/3/5
f 3/1/5 8/3/5 7/4/5
f 4/1/6 1/2/6 5/3/6
f 4/1/6 5/3/6 8/4/6
",
    vertices: 8,
    textures: 4,
    normals: 6,
    face_sizes: &[3; 12],
    is_triangle_mesh: true,
};

/// Same cube with quad faces and `v//vn` corners.
pub const QUAD_CUBE: Fixture = Fixture {
    name: "quad_cube",
    text: "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
v 0 1 1
vn 0 0 -1
vn 0 0 1
vn 0 -1 0
vn 1 0 0
vn 0 1 0
vn -1 0 0
f 1//1 4//1 3//1 2//1
f 5//2 6//2 7//2 8//2
f 1//3 2//3 6//3 5//3
f 2//4 3//4 7//4 6//4
f 3//5 4//5 8//5 7//5
f 4//6 1//6 5//6 8//6
",
    vertices: 8,
    textures: 0,
    normals: 6,
    face_sizes: &[4; 6],
    is_triangle_mesh: false,
};

pub const ALL: [Fixture; 7] = [
    EMPTY,
    COMMENTS_ONLY,
    TRIANGLE,
    TRIANGLE_AND_QUAD,
    MIXED_CORNERS,
    TEXTURED_CUBE,
    QUAD_CUBE,
];
