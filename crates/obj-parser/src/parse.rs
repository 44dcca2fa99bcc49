use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mesh_types::{Corner, Face, ObjMesh};
use tracing::{debug, instrument, trace};

use crate::errors::{ObjError, ParseError, ParseErrorKind};

/// The line types this reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    Vertex,
    Texture,
    Normal,
    Face,
}

impl Directive {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "v" => Some(Self::Vertex),
            "vt" => Some(Self::Texture),
            "vn" => Some(Self::Normal),
            "f" => Some(Self::Face),
            _ => None,
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Vertex => "v",
            Self::Texture => "vt",
            Self::Normal => "vn",
            Self::Face => "f",
        }
    }
}

/// Accumulates records in source order until the input is exhausted.
#[derive(Debug, Default)]
struct MeshBuilder {
    vertices: Vec<[f64; 3]>,
    textures: Vec<[f64; 2]>,
    normals: Vec<[f64; 3]>,
    faces: Vec<Face>,
    skipped: usize,
}

impl MeshBuilder {
    fn push_line(&mut self, line: &str) -> Result<(), ParseErrorKind> {
        let mut tokens = line.split_whitespace();
        let Some(directive) = tokens.next().and_then(Directive::from_keyword) else {
            self.skipped += 1;
            return Ok(());
        };

        match directive {
            Directive::Vertex => self.vertices.push(parse_floats(directive, tokens)?),
            Directive::Texture => self.textures.push(parse_floats(directive, tokens)?),
            Directive::Normal => self.normals.push(parse_floats(directive, tokens)?),
            Directive::Face => self.faces.push(parse_face(tokens)?),
        }
        Ok(())
    }

    fn finish(self) -> ObjMesh {
        ObjMesh::new(self.vertices, self.textures, self.normals, self.faces)
    }
}

/// Parse the first `N` tokens as floats. Tokens past `N` are ignored.
fn parse_floats<'a, const N: usize>(
    directive: Directive,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<[f64; N], ParseErrorKind> {
    let mut values = [0.0; N];
    let mut found = 0;
    for (slot, token) in values.iter_mut().zip(tokens) {
        *slot = token
            .parse::<f64>()
            .map_err(|_| ParseErrorKind::InvalidNumber {
                directive: directive.keyword(),
                field: found + 1,
                token: token.to_string(),
            })?;
        found += 1;
    }
    if found < N {
        return Err(ParseErrorKind::MissingValues {
            directive: directive.keyword(),
            expected: N,
            found,
        });
    }
    Ok(values)
}

fn parse_face<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Face, ParseErrorKind> {
    let face = tokens
        .enumerate()
        .map(|(i, token)| parse_corner(i + 1, token))
        .collect::<Result<Face, _>>()?;
    if face.is_empty() {
        return Err(ParseErrorKind::EmptyFace);
    }
    Ok(face)
}

/// Parse a `v`, `v/vt`, `v//vn` or `v/vt/vn` corner token.
///
/// Empty fields are absent, including an empty vertex field.
fn parse_corner(corner: usize, token: &str) -> Result<Corner, ParseErrorKind> {
    let mut fields = token.split('/');
    let mut next_index = |field: &'static str| {
        fields
            .next()
            .map(|raw| parse_index(corner, field, raw))
            .transpose()
            .map(Option::flatten)
    };

    let vertex = next_index("vertex")?;
    let texture = next_index("texture")?;
    let normal = next_index("normal")?;
    if fields.next().is_some() {
        return Err(ParseErrorKind::TooManyIndexFields {
            corner,
            token: token.to_string(),
        });
    }
    Ok(Corner::new(vertex, texture, normal))
}

fn parse_index(corner: usize, field: &'static str, raw: &str) -> Result<Option<u32>, ParseErrorKind> {
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(index) if index >= 1 => Ok(Some(index)),
        _ => Err(ParseErrorKind::InvalidIndex {
            corner,
            field,
            token: raw.to_string(),
        }),
    }
}

/// Read an OBJ mesh from a buffered source.
///
/// Lines are decoded lossily, so stray non-UTF-8 bytes in comments or
/// skipped directives do not fail the parse. The first malformed `v`, `vt`,
/// `vn` or `f` line aborts with a [`ParseError`].
pub fn parse<R: BufRead>(mut source: R) -> Result<ObjMesh, ObjError> {
    let mut builder = MeshBuilder::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if source.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = String::from_utf8_lossy(&buf);
        builder.push_line(&line).map_err(|kind| ParseError {
            line: line_number,
            content: line.trim_end_matches(&['\n', '\r'][..]).to_string(),
            kind,
        })?;
    }

    trace!(skipped = builder.skipped, "ignored unrecognized lines");
    let mesh = builder.finish();
    debug!(
        lines = line_number,
        vertices = mesh.vertex_count(),
        textures = mesh.texture_count(),
        normals = mesh.normal_count(),
        faces = mesh.face_count(),
        is_triangle_mesh = mesh.is_triangle_mesh(),
        "parsed OBJ mesh"
    );
    Ok(mesh)
}

/// Read an OBJ mesh from an in-memory string.
pub fn parse_str(text: &str) -> Result<ObjMesh, ObjError> {
    parse(text.as_bytes())
}

/// Open and read an OBJ file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ObjMesh, ObjError> {
    parse_path(path.as_ref())
}

#[instrument(level = "debug")]
fn parse_path(path: &Path) -> Result<ObjMesh, ObjError> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}
