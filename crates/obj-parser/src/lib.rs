//! Wavefront OBJ reader.
//!
//! Understands the `v`, `vt`, `vn` and `f` directives and skips every other
//! line. Produces an [`ObjMesh`](mesh_types::ObjMesh).

pub mod errors;
pub mod parse;
pub mod write;

pub use errors::{ObjError, ParseError, ParseErrorKind};
pub use parse::{parse, parse_file, parse_str};
pub use write::{to_obj_string, write_obj};
