//! Property-based tests for the OBJ reader using the `proptest` crate.

use proptest::prelude::*;

use mesh_types::{Corner, Face, ObjMesh};
use obj_parser::{parse_str, to_obj_string};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_coord() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6
}

fn arb_index() -> impl Strategy<Value = Option<u32>> {
    prop::option::of(1u32..10_000)
}

fn arb_corner() -> impl Strategy<Value = Corner> {
    (arb_index(), arb_index(), arb_index()).prop_map(Corner::from)
}

fn arb_face() -> impl Strategy<Value = Face> {
    prop::collection::vec(arb_corner(), 1..6)
}

fn arb_mesh() -> impl Strategy<Value = ObjMesh> {
    (
        prop::collection::vec([arb_coord(), arb_coord(), arb_coord()], 0..20),
        prop::collection::vec([arb_coord(), arb_coord()], 0..20),
        prop::collection::vec([arb_coord(), arb_coord(), arb_coord()], 0..20),
        prop::collection::vec(arb_face(), 0..20),
    )
        .prop_map(|(v, vt, vn, f)| ObjMesh::new(v, vt, vn, f))
}

// ---------------------------------------------------------------------------
// 1. Written OBJ text parses back to the same mesh
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn write_then_parse_is_identity(mesh in arb_mesh()) {
        let text = to_obj_string(&mesh);
        let parsed = parse_str(&text).unwrap();
        prop_assert_eq!(parsed, mesh);
    }
}

// ---------------------------------------------------------------------------
// 2. Triangle flag matches the corner counts of the parsed faces
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn triangle_flag_matches_corner_counts(sizes in prop::collection::vec(1usize..6, 0..30)) {
        let mut text = String::new();
        for n in &sizes {
            text.push('f');
            for i in 1..=*n {
                text.push_str(&format!(" {}", i));
            }
            text.push('\n');
        }
        let mesh = parse_str(&text).unwrap();
        prop_assert_eq!(mesh.face_count(), sizes.len());
        prop_assert_eq!(mesh.is_triangle_mesh(), sizes.iter().all(|&n| n == 3));
    }
}

// ---------------------------------------------------------------------------
// 3. Unrecognized lines never change the result
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn interleaved_comments_are_ignored(
        mesh in arb_mesh(),
        comment in "[a-zA-Z0-9 ]{0,20}",
    ) {
        let text: String = to_obj_string(&mesh)
            .lines()
            .flat_map(|line| [format!("# {}", comment), line.to_string()])
            .map(|line| line + "\n")
            .collect();
        prop_assert_eq!(parse_str(&text).unwrap(), mesh);
    }
}
