//! Property-based tests for the cache codec using the `proptest` crate.

use std::io::Cursor;

use proptest::prelude::*;

use mesh_cache::{read_cache, write_cache, CacheOptions, Compression};
use mesh_types::{Corner, Face, ObjMesh};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Any finite f64, including subnormals and signed zero.
fn arb_coord() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

fn arb_index() -> impl Strategy<Value = Option<u32>> {
    prop::option::of(1u32..=u32::MAX)
}

fn arb_face() -> impl Strategy<Value = Face> {
    prop::collection::vec(
        (arb_index(), arb_index(), arb_index()).prop_map(Corner::from),
        1..8,
    )
}

fn arb_mesh() -> impl Strategy<Value = ObjMesh> {
    (
        prop::collection::vec([arb_coord(), arb_coord(), arb_coord()], 0..32),
        prop::collection::vec([arb_coord(), arb_coord()], 0..32),
        prop::collection::vec([arb_coord(), arb_coord(), arb_coord()], 0..32),
        prop::collection::vec(arb_face(), 0..32),
    )
        .prop_map(|(v, vt, vn, f)| ObjMesh::new(v, vt, vn, f))
}

fn arb_options() -> impl Strategy<Value = CacheOptions> {
    prop_oneof![Just(Compression::Stored), Just(Compression::Deflated)]
        .prop_map(|c| CacheOptions::new().with_compression(c))
}

// ---------------------------------------------------------------------------
// 1. Cache round trip reproduces the mesh exactly
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn cache_round_trip_is_identity(mesh in arb_mesh(), options in arb_options()) {
        let bytes = write_cache(&mesh, Cursor::new(Vec::new()), &options).unwrap().into_inner();
        let restored = read_cache(Cursor::new(bytes)).unwrap();
        prop_assert_eq!(restored.is_triangle_mesh(), mesh.is_triangle_mesh());
        prop_assert_eq!(restored, mesh);
    }
}

// ---------------------------------------------------------------------------
// 2. Parsing OBJ text and reloading its cache are interchangeable
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn parsed_and_cached_meshes_agree(mesh in arb_mesh()) {
        let parsed = obj_parser::parse_str(&obj_parser::to_obj_string(&mesh)).unwrap();
        let bytes = write_cache(&parsed, Cursor::new(Vec::new()), &CacheOptions::default())
            .unwrap()
            .into_inner();
        prop_assert_eq!(read_cache(Cursor::new(bytes)).unwrap(), parsed);
    }
}
