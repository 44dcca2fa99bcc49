//! Parse-from-text and load-from-cache must be interchangeable producers.

use std::fs::{self, File};
use std::time::{Duration, SystemTime};

use mesh_cache::{load_cache, load_or_parse, save_cache, CacheOptions, Compression};
use mesh_types::Corner;
use test_harness::assertions::{assert_fixture_shape, assert_meshes_equal};
use test_harness::fixtures::{self, Fixture};
use test_harness::helpers::{cache_round_trip, parse_text};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn all_options() -> [CacheOptions; 2] {
    [
        CacheOptions::default(),
        CacheOptions::new().with_compression(Compression::Deflated),
    ]
}

// ── Fixtures ─────────────────────────────────────────────────────────────

#[test]
fn every_fixture_parses_to_its_shape() {
    init_tracing();
    for fixture in fixtures::ALL {
        let mesh = parse_text(fixture.text).unwrap();
        assert_fixture_shape(&mesh, &fixture).unwrap();
    }
}

#[test]
fn every_fixture_survives_the_cache() {
    init_tracing();
    for fixture in fixtures::ALL {
        let parsed = parse_text(fixture.text).unwrap();
        for options in all_options() {
            let cached = cache_round_trip(&parsed, &options).unwrap();
            assert_meshes_equal(&parsed, &cached, fixture.name).unwrap();
        }
    }
}

#[test]
fn mixed_corner_fixture_contents() {
    let mesh = parse_text(fixtures::MIXED_CORNERS.text).unwrap();
    assert_eq!(
        mesh.faces()[0],
        vec![
            Corner::new(Some(1), Some(2), Some(3)),
            Corner::new(Some(4), None, Some(6)),
            Corner::new(Some(7), None, None),
        ]
    );
}

// ── Files ────────────────────────────────────────────────────────────────

fn run_on_disk(fixture: &Fixture) {
    let dir = tempfile::tempdir().unwrap();
    let obj = dir.path().join(format!("{}.obj", fixture.name));
    let cache = dir.path().join(format!("{}.npz", fixture.name));
    fs::write(&obj, fixture.text).unwrap();

    let parsed = obj_parser::parse_file(&obj).unwrap();
    save_cache(&parsed, &cache, &CacheOptions::default()).unwrap();
    let loaded = load_cache(&cache).unwrap();
    assert_meshes_equal(&parsed, &loaded, fixture.name).unwrap();

    let via_loader = load_or_parse(&obj, &cache, &CacheOptions::default()).unwrap();
    assert_meshes_equal(&parsed, &via_loader, fixture.name).unwrap();
}

#[test]
fn file_producers_agree_for_every_fixture() {
    init_tracing();
    for fixture in fixtures::ALL {
        run_on_disk(&fixture);
    }
}

#[test]
fn repeated_loads_reuse_the_cache() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let obj = dir.path().join("cube.obj");
    let cache = dir.path().join("cube.npz");
    fs::write(&obj, fixtures::TEXTURED_CUBE.text).unwrap();
    // Reuse needs a cache strictly newer than its source.
    File::options()
        .write(true)
        .open(&obj)
        .unwrap()
        .set_modified(SystemTime::now() - Duration::from_secs(3600))
        .unwrap();

    let first = load_or_parse(&obj, &cache, &CacheOptions::default()).unwrap();
    let written = fs::metadata(&cache).unwrap().modified().unwrap();
    for _ in 0..3 {
        let again = load_or_parse(&obj, &cache, &CacheOptions::default()).unwrap();
        assert_meshes_equal(&first, &again, "reload").unwrap();
    }
    assert_eq!(fs::metadata(&cache).unwrap().modified().unwrap(), written);
}
