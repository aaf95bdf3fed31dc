//! Test fixture loading utilities

use std::path::PathBuf;

use paste_quote_core::{references_from_json, ReferenceRecord};

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// The sample bibliography shared by the matching tests
#[allow(dead_code)]
pub fn bibliography() -> Vec<ReferenceRecord> {
    references_from_json(&load_fixture("bibliography.json"))
        .expect("bibliography fixture should decode")
}
