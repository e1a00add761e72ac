//! Golden datasets for OPC integration tests.
//!
//! Files live under `golden/` next to this crate's manifest. Paths passed to
//! the loaders are relative to this crate's root, e.g.
//! `golden/view/bay_area_restaurants.json`. Loaders panic with the offending
//! path on failure; they are for tests only.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// Resolved at compile time, so any workspace crate can load fixtures
/// regardless of its own manifest directory.
const FIXTURES_DIR: &str = env!("CARGO_MANIFEST_DIR");

fn resolve(relative_path: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(relative_path)
}

/// Raw contents of a fixture, for feeding a document parser directly.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = resolve(relative_path);
    match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => panic!("fixture {} unreadable: {e}", path.display()),
    }
}

/// Deserialize a JSON fixture into `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let text = load_fixture_text(relative_path);
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => panic!("fixture {relative_path} does not decode: {e}"),
    }
}
