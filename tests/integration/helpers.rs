//! Shared test helpers

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use threadreplay::Thread;

/// Directory holding the JSON thread fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a fixture by file name.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Copy a fixture into a fresh temp dir. Keep the `TempDir` alive while the
/// path is in use.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::copy(fixture(name), &path).expect("Failed to copy fixture");
    (temp_dir, path)
}

/// Parse a fixture into a thread.
pub fn load_fixture(name: &str) -> Thread {
    Thread::parse(fixture(name)).expect("Failed to parse fixture")
}
