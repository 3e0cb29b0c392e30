//! Locates the model fixtures shared by the test suites of every crate.
use std::{fs, path::PathBuf};

/// Reads a fixture from `resources/test` into a string.
pub fn read_shared_resource(name: &str) -> String {
    fs::read_to_string(shared_resource_path(name))
        .unwrap_or_else(|e| panic!("Unable to read fixture {name}: {e}"))
}

/// Path of a fixture in the `resources/test` directory at the workspace root.
pub fn shared_resource_path(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "..", "resources", "test", name]
        .iter()
        .collect()
}
