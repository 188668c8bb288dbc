//! Testing utilities for Splunk client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! ```ignore
//! use splunk_client::testing::load_fixture;
//!
//! let index = load_fixture("indexes/read_index.json");
//! ```

use std::path::Path;

/// Load a JSON fixture from the crate's `fixtures/` directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}
