use std::path::{Path, PathBuf};

use fieldline::engine::defaults::default_config;
use fieldline::parser::load_config;
use fieldline::StatementConfig;

/// Get path to a grammar fixture in tests/fixtures/
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a grammar fixture into a config
pub fn load_fixture(name: &str) -> StatementConfig {
    load_config(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// The built-in `identifier comparison value` grammar
pub fn builtin() -> StatementConfig {
    default_config().expect("built-in grammar should be valid")
}
