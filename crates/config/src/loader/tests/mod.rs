//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test the two-pass load against real INI files.
//! - Test default resolution and precedence of file, environment and defaults.
//! - Test security scanning during a load.
//! - Test default file creation.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `config.ini` inside `dir` and return its path.
pub fn write_config_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.ini");
    std::fs::write(&path, contents).expect("Failed to write test config");
    path
}
