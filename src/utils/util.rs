//! Small process-environment helpers.

use std::path::PathBuf;

/// Environment variable naming the default collection file.
pub const FILE_ENV: &str = "DRACO_FILE";

/// Fallback collection file name, resolved in the working directory.
pub const DEFAULT_FILE: &str = "dragons.json";

/// Resolves the collection file path: an explicit value wins, then the
/// `DRACO_FILE` environment variable, then `dragons.json`.
pub fn collection_file(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(FILE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE))
}
