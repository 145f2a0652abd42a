/// Output file persistence.
///
/// The client application picks the generated files up from the directory
/// the tool runs out of, so the default target is the executable's own
/// directory. The directory is a plain parameter everywhere else in the
/// crate, which keeps the flows testable against a temp dir.

use crate::model::{ErrorKind, StationRecord};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves the default output directory: the directory containing the
/// running executable, falling back to the current working directory when
/// the executable path cannot be determined.
pub fn default_output_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Serializes `records` as a pretty-printed JSON array and writes it to
/// `path`, overwriting any existing file.
///
/// `fs::write` opens, writes, and closes the file in one call, so the
/// handle is released on every exit path.
///
/// # Errors
/// `ErrorKind::FileWrite` — the file could not be created or written.
pub fn write_records(records: &[StationRecord], path: &Path) -> Result<(), ErrorKind> {
    // Serialization of plain structs into a Vec cannot fail; map any
    // surprise into the decode-style error rather than panicking.
    let body = serde_json::to_vec_pretty(records)
        .map_err(|e| ErrorKind::DataCorrupted(format!("serialization failed: {}", e)))?;

    fs::write(path, body).map_err(ErrorKind::FileWrite)
}
