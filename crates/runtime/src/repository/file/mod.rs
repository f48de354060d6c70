//! File-based repository implementations.
//!
//! Records are pretty-printed JSON. Writes go to a temporary file that is
//! renamed over the target, so a crash never leaves a half-written save.

mod character;
mod mission;

pub use character::FileCharacterRepository;
pub use mission::FileMissionRepository;

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::{RepositoryError, Result};

/// Serialize `value` and atomically replace `path` with it.
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    // Write to temp file
    let json =
        serde_json::to_string_pretty(value).map_err(|e| RepositoryError::Json(e.to_string()))?;
    fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(RepositoryError::Io)?;
    Ok(())
}
