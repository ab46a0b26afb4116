//! Path resolution for user data.
//!
//! Provides the canonical location of the educa data directory and the
//! `SQLite` database file. The directory can be overridden with the
//! `EDUCA_DATA_DIR` environment variable.

use std::env;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}

/// Root directory for educa user data.
///
/// `EDUCA_DATA_DIR` wins when set; otherwise the platform data dir
/// (`~/.local/share/educa`, `~/Library/Application Support/educa`, ...)
/// is used. The directory is created if missing.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var_os("EDUCA_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::data_dir().ok_or(PathError::NoDataDir)?.join("educa"),
    };

    fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
        path: root.clone(),
        reason: e.to_string(),
    })?;

    Ok(root)
}

/// Path to the educa database file, `educa.db` under the data root.
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("educa.db"))
}
