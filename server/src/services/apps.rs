//! Portfolio projects loaded from `<data_dir>/apps.json`.
//!
//! The file is read on every request so edits show up without a restart.
//! Records are returned in file order; display ordering is a client concern.

use std::path::{Path, PathBuf};

use records::AppRecord;

pub const APPS_FILE: &str = "apps.json";

#[derive(Debug, thiserror::Error)]
pub enum AppsError {
    #[error("apps data not found at {0}")]
    NotFound(PathBuf),
    #[error("invalid apps data format: {0}")]
    InvalidFormat(#[from] serde_json::Error),
    #[error("failed to read apps data: {0}")]
    Io(#[from] std::io::Error),
}

#[must_use]
pub fn apps_path(data_dir: &Path) -> PathBuf {
    data_dir.join(APPS_FILE)
}

/// Load every project record.
///
/// # Errors
///
/// [`AppsError::NotFound`] when the file is missing, [`AppsError::InvalidFormat`]
/// when it is not a JSON array of records.
pub async fn load_apps(data_dir: &Path) -> Result<Vec<AppRecord>, AppsError> {
    let path = apps_path(data_dir);
    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(AppsError::NotFound(path)),
        Err(e) => return Err(AppsError::Io(e)),
    };
    parse_apps(&raw)
}

/// Parse the contents of `apps.json`.
///
/// # Errors
///
/// Returns [`AppsError::InvalidFormat`] for malformed JSON or records.
pub fn parse_apps(raw: &str) -> Result<Vec<AppRecord>, AppsError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
#[path = "apps_test.rs"]
mod tests;
