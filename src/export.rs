//! Reading the journal export from disk.
//!
//! An export folder holds a single `AllEntries.json` document and a `photos/`
//! directory with one binary file per photo, named `<md5>.<type>`.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ImportError, Result};
use crate::models::{JournalExport, Photo};

/// Name of the export document inside the journal folder.
pub const EXPORT_FILE_NAME: &str = "AllEntries.json";

/// Directory holding photo assets inside the journal folder.
pub const PHOTOS_DIR: &str = "photos";

/// Loads and decodes `<folder>/AllEntries.json`.
///
/// # Errors
///
/// Returns `ImportError::Io` if the file cannot be read and
/// `ImportError::Decode` if the document does not match the export schema.
/// Nothing is partially recovered.
pub fn load_export(folder: &Path) -> Result<JournalExport> {
    let path = folder.join(EXPORT_FILE_NAME);
    debug!(path = %path.display(), "reading journal export");

    let raw = std::fs::read(&path).map_err(|e| ImportError::io(&path, e))?;
    let export: JournalExport = serde_json::from_slice(&raw)
        .map_err(|e| ImportError::decode(path.display().to_string(), e))?;

    info!(
        entries = export.entries.len(),
        version = %export.metadata.version,
        "loaded journal export"
    );
    Ok(export)
}

/// Returns the on-disk location of a photo's binary asset.
pub fn photo_path(folder: &Path, photo: &Photo) -> PathBuf {
    folder
        .join(PHOTOS_DIR)
        .join(format!("{}.{}", photo.md5, photo.file_type))
}
