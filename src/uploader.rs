//! Uploading an entry's photos as store resources.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::error::{ImportError, Result};
use crate::export::photo_path;
use crate::joplin::JoplinApi;
use crate::models::{JournalEntry, ResourceId};

/// Photo identifier to uploaded resource id, for one entry.
pub type PhotoResources = HashMap<String, ResourceId>;

/// Uploads every photo of `entry`, one at a time in list order.
///
/// # Errors
///
/// Returns `ImportError::Io` when a photo's asset file is missing, before any
/// request is sent for that photo. Upload failures are returned as-is; photos
/// already uploaded for this entry stay in the store.
pub fn upload_photos(
    api: &impl JoplinApi,
    folder: &Path,
    entry: &JournalEntry,
) -> Result<PhotoResources> {
    let mut resources = PhotoResources::with_capacity(entry.photos.len());

    for photo in &entry.photos {
        let path = photo_path(folder, photo);
        if let Err(e) = std::fs::metadata(&path) {
            return Err(ImportError::io(path, e));
        }

        let resource = api.upload_resource(&path)?;
        info!(
            photo = %photo.identifier,
            resource = %resource.id,
            size = resource.size,
            "uploaded photo"
        );
        resources.insert(photo.identifier.clone(), resource.id);
    }

    Ok(resources)
}
