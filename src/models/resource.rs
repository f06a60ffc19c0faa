use serde::{Deserialize, Serialize};

use super::ResourceId;

/// A binary attachment stored by the note store, as returned by `POST /resources`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub mime: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub file_extension: String,
    #[serde(default)]
    pub size: i64,
}
