use serde::{Deserialize, Serialize};

use super::TagId;

/// A tag known to the note store.
///
/// The id is opaque; the title is the human key used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagItem {
    pub id: TagId,
    pub title: String,
}

impl TagItem {
    pub fn new(id: TagId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// One page of `GET /tags`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPage {
    #[serde(default)]
    pub items: Vec<TagItem>,
    #[serde(default)]
    pub has_more: bool,
}
