//! Run-scoped directory of the store's tags.
//!
//! The directory is a snapshot fetched once before any entry is processed. Tags
//! created during the run are appended to it so later entries reuse them, and
//! the snapshot is never re-synced with the store.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::Result;
use crate::joplin::JoplinApi;
use crate::models::{TagId, TagItem};

/// Fetches every tag from the store, following pagination.
///
/// Requests pages 1, 2, ... until a page reports `has_more == false` and
/// returns the concatenation of all items in request order.
///
/// # Errors
///
/// Any failing page fails the whole fetch; items from earlier pages are
/// dropped rather than returned as a partial result.
pub fn fetch_all_tags(api: &impl JoplinApi) -> Result<Vec<TagItem>> {
    let mut items = Vec::new();
    let mut page = 0;

    loop {
        page += 1;
        let tag_page = api.tag_page(page)?;
        debug!(page, count = tag_page.items.len(), "received tag page");

        items.extend(tag_page.items);
        if !tag_page.has_more {
            break;
        }
    }

    info!(tags = items.len(), pages = page, "fetched existing tags");
    Ok(items)
}

/// Mapping from lowercased tag title to store id.
///
/// Lookups are case-insensitive, so "Work" and "work" resolve to one tag.
#[derive(Debug, Clone, Default)]
pub struct TagDirectory {
    by_title: HashMap<String, TagId>,
}

impl TagDirectory {
    /// Builds a directory from already-fetched tags.
    ///
    /// When the store holds several tags whose titles differ only by case,
    /// the first one wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use journal_migrate::models::{TagId, TagItem};
    /// use journal_migrate::tags::TagDirectory;
    ///
    /// let directory = TagDirectory::from_items(vec![TagItem::new(TagId::new("t1"), "Work")]);
    /// assert_eq!(directory.lookup("work"), Some(&TagId::new("t1")));
    /// assert_eq!(directory.lookup("WORK"), Some(&TagId::new("t1")));
    /// ```
    pub fn from_items(items: impl IntoIterator<Item = TagItem>) -> Self {
        let mut by_title = HashMap::new();
        for item in items {
            by_title.entry(item.title.to_lowercase()).or_insert(item.id);
        }
        Self { by_title }
    }

    /// Fetches the store's tags and builds the directory from them.
    pub fn load(api: &impl JoplinApi) -> Result<Self> {
        Ok(Self::from_items(fetch_all_tags(api)?))
    }

    /// Looks up a tag id by title, ignoring case.
    pub fn lookup(&self, title: &str) -> Option<&TagId> {
        self.by_title.get(&title.to_lowercase())
    }

    /// Returns the id for `title`, creating the tag in the store on a miss.
    ///
    /// The title is lowercased before lookup and creation. A newly created
    /// tag is recorded so later calls in the same run do not create it again.
    /// Callers must not resolve concurrently; the directory assumes a single
    /// writer.
    pub fn resolve_or_create(&mut self, api: &impl JoplinApi, title: &str) -> Result<TagId> {
        let key = title.to_lowercase();

        if let Some(id) = self.by_title.get(&key) {
            debug!(tag = %key, id = %id, "found existing tag");
            return Ok(id.clone());
        }

        let id = api.create_tag(&key)?;
        info!(tag = %key, id = %id, "created tag");
        self.by_title.insert(key, id.clone());
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }
}
