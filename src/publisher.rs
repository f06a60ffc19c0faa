//! Creating a note and attaching its tags.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::Result;
use crate::joplin::JoplinApi;
use crate::models::{NewNote, NoteId};
use crate::tags::TagDirectory;

/// Creates `note`, then resolves and links each of `tags` in order.
///
/// Tags are lowercased and de-duplicated before resolution. The calls are not
/// transactional: if a tag call fails after the note was created, the note
/// stays in the store with only the tags linked so far.
pub fn publish(
    api: &impl JoplinApi,
    directory: &mut TagDirectory,
    note: &NewNote,
    tags: &[String],
) -> Result<NoteId> {
    let created = api.create_note(note)?;
    info!(note = %created.id, title = %note.title, "created note");

    let mut seen = HashSet::new();
    for tag in tags {
        let title = tag.to_lowercase();
        if !seen.insert(title.clone()) {
            continue;
        }

        let tag_id = directory.resolve_or_create(api, &title)?;
        api.link_note_to_tag(&tag_id, &created)?;
        debug!(note = %created.id, tag = %title, "linked tag");
    }

    Ok(created.id)
}
