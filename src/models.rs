mod entry;
mod ids;
mod note;
mod resource;
mod tag;

pub use entry::{
    Center, ExportMetadata, JournalEntry, JournalExport, Location, Photo, Region, Weather,
};
pub use ids::{NoteId, ResourceId, TagId};
pub(crate) use note::IdResponse;
pub use note::{CreatedNote, NewNote};
pub use resource::Resource;
pub use tag::{TagItem, TagPage};
