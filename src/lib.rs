pub mod error;
pub mod export;
pub mod importer;
pub mod joplin;
pub mod models;
pub mod publisher;
pub mod tags;
pub mod transform;
pub mod uploader;

pub use error::{ErrorKind, ImportError};
pub use export::load_export;
pub use importer::{EntryOutcome, ImportReport, ImportSettings, Importer};
pub use joplin::{JoplinApi, JoplinClient, JoplinClientBuilder};
pub use models::{JournalEntry, JournalExport, NewNote, NoteId, ResourceId, TagId, TagItem};
pub use tags::TagDirectory;
