//! The import run: every entry becomes one note, in export order.

use std::path::PathBuf;

use tracing::{error, info, info_span};

use crate::error::{ImportError, Result};
use crate::joplin::JoplinApi;
use crate::models::{JournalEntry, JournalExport, NoteId};
use crate::publisher::publish;
use crate::tags::TagDirectory;
use crate::transform::{split_title_and_body, transform};
use crate::uploader::upload_photos;

/// Default destination notebook id.
pub const DEFAULT_NOTEBOOK: &str = "44538ac414c340af8eba12fef4066446";

/// Settings for one import run.
#[derive(Debug, Clone)]
pub struct ImportSettings {
    /// Folder holding `AllEntries.json` and `photos/`.
    pub journal_folder: PathBuf,
    /// Notebook the notes are created in.
    pub notebook: String,
    /// Stop at the first failed entry instead of continuing with the rest.
    pub fail_fast: bool,
}

impl ImportSettings {
    pub fn new(journal_folder: impl Into<PathBuf>) -> Self {
        Self {
            journal_folder: journal_folder.into(),
            notebook: DEFAULT_NOTEBOOK.to_string(),
            fail_fast: false,
        }
    }
}

/// What happened to a single entry.
#[derive(Debug)]
pub struct EntryOutcome {
    pub uuid: String,
    pub title: String,
    pub result: Result<NoteId, ImportError>,
}

/// Per-entry results of a run.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub outcomes: Vec<EntryOutcome>,
    /// Entries never attempted because the run stopped early.
    pub skipped: usize,
}

impl ImportReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    /// True when every entry was imported.
    pub fn is_success(&self) -> bool {
        self.skipped == 0 && self.failed().next().is_none()
    }
}

/// Drives entries through upload, transform and publish.
///
/// Owns the run's tag directory; entries are processed strictly one at a time
/// so tag creation never races.
pub struct Importer<'a, A: JoplinApi> {
    api: &'a A,
    directory: TagDirectory,
    settings: ImportSettings,
}

impl<'a, A: JoplinApi> Importer<'a, A> {
    pub fn new(api: &'a A, directory: TagDirectory, settings: ImportSettings) -> Self {
        Self {
            api,
            directory,
            settings,
        }
    }

    pub fn directory(&self) -> &TagDirectory {
        &self.directory
    }

    /// Imports one entry and returns the id of the created note.
    ///
    /// All photos are uploaded before the note body is built, so the note is
    /// never published with a placeholder for one of its own photos.
    pub fn import_entry(&mut self, entry: &JournalEntry) -> Result<NoteId> {
        let resources = upload_photos(self.api, &self.settings.journal_folder, entry)?;
        let note = transform(entry, &resources, &self.settings.notebook);
        publish(self.api, &mut self.directory, &note, &entry.tags)
    }

    /// Imports every entry of `export` in order.
    pub fn run(&mut self, export: &JournalExport) -> ImportReport {
        let mut report = ImportReport::default();

        for (index, entry) in export.entries.iter().enumerate() {
            let (title, _) = split_title_and_body(&entry.text);
            let span = info_span!("entry", uuid = %entry.uuid);
            let _guard = span.enter();
            info!(title = %title, "importing journal entry");

            let result = self.import_entry(entry);
            let failed = result.is_err();
            if let Err(e) = &result {
                error!(title = %title, error = %e, "failed to import entry");
            }

            report.outcomes.push(EntryOutcome {
                uuid: entry.uuid.clone(),
                title,
                result,
            });

            if failed && self.settings.fail_fast {
                report.skipped = export.entries.len() - index - 1;
                break;
            }
        }

        info!(
            succeeded = report.succeeded().count(),
            failed = report.failed().count(),
            skipped = report.skipped,
            "import finished"
        );
        report
    }
}
