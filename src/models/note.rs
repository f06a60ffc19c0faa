use serde::{Deserialize, Serialize};

use super::NoteId;

/// A note as submitted to `POST /notes`.
///
/// Timestamps are epoch milliseconds; the store misreads plain unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNote {
    pub parent_id: String,
    pub title: String,
    pub body: String,
    pub user_created_time: i64,
    pub user_updated_time: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// The store's reply to a note creation.
///
/// `raw` holds the response body exactly as received. Linking a note to a tag
/// posts these bytes back to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedNote {
    pub id: NoteId,
    pub raw: Vec<u8>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdResponse {
    pub id: String,
}
