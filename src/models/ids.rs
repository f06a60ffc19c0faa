use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! remote_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an id assigned by the note store.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the underlying id.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

remote_id!(
    /// Identifier of a note in the target store.
    ///
    /// Ids are opaque strings assigned by the store; wrapping them keeps
    /// note, tag and resource ids from being mixed up.
    NoteId
);

remote_id!(
    /// Identifier of a tag in the target store.
    TagId
);

remote_id!(
    /// Identifier of an uploaded resource (binary attachment).
    ResourceId
);
