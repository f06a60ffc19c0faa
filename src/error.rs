//! Error type shared by the export reader, the HTTP client and the import pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while migrating journal entries.
#[derive(Debug, Error)]
pub enum ImportError {
    /// A local file is missing or unreadable.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document did not match the expected schema.
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Connection failures and timeouts.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("Store rejected request: status {status}: {body}")]
    Remote { status: u16, body: String },

    /// Invalid host configuration.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Failure category of an [`ImportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Decode,
    Network,
    Remote,
    Config,
}

impl ImportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImportError::Io { .. } => ErrorKind::Io,
            ImportError::Decode { .. } => ErrorKind::Decode,
            ImportError::Network(_) => ErrorKind::Network,
            ImportError::Remote { .. } => ErrorKind::Remote,
            ImportError::InvalidUrl(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImportError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        ImportError::Decode {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T, E = ImportError> = std::result::Result<T, E>;
