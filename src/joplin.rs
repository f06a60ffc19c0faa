/// HTTP client for the note store's local REST API.
///
/// The store is addressed through the `JoplinApi` trait so the import pipeline
/// can be driven by a mock in tests.
mod client;

pub use client::{DEFAULT_HOST, DEFAULT_TIMEOUT, JoplinApi, JoplinClient, JoplinClientBuilder};
