//! Blocking HTTP client for the note store.
//!
//! Every request carries the API token as a `token` query parameter and is
//! bounded by a single per-request timeout. Nothing is retried.

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{RequestBuilder, multipart};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::{ImportError, Result};
use crate::models::{CreatedNote, IdResponse, NewNote, NoteId, Resource, TagId, TagPage};

/// Address of a locally running store with the web clipper service enabled.
pub const DEFAULT_HOST: &str = "http://localhost:41184";

/// Timeout applied to every outbound request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Operations the import pipeline needs from the note store.
///
/// Implemented by [`JoplinClient`] and by mocks in tests.
pub trait JoplinApi {
    /// Fetches one page of tags. Pages are numbered from 1.
    fn tag_page(&self, page: u32) -> Result<TagPage>;

    /// Creates a tag and returns its id.
    fn create_tag(&self, title: &str) -> Result<TagId>;

    /// Creates a note.
    fn create_note(&self, note: &NewNote) -> Result<CreatedNote>;

    /// Attaches a tag to a previously created note.
    fn link_note_to_tag(&self, tag: &TagId, note: &CreatedNote) -> Result<()>;

    /// Uploads a file as a resource.
    fn upload_resource(&self, path: &Path) -> Result<Resource>;
}

/// Builder for constructing `JoplinClient` instances.
///
/// # Examples
///
/// ```
/// use journal_migrate::joplin::JoplinClientBuilder;
///
/// let client = JoplinClientBuilder::new()
///     .base_url("http://localhost:41184")
///     .token("secret")
///     .build()
///     .expect("Failed to create client");
/// assert_eq!(client.base_url(), "http://localhost:41184");
/// ```
#[derive(Debug, Default)]
pub struct JoplinClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl JoplinClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store address, e.g. `http://localhost:41184`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Overrides the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// Falls back to [`DEFAULT_HOST`] and [`DEFAULT_TIMEOUT`] when unset.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::InvalidUrl` if the base URL does not parse.
    pub fn build(self) -> Result<JoplinClient> {
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();

        reqwest::Url::parse(&base_url)
            .map_err(|e| ImportError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(ImportError::Network)?;

        Ok(JoplinClient {
            client,
            base_url,
            token: self.token.unwrap_or_default(),
        })
    }
}

/// Synchronous client for the note store's REST API.
///
/// Construct it with `JoplinClientBuilder`.
pub struct JoplinClient {
    client: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl JoplinClient {
    /// Returns the base URL configured for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Sends a request and returns the response body of a successful reply.
    ///
    /// Non-success statuses become `ImportError::Remote` with the body kept
    /// as the diagnostic.
    fn send(&self, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request
            .query(&[("token", self.token.as_str())])
            .send()
            .map_err(ImportError::Network)?;

        let status = response.status();
        let body = response.bytes().map_err(ImportError::Network)?.to_vec();

        if !status.is_success() {
            return Err(ImportError::Remote {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }
}

impl JoplinApi for JoplinClient {
    fn tag_page(&self, page: u32) -> Result<TagPage> {
        debug!(page, "fetching tag page");
        let body = self.send(self.client.get(self.url("tags")).query(&[("page", page)]))?;

        serde_json::from_slice(&body)
            .map_err(|e| ImportError::decode(format!("tag page {}", page), e))
    }

    fn create_tag(&self, title: &str) -> Result<TagId> {
        let request = self
            .client
            .post(self.url("tags"))
            .json(&serde_json::json!({ "title": title }));
        let body = self.send(request)?;

        let created: IdResponse = serde_json::from_slice(&body)
            .map_err(|e| ImportError::decode(format!("created tag '{}'", title), e))?;
        Ok(TagId::new(created.id))
    }

    fn create_note(&self, note: &NewNote) -> Result<CreatedNote> {
        let body = self.send(self.client.post(self.url("notes")).json(note))?;

        let created: IdResponse = serde_json::from_slice(&body)
            .map_err(|e| ImportError::decode(format!("created note '{}'", note.title), e))?;

        Ok(CreatedNote {
            id: NoteId::new(created.id),
            raw: body,
        })
    }

    fn link_note_to_tag(&self, tag: &TagId, note: &CreatedNote) -> Result<()> {
        let request = self
            .client
            .post(self.url(&format!("tags/{}/notes", tag)))
            .header(CONTENT_TYPE, "application/json")
            .body(note.raw.clone());
        self.send(request)?;
        Ok(())
    }

    fn upload_resource(&self, path: &Path) -> Result<Resource> {
        let form = multipart::Form::new()
            .file("data", path)
            .map_err(|e| ImportError::io(path, e))?
            .text("props", "{}");

        let body = self.send(self.client.post(self.url("resources")).multipart(form))?;

        serde_json::from_slice(&body).map_err(|e| {
            ImportError::decode(format!("uploaded resource {}", path.display()), e)
        })
    }
}
