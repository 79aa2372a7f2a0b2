//! The TVmaze catalog client — endpoint resolution and pagination.
//!
//! One endpoint is special: the `shows` listing is paginated, and the API
//! signals "no more pages" with a 404. Page boundaries are discovered
//! incrementally, so pagination is strictly sequential: each request is
//! issued only after the previous response says whether to continue.

use crate::payload::decode_records;
use crate::snapshot;
use crate::transport::{HttpTransport, Transport};
use crate::FetchError;
use serde_json::Value;
use std::path::Path;
use tracing::info;
use trawl::RecordSet;

/// Base URI of the TVmaze API.
pub const API_BASE_URL: &str = "http://api.tvmaze.com";

/// The one paginated endpoint: the show listing.
///
/// <https://www.tvmaze.com/api#show-index>
pub const PAGINATED_ENDPOINT: &str = "shows";

/// Fetches record sets from the TVmaze API or a local snapshot.
///
/// Generic over [`Transport`] so the pagination and error-mapping logic
/// can be tested against a scripted transport; [`Client::new`] wires in
/// the real HTTP transport against [`API_BASE_URL`].
///
/// The client holds no mutable state, so a shared instance may serve
/// concurrent callers.
#[derive(Debug)]
pub struct Client<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl Client {
    /// A client talking to the real TVmaze API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(API_BASE_URL, HttpTransport::new())
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of fetching a single URI: either records, or a 404.
enum Page {
    Found(Vec<Value>),
    NotFound,
}

impl<T: Transport> Client<T> {
    /// A client with an explicit base URL and transport.
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Fetch records from exactly one source.
    ///
    /// Supplying both an endpoint and a file path, or neither, is a caller
    /// contract violation and fails before any I/O happens.
    ///
    /// # Errors
    ///
    /// [`FetchError::InvalidArgument`] on a contract violation, otherwise
    /// whatever [`Client::fetch`] or [`snapshot::load_from_file`] returns.
    pub fn get_results(
        &self,
        endpoint: Option<&str>,
        data_file_path: Option<&Path>,
    ) -> Result<RecordSet, FetchError> {
        match (endpoint, data_file_path) {
            (Some(_), Some(_)) | (None, None) => Err(FetchError::InvalidArgument),
            (None, Some(path)) => snapshot::load_from_file(path),
            (Some(endpoint), None) => self.fetch(endpoint),
        }
    }

    /// Fetch records from an API endpoint.
    ///
    /// The endpoint is sanitized (leading/trailing slashes stripped) and
    /// resolved against the base URL. The distinguished
    /// [`PAGINATED_ENDPOINT`] — the endpoint exactly as the caller wrote
    /// it, before sanitization — pages through `?page=<n>` starting at 0
    /// and treats the first 404 as the end of the listing; every other
    /// endpoint issues exactly one request, for which a 404 is fatal.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`] — 404 from a non-paginated endpoint
    /// - [`FetchError::Http`] — any other non-success status, including
    ///   mid-pagination
    /// - [`FetchError::Request`] — the request produced no response
    /// - [`FetchError::Parse`] / [`FetchError::NotAnArray`] — bad body
    pub fn fetch(&self, endpoint: &str) -> Result<RecordSet, FetchError> {
        let uri = format!("{}/{}", self.base_url, sanitize_endpoint(endpoint));

        // The raw endpoint selects pagination; sanitization only shapes
        // the URI.
        if endpoint == PAGINATED_ENDPOINT {
            return self.fetch_all_pages(&uri).map(RecordSet::new);
        }

        match self.fetch_page(&uri)? {
            Page::Found(records) => Ok(RecordSet::new(records)),
            Page::NotFound => Err(FetchError::NotFound { uri }),
        }
    }

    /// Concatenate all pages of a paginated listing, in page order.
    fn fetch_all_pages(&self, uri: &str) -> Result<Vec<Value>, FetchError> {
        let mut records = Vec::new();

        for page in 0u32.. {
            match self.fetch_page(&format!("{uri}?page={page}"))? {
                Page::Found(page_records) => records.extend(page_records),
                Page::NotFound => break,
            }
        }

        Ok(records)
    }

    /// Fetch one URI and interpret the status.
    fn fetch_page(&self, uri: &str) -> Result<Page, FetchError> {
        info!(uri, "fetching results");
        let response = self.transport.get(uri)?;

        match response.status {
            404 => Ok(Page::NotFound),
            200..=299 => Ok(Page::Found(decode_records(&response.body, uri)?)),
            status => Err(FetchError::Http {
                status,
                uri: uri.to_owned(),
            }),
        }
    }
}

/// Strip leading/trailing slashes so the endpoint joins cleanly onto the
/// base URL.
fn sanitize_endpoint(endpoint: &str) -> &str {
    endpoint.trim_matches('/')
}
