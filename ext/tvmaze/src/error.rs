//! Fetcher error taxonomy.
//!
//! Every error here is fatal: the fetcher performs no retries and no local
//! recovery, so failures surface to the caller unmodified.

use thiserror::Error;

/// Errors from fetching records over HTTP or from a snapshot file.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The caller supplied both an endpoint and a data file path, or
    /// neither. Exactly one source must be given.
    #[error("exactly one of an endpoint or a data file path must be supplied")]
    InvalidArgument,

    /// A non-paginated endpoint returned 404. For paginated listings a 404
    /// means "no more pages" and is not an error.
    #[error("resource \"{uri}\" not found")]
    NotFound {
        /// The absolute URI that was queried.
        uri: String,
    },

    /// The server answered with a non-success, non-404 status.
    #[error("HTTP {status} returned by querying \"{uri}\"")]
    Http {
        /// The status code the server returned.
        status: u16,
        /// The absolute URI that was queried.
        uri: String,
    },

    /// The request never produced a response (connection refused, DNS
    /// failure, invalid URI, ...).
    #[error("request to \"{uri}\" failed")]
    Request {
        /// The absolute URI that was queried.
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// A snapshot file could not be read (including a missing file).
    #[error("failed to read \"{path}\"")]
    Io {
        /// The snapshot path that was opened.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A response body or snapshot file was not well-formed JSON.
    #[error("malformed records in {origin}")]
    Parse {
        /// Where the bad payload came from (a URI or a file path).
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON that is not an array of records.
    #[error("{origin} did not contain a JSON array of records")]
    NotAnArray {
        /// Where the payload came from (a URI or a file path).
        origin: String,
    },
}
