//! The transport seam — one blocking GET at a time.
//!
//! [`Client`](crate::Client) is generic over [`Transport`] so the
//! pagination and error-mapping logic can be exercised against a scripted
//! fake; the production implementation is a thin wrapper over
//! `reqwest::blocking`.

use crate::FetchError;

/// A raw HTTP response, reduced to what the client interprets.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response body, undecoded.
    pub body: String,
}

/// Issues a single blocking GET request.
///
/// Implementations must be `Send + Sync`; the client itself holds no
/// mutable state, so a transport shared between callers must tolerate
/// concurrent `get` calls.
pub trait Transport: Send + Sync {
    /// Fetch `uri`, returning the status and body of whatever the server
    /// answered.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] when no response was produced at
    /// all. Non-success *statuses* are not errors at this layer; the
    /// client decides what a 404 means.
    fn get(&self, uri: &str) -> Result<Response, FetchError>;
}

/// Production transport backed by `reqwest::blocking`.
#[derive(Debug, Default)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport with a default `reqwest` client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    fn get(&self, uri: &str) -> Result<Response, FetchError> {
        let request_failed = |source: reqwest::Error| FetchError::Request {
            uri: uri.to_owned(),
            source,
        };

        let response = self.client.get(uri).send().map_err(request_failed)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(request_failed)?;

        Ok(Response { status, body })
    }
}
