//! trawl-tvmaze — record sources for the trawl matcher.
//!
//! Produces [`RecordSet`](trawl::RecordSet)s from either the TVmaze API
//! (with sequential pagination on the show listing) or a local snapshot
//! file, via a single entry point:
//!
//! ```no_run
//! use trawl_tvmaze::Client;
//!
//! let client = Client::new();
//! let results = client.get_results(Some("shows/315/episodes"), None)?;
//! # Ok::<(), trawl_tvmaze::FetchError>(())
//! ```
//!
//! All errors are fatal and surface unmodified: there is no retry policy
//! at this layer. Requests are traced at info level through `tracing`.

mod client;
mod error;
mod payload;
pub mod snapshot;
mod transport;

pub use client::{Client, API_BASE_URL, PAGINATED_ENDPOINT};
pub use error::FetchError;
pub use snapshot::load_from_file;
pub use transport::{HttpTransport, Response, Transport};
