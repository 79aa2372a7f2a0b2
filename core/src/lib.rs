//! trawl — structural record matching over JSON value trees
//!
//! A record is an arbitrary-depth JSON object; a filter is a *partial*
//! object of the same shape. Every key present in the filter constrains
//! the corresponding record key; absent keys are unconstrained.
//!
//! # Matching semantics
//!
//! - Object against object → recursive match
//! - Any array involved → the filter-side values, viewed as a set, must be
//!   a **subset** of the record-side values (scalars coerce to singletons)
//! - Anything else → exact equality, strict about JSON types
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use trawl::RecordSet;
//!
//! let shows = RecordSet::new(vec![
//!     json!({"name": "Archer", "schedule": {"days": ["Wednesday"]}}),
//!     json!({"name": "Firefly", "schedule": {"days": ["Friday", "Saturday"]}}),
//! ]);
//!
//! let filter = serde_json::json!({"schedule": {"days": "Saturday"}});
//! let filtered = shows.filtered(filter.as_object().unwrap());
//! assert_eq!(filtered.len(), 1);
//! ```
//!
//! Matching is read-only; neither tree is mutated, so the matcher is safe
//! to call concurrently without locking.
//!
//! Fetching records from the TVmaze API or a snapshot file lives in the
//! companion `trawl-tvmaze` crate; this crate is pure computation.

mod matcher;
mod record;

pub use matcher::{is_match, FilterSpec};
pub use record::RecordSet;
