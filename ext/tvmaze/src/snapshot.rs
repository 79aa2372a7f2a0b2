//! Loading records from a local snapshot file.
//!
//! A snapshot is a plain JSON array of record objects, exactly what a
//! TVmaze endpoint would have returned.

use crate::payload::decode_records;
use crate::FetchError;
use std::fs;
use std::path::Path;
use trawl::RecordSet;

/// Read a snapshot file into a [`RecordSet`], preserving file order.
///
/// # Errors
///
/// - [`FetchError::Io`] if the file cannot be read (including a missing
///   file)
/// - [`FetchError::Parse`] / [`FetchError::NotAnArray`] if the content is
///   not a JSON array of records
pub fn load_from_file(path: &Path) -> Result<RecordSet, FetchError> {
    let content = fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let records = decode_records(&content, &path.display().to_string())?;
    Ok(RecordSet::new(records))
}
