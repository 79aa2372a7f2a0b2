//! Decoding record payloads shared by the HTTP and snapshot paths.

use crate::FetchError;
use serde_json::Value;

/// Decode a payload that must be a JSON array of records.
///
/// `origin` names where the payload came from (a URI or a file path) and
/// ends up in the error message.
pub(crate) fn decode_records(body: &str, origin: &str) -> Result<Vec<Value>, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|source| FetchError::Parse {
        origin: origin.to_owned(),
        source,
    })?;

    match value {
        Value::Array(records) => Ok(records),
        _ => Err(FetchError::NotAnArray {
            origin: origin.to_owned(),
        }),
    }
}
