//! The structural matcher — filter trees evaluated against record trees.
//!
//! [`is_match`] is a pure predicate: no I/O, no mutation, no failure mode.
//! Unexpected value shapes fail to match instead of raising.

use serde_json::{Map, Value};
use std::slice;

/// A partial record tree: every key constrains the matching record key.
///
/// Same representation as a record object; the distinction is purely
/// positional (filters go on the left of [`is_match`]'s second argument).
pub type FilterSpec = Map<String, Value>;

/// Returns `true` iff `record` satisfies every constraint in `filter`.
///
/// Evaluated key-by-key over the filter's keys; the result does not depend
/// on iteration order because every key must pass. An empty filter matches
/// every record.
///
/// Per-key rules:
///
/// 1. Key absent from the record → no match.
/// 2. Both values objects → recurse.
/// 3. Either value an array, the other an array or scalar → set-subset
///    check: the filter-side elements must all occur among the
///    record-side elements. Scalars coerce to singletons, so a filter of
///    `"Saturday"` matches a record field of `["Saturday", "Sunday"]` and
///    vice versa. A bare object next to an array does not coerce; that
///    shape falls to rule 4.
/// 4. Otherwise → exact equality. JSON types are strict: the number `5`
///    never matches the string `"5"`, and an object never equals an
///    array, so mismatched shapes fail to match instead of raising.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use trawl::is_match;
///
/// let record = json!({"season": 5, "number": 3, "airtime": "22:00"});
/// let filter = json!({"season": 5, "number": 3});
///
/// assert!(is_match(
///     record.as_object().unwrap(),
///     filter.as_object().unwrap(),
/// ));
/// ```
#[must_use]
pub fn is_match(record: &Map<String, Value>, filter: &FilterSpec) -> bool {
    filter.iter().all(|(key, filter_val)| {
        record
            .get(key)
            .is_some_and(|record_val| value_matches(record_val, filter_val))
    })
}

/// Match a single record value against a single filter value.
fn value_matches(record_val: &Value, filter_val: &Value) -> bool {
    match (record_val, filter_val) {
        (Value::Object(record), Value::Object(filter)) => is_match(record, filter),
        // Only scalars coerce into singleton sets; a bare object next to
        // an array takes the equality branch instead.
        (record, filter)
            if (record.is_array() || filter.is_array())
                && !record.is_object()
                && !filter.is_object() =>
        {
            subset_of(filter, record)
        }
        (record, filter) => filter == record,
    }
}

/// Set-subset check: every filter-side element occurs on the record side.
///
/// Element order and duplicate counts are irrelevant, matching set
/// semantics; membership is plain `Value` equality, so object elements are
/// well-defined (they compare structurally) rather than an error.
fn subset_of(filter_val: &Value, record_val: &Value) -> bool {
    let record_elems = as_elements(record_val);
    as_elements(filter_val)
        .iter()
        .all(|wanted| record_elems.contains(wanted))
}

/// View a value as its element set: arrays yield their elements, anything
/// else a singleton.
fn as_elements(value: &Value) -> &[Value] {
    match value {
        Value::Array(elems) => elems,
        other => slice::from_ref(other),
    }
}
