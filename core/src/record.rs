//! `RecordSet` — an immutable ordered collection of catalog records.

use crate::matcher::{is_match, FilterSpec};
use serde_json::Value;

/// An ordered collection of records, as returned by a catalog source.
///
/// Order is preserved from the source (page order for paginated fetches,
/// file order for snapshots) and duplicates are kept. Two sets are equal
/// iff their underlying sequences are equal.
///
/// A `RecordSet` is constructed once by a fetcher and only ever read from
/// afterwards; [`filtered`](Self::filtered) produces a new set rather than
/// mutating this one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSet {
    records: Vec<Value>,
}

impl RecordSet {
    /// Create a set from records in source order.
    #[must_use]
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the set holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records, in source order.
    #[must_use]
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Consume the set, yielding the underlying records.
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        self.records
    }

    /// The sub-sequence of records matching `filter`, relative order
    /// preserved, no deduplication.
    ///
    /// A record that is not a JSON object carries no keys, so it can only
    /// satisfy the empty filter.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use trawl::RecordSet;
    ///
    /// let episodes = RecordSet::new(vec![
    ///     json!({"season": 5, "number": 3, "airtime": "22:00"}),
    ///     json!({"season": 1, "number": 1, "airtime": "22:30"}),
    /// ]);
    ///
    /// let filter = json!({"season": 5, "number": 3});
    /// let filtered = episodes.filtered(filter.as_object().unwrap());
    /// assert_eq!(filtered.records(), &episodes.records()[..1]);
    /// ```
    #[must_use]
    pub fn filtered(&self, filter: &FilterSpec) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|record| match record.as_object() {
                    Some(map) => is_match(map, filter),
                    None => filter.is_empty(),
                })
                .cloned()
                .collect(),
        }
    }
}

impl From<Vec<Value>> for RecordSet {
    fn from(records: Vec<Value>) -> Self {
        Self::new(records)
    }
}

impl IntoIterator for RecordSet {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(value: &Value) -> &FilterSpec {
        value.as_object().expect("filter must be an object")
    }

    fn episodes() -> RecordSet {
        RecordSet::new(vec![
            json!({"season": 5, "number": 3, "airtime": "22:00"}),
            json!({"season": 1, "number": 1, "airtime": "22:30"}),
            json!({"season": 5, "number": 4, "airtime": "22:00"}),
        ])
    }

    #[test]
    fn equality_is_sequence_equality() {
        let a = RecordSet::new(vec![json!({"a": 1}), json!({"b": 2})]);
        let b = RecordSet::new(vec![json!({"a": 1}), json!({"b": 2})]);
        let reversed = RecordSet::new(vec![json!({"b": 2}), json!({"a": 1})]);

        assert_eq!(a, b);
        assert_ne!(a, reversed);
        assert_ne!(a, RecordSet::default());
    }

    #[test]
    fn len_and_is_empty() {
        assert_eq!(episodes().len(), 3);
        assert!(!episodes().is_empty());
        assert!(RecordSet::default().is_empty());
    }

    #[test]
    fn filtered_selects_exact_match() {
        let filter = json!({"season": 5, "number": 3});
        let filtered = episodes().filtered(spec(&filter));
        assert_eq!(
            filtered,
            RecordSet::new(vec![json!({"season": 5, "number": 3, "airtime": "22:00"})]),
        );
    }

    #[test]
    fn filtered_preserves_order() {
        let filter = json!({"airtime": "22:00"});
        let filtered = episodes().filtered(spec(&filter));
        assert_eq!(
            filtered.records(),
            &[
                json!({"season": 5, "number": 3, "airtime": "22:00"}),
                json!({"season": 5, "number": 4, "airtime": "22:00"}),
            ],
        );
    }

    #[test]
    fn filtered_keeps_duplicates() {
        let twin = json!({"season": 1, "number": 1});
        let set = RecordSet::new(vec![twin.clone(), twin.clone()]);
        let filter = json!({"season": 1});
        assert_eq!(set.filtered(spec(&filter)).len(), 2);
    }

    #[test]
    fn filtered_is_idempotent() {
        let filter = json!({"season": 5});
        let once = episodes().filtered(spec(&filter));
        let twice = once.filtered(spec(&filter));
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_filter_keeps_every_record() {
        let filter = json!({});
        assert_eq!(episodes().filtered(spec(&filter)), episodes());
    }

    #[test]
    fn non_object_record_matches_only_empty_filter() {
        let set = RecordSet::new(vec![json!("oops"), json!({"season": 1})]);
        let empty = json!({});
        assert_eq!(set.filtered(spec(&empty)).len(), 2);

        let filter = json!({"season": 1});
        assert_eq!(set.filtered(spec(&filter)).len(), 1);
    }
}
