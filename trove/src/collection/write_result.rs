use crate::record::RecordId;

/// The result of an `add`/`merge` call.
///
/// Holds the ids of the appended records in insertion order.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use trove::Collection;
///
/// let collection = Collection::create([("label", true)]).unwrap();
/// let result = collection.add(json!([{"label": "a"}, {"label": "b"}])).unwrap();
/// assert_eq!(result.len(), 2);
/// for id in result.affected_ids() {
///     assert!(collection.get(*id).is_some());
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteResult {
    record_ids: Vec<RecordId>,
}

impl WriteResult {
    pub(crate) fn new(record_ids: Vec<RecordId>) -> Self {
        Self { record_ids }
    }

    /// Ids of the appended records, in the order they were added.
    pub fn affected_ids(&self) -> &[RecordId] {
        &self.record_ids
    }

    pub fn len(&self) -> usize {
        self.record_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_ids.is_empty()
    }
}

impl IntoIterator for WriteResult {
    type Item = RecordId;
    type IntoIter = std::vec::IntoIter<RecordId>;

    fn into_iter(self) -> Self::IntoIter {
        self.record_ids.into_iter()
    }
}
