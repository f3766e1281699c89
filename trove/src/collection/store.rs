use crate::record::{Record, RecordId};
use indexmap::IndexMap;

/// Insertion-ordered backing store of a collection.
///
/// Records are keyed by their [`RecordId`] so index slots can hold ids
/// instead of references; removing a record keeps the order of the rest.
#[derive(Debug)]
pub(crate) struct RecordStore {
    records: IndexMap<RecordId, Record>,
    next_id: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore {
            records: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Appends `record` and returns its freshly assigned id.
    pub fn push(&mut self, record: Record) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        self.records.insert(id, record);
        id
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.get(id)
    }

    /// Removes the record with `id`, shifting the later records down.
    pub fn remove(&mut self, id: &RecordId) -> Option<Record> {
        self.records.shift_remove(id)
    }

    /// Returns the id of the first record, in insertion order, accepted by
    /// `predicate`.
    pub fn find_first<F>(&self, mut predicate: F) -> Option<RecordId>
    where
        F: FnMut(&Record) -> bool,
    {
        self.records
            .iter()
            .find(|(_, record)| predicate(record))
            .map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Record)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    /// Copies every record out, in insertion order.
    pub fn to_vec(&self) -> Vec<Record> {
        self.records.values().cloned().collect()
    }

    /// Drops every record. Ids keep increasing after a clear.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
