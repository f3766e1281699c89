use super::IndexSlot;
use crate::canonical::CanonicalKey;
use crate::collection::RecordStore;
use crate::field_path::FieldPath;
use crate::record::{Record, RecordId};
use indexmap::IndexMap;
use std::collections::BTreeMap;

struct FieldIndex {
    path: FieldPath,
    slot: IndexSlot,
}

/// One [`IndexSlot`] per declared field path.
///
/// The set of fields is fixed at construction; only slot contents change.
pub(crate) struct IndexSet {
    fields: IndexMap<String, FieldIndex>,
    skip_falsy: bool,
}

impl IndexSet {
    pub fn new(paths: Vec<FieldPath>, skip_falsy: bool) -> Self {
        let fields = paths
            .into_iter()
            .map(|path| {
                (
                    path.as_str().to_string(),
                    FieldIndex {
                        path,
                        slot: IndexSlot::new(),
                    },
                )
            })
            .collect();
        IndexSet { fields, skip_falsy }
    }

    pub fn is_indexed(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    pub fn lookup(&self, field: &str, key: &CanonicalKey) -> Option<RecordId> {
        self.fields.get(field)?.slot.get(key)
    }

    /// Claims every still-free slot `record` resolves to.
    pub fn index_record(&mut self, id: RecordId, record: &Record) {
        let skip_falsy = self.skip_falsy;
        for field_index in self.fields.values_mut() {
            if let Some(value) = field_index.path.resolve_indexable(record, skip_falsy) {
                let key = CanonicalKey::of(value);
                if !field_index.slot.insert_if_absent(key, id) {
                    log::trace!(
                        "Record {} not indexed on '{}', value already claimed",
                        id,
                        field_index.path
                    );
                }
            }
        }
    }

    /// Drops the entries backed by the removed record `id`.
    ///
    /// `store` must no longer contain the record. When another stored record
    /// resolves to a vacated key, the earliest one takes over the entry.
    pub fn unindex_record(&mut self, id: RecordId, record: &Record, store: &RecordStore) {
        let skip_falsy = self.skip_falsy;
        for field_index in self.fields.values_mut() {
            let Some(value) = field_index.path.resolve_indexable(record, skip_falsy) else {
                continue;
            };
            let key = CanonicalKey::of(value);
            if !field_index.slot.remove_if_backed_by(&key, id) {
                continue;
            }

            let path = &field_index.path;
            let successor = store.find_first(|candidate| {
                path.resolve_indexable(candidate, skip_falsy)
                    .is_some_and(|v| CanonicalKey::of(v) == key)
            });
            if let Some(successor) = successor {
                log::trace!("Record {} now backs '{}' = {}", successor, path, key);
                field_index.slot.insert_if_absent(key, successor);
            }
        }
    }

    pub fn clear(&mut self) {
        for field_index in self.fields.values_mut() {
            field_index.slot.clear();
        }
    }

    /// Copies every slot out, keyed by field path then canonical key.
    pub fn snapshot(&self) -> BTreeMap<String, BTreeMap<String, RecordId>> {
        self.fields
            .iter()
            .map(|(name, field_index)| {
                let entries = field_index
                    .slot
                    .iter()
                    .map(|(key, id)| (key.as_str().to_string(), id))
                    .collect();
                (name.clone(), entries)
            })
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.fields.values().map(|f| f.slot.len()).sum()
    }
}
