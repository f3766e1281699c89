use crate::canonical::CanonicalKey;
use crate::record::RecordId;
use indexmap::IndexMap;

/// The single-slot index of one declared field.
///
/// Each canonical key maps to exactly one record id: the first record that
/// produced the key claims it and later records with the same key are never
/// stored here.
#[derive(Debug, Default, Clone)]
pub struct IndexSlot {
    entries: IndexMap<CanonicalKey, RecordId>,
}

impl IndexSlot {
    pub fn new() -> Self {
        IndexSlot {
            entries: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &CanonicalKey) -> Option<RecordId> {
        self.entries.get(key).copied()
    }

    /// Stores `id` under `key` unless the key is already claimed.
    ///
    /// Returns true when the entry was written.
    pub fn insert_if_absent(&mut self, key: CanonicalKey, id: RecordId) -> bool {
        match self.entries.entry(key) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(id);
                true
            }
        }
    }

    /// Removes the entry for `key` only if it is backed by `id`.
    pub fn remove_if_backed_by(&mut self, key: &CanonicalKey, id: RecordId) -> bool {
        if self.entries.get(key) == Some(&id) {
            self.entries.shift_remove(key);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, RecordId)> {
        self.entries.iter().map(|(key, id)| (key, *id))
    }
}
