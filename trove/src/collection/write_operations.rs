use super::collection::CollectionInner;
use crate::conditions::Conditions;
use crate::errors::{ErrorKind, TroveError, TroveResult};
use crate::field_path::resolve_path;
use crate::record::{values_equal, Record, RecordId};
use serde_json::Value;

impl CollectionInner {
    /// Appends `element`, or every member of it when it is an array.
    ///
    /// Ids of appended records are pushed to `added` as they are stored, so
    /// the members added before a failing one stay in the collection.
    pub(crate) fn add(&mut self, element: Value, added: &mut Vec<RecordId>) -> TroveResult<()> {
        match element {
            Value::Array(members) => {
                for member in members {
                    self.add(member, added)?;
                }
                Ok(())
            }
            record @ Value::Object(_) => {
                added.push(self.insert_record(record));
                Ok(())
            }
            other => {
                log::error!("add() requires an object or an array of objects, got {}", other);
                Err(TroveError::new(
                    "add() requires an object or an array of objects",
                    ErrorKind::InvalidArgument,
                ))
            }
        }
    }

    fn insert_record(&mut self, record: Record) -> RecordId {
        let id = self.store.push(record);
        if let Some(stored) = self.store.get(&id) {
            self.indexes.index_record(id, stored);
        }
        id
    }

    /// Removes the first record matching `conditions`, or everything when
    /// there is no condition. Returns the number of removed records.
    pub(crate) fn remove(&mut self, conditions: &Value, one: bool) -> TroveResult<usize> {
        match Conditions::parse(conditions)? {
            Conditions::All => {
                if one && self.store.len() > 1 {
                    log::error!(
                        "Cannot remove exactly one record without a condition from {} records",
                        self.store.len()
                    );
                    return Err(TroveError::new(
                        "remove() of exactly one record requires a condition when the collection holds more than one record",
                        ErrorKind::InvalidOperation,
                    ));
                }
                let removed = self.store.len();
                self.clear();
                Ok(removed)
            }
            Conditions::Field { field, value, extra } => {
                if extra > 0 {
                    log::warn!("remove() only matches on '{}', ignoring {} other field(s)", field, extra);
                }

                let separator = self.config.field_separator();
                let target = self.store.find_first(|record| {
                    resolve_path(record, field, separator).is_some_and(|v| values_equal(v, value))
                });

                let Some(id) = target else {
                    log::debug!("remove() found no record with {} = {}", field, value);
                    return Ok(0);
                };
                match self.store.remove(&id) {
                    Some(record) => {
                        self.indexes.unindex_record(id, &record, &self.store);
                        Ok(1)
                    }
                    None => {
                        log::error!("Record {} matched but is missing from the store", id);
                        Err(TroveError::new(
                            &format!("Record {} matched but is missing from the store", id),
                            ErrorKind::InternalError,
                        ))
                    }
                }
            }
        }
    }

    /// Empties the records and every index slot; declared fields are kept.
    pub(crate) fn clear(&mut self) {
        log::debug!("Clearing {} records", self.store.len());
        self.store.clear();
        self.indexes.clear();
    }
}
