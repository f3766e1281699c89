use super::{FindPlan, RecordStore, WriteResult};
use crate::builder::CollectionBuilder;
use crate::config::CollectionConfig;
use crate::errors::{ErrorKind, TroveError, TroveResult};
use crate::field_path::FieldPath;
use crate::index::IndexSet;
use crate::record::{Record, RecordId};
use itertools::Itertools;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

/// An ordered collection of records with declared single-slot field indexes.
///
/// Records are kept in insertion order. For every declared field path the
/// collection keeps an index from the canonical key of the resolved value to
/// the *first* record that produced it ("first-wins"): later records with
/// the same value are stored and returned by scans, but never by an index
/// lookup while the first one is present.
///
/// `Collection` is a handle: clones share the same records and indexes. All
/// state sits behind one lock, so a reader never sees a record in the list
/// without its index entries or the other way round.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use trove::Collection;
///
/// # fn main() -> trove::TroveResult<()> {
/// let collection = Collection::create([("label", true), ("nested.child", true)])?;
/// collection.add(json!({"label": "test", "nested": {"child": "eek"}}))?;
///
/// let found = collection.find(&json!({"nested.child": "eek"}))?;
/// assert_eq!(found, vec![json!({"label": "test", "nested": {"child": "eek"}})]);
/// assert!(collection.find(&json!({"unIndexedField": "meow"}))?.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Collection {
    inner: Arc<RwLock<CollectionInner>>,
}

pub(crate) struct CollectionInner {
    pub(crate) config: CollectionConfig,
    pub(crate) store: RecordStore,
    pub(crate) indexes: IndexSet,
}

impl Default for Collection {
    fn default() -> Self {
        Collection::new(CollectionConfig::default(), Vec::new())
    }
}

impl Collection {
    pub(crate) fn new(config: CollectionConfig, paths: Vec<FieldPath>) -> Self {
        log::debug!(
            "Creating collection indexed on [{}]",
            paths.iter().map(FieldPath::as_str).join(", ")
        );
        let indexes = IndexSet::new(paths, config.skip_falsy_values());
        Collection {
            inner: Arc::new(RwLock::new(CollectionInner {
                config,
                store: RecordStore::new(),
                indexes,
            })),
        }
    }

    /// Returns a builder to configure the collection before creating it.
    pub fn builder() -> CollectionBuilder {
        CollectionBuilder::new()
    }

    /// Creates a collection from `(field path, indexed)` pairs; every pair
    /// set to `true` declares an index.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty path or a path with an empty
    /// nested segment.
    pub fn create<I, S>(specs: I) -> TroveResult<Self>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        CollectionBuilder::new().indexes(specs).build()
    }

    /// Creates a collection from a `{"path": true, ...}` object. `null`
    /// creates a collection without indexes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `spec` is neither an object nor `null`,
    /// or if one of its values is not a boolean.
    pub fn from_spec(spec: &Value) -> TroveResult<Self> {
        let map = match spec {
            Value::Null => return CollectionBuilder::new().build(),
            Value::Object(map) => map,
            other => {
                log::error!("Index spec must be an object, got {}", other);
                return Err(TroveError::new(
                    "Index spec must be an object of field paths to booleans",
                    ErrorKind::InvalidArgument,
                ));
            }
        };

        let mut specs = Vec::with_capacity(map.len());
        for (path, flag) in map {
            match flag.as_bool() {
                Some(indexed) => specs.push((path.as_str(), indexed)),
                None => {
                    log::error!("Index spec for '{}' must be a boolean, got {}", path, flag);
                    return Err(TroveError::new(
                        &format!("Index spec for '{}' must be a boolean", path),
                        ErrorKind::InvalidArgument,
                    ));
                }
            }
        }
        Collection::create(specs)
    }

    /// Appends a record, or every record of an array in order.
    ///
    /// Each record is indexed on every declared field whose value is not
    /// already claimed by an earlier record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `element` (or an array member) is not an
    /// object. Members before the failing one remain added.
    pub fn add(&self, element: Value) -> TroveResult<WriteResult> {
        let mut added = Vec::new();
        let mut inner = self.inner.write();
        inner.add(element, &mut added)?;
        Ok(WriteResult::new(added))
    }

    /// Converts `element` to a record with serde and adds it.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError` if the value cannot be represented as JSON,
    /// plus the errors of [`Collection::add`].
    pub fn add_serializable<T: Serialize + ?Sized>(&self, element: &T) -> TroveResult<WriteResult> {
        let value = serde_json::to_value(element).map_err(|err| {
            log::error!("Failed to convert value to a record: {}", err);
            TroveError::from(err)
        })?;
        self.add(value)
    }

    /// Same as [`Collection::add`].
    pub fn merge(&self, elements: Value) -> TroveResult<WriteResult> {
        self.add(elements)
    }

    /// Finds every record matching a single-field condition.
    ///
    /// `null` or `{}` returns a copy of every record. A declared field is
    /// answered from its index and yields at most one record; any other
    /// field is scanned in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `NotImplemented` for conditions with more than one field and
    /// `InvalidArgument` for conditions that are not an object.
    pub fn find(&self, conditions: &Value) -> TroveResult<Vec<Record>> {
        self.find_with(conditions, false)
    }

    /// Like [`Collection::find`]; with `one` set, a scan stops at the first
    /// match. Without a condition every record is returned either way.
    pub fn find_with(&self, conditions: &Value, one: bool) -> TroveResult<Vec<Record>> {
        let inner = self.inner.read();
        inner.find(conditions, one)
    }

    /// Returns the first record matching `conditions`, if any.
    pub fn find_one(&self, conditions: &Value) -> TroveResult<Option<Record>> {
        Ok(self.find_with(conditions, true)?.into_iter().next())
    }

    /// Returns the plan `find` would run for `conditions`.
    pub fn explain(&self, conditions: &Value) -> TroveResult<FindPlan> {
        let inner = self.inner.read();
        inner.explain(conditions)
    }

    /// Removes the first record matching `conditions` and returns how many
    /// records were removed.
    ///
    /// Without a condition (`null` or `{}`) the collection is cleared, unless
    /// `one` is set and more than one record is stored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` when asked to remove exactly one record
    /// without a condition from a collection holding several, and
    /// `InvalidArgument` for conditions that are not an object.
    pub fn remove(&self, conditions: &Value, one: bool) -> TroveResult<usize> {
        let mut inner = self.inner.write();
        inner.remove(conditions, one)
    }

    /// Removes every record and empties every index; declared fields stay.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Copies out every record in insertion order.
    pub fn to_vec(&self) -> Vec<Record> {
        self.inner.read().store.to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.read().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().store.is_empty()
    }

    /// Returns a copy of the record stored under `id`.
    pub fn get(&self, id: RecordId) -> Option<Record> {
        self.inner.read().store.get(&id).cloned()
    }

    /// Ids of every stored record, in insertion order.
    pub fn ids(&self) -> Vec<RecordId> {
        self.inner.read().store.iter().map(|(id, _)| id).collect()
    }

    /// Declared field paths, in declaration order.
    pub fn indexed_fields(&self) -> Vec<String> {
        self.inner.read().indexes.field_names()
    }

    /// Copies every index out as `field path -> canonical key -> record id`.
    pub fn index_snapshot(&self) -> BTreeMap<String, BTreeMap<String, RecordId>> {
        self.inner.read().indexes.snapshot()
    }

    pub fn config(&self) -> CollectionConfig {
        self.inner.read().config.clone()
    }
}

impl Debug for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Collection")
            .field("len", &inner.store.len())
            .field("indexed_fields", &inner.indexes.field_names())
            .field("index_entries", &inner.indexes.entry_count())
            .finish()
    }
}
