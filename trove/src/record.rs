use crate::canonical::canonical_number;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Debug, Display};

/// A stored record. Only `Value::Object` is accepted by the collection.
pub type Record = Value;

/// A stable handle to a record inside one collection.
///
/// Ids are handed out in increasing order and never reused, so an index slot
/// holding an id can never end up pointing at a different record after a
/// removal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(u64);

impl RecordId {
    pub(crate) fn new(value: u64) -> Self {
        RecordId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

/// Returns true for every value that JSON-in-JavaScript treats as truthy.
///
/// Objects and arrays are truthy even when empty.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Structural equality where numbers compare by their canonical spelling,
/// so `1` and `1.0` are equal and a scan agrees with an index lookup.
pub(crate) fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => canonical_number(a) == canonical_number(b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => left == right,
    }
}
