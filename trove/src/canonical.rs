use itertools::Itertools;
use serde::Serialize;
use serde_json::{Number, Value};
use std::borrow::Borrow;
use std::fmt::Display;

// integral floats below 2^64 in magnitude are printed as integers
const INTEGRAL_FLOAT_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Deterministic string encoding of a field value, used as index lookup key.
///
/// The encoding is compact JSON with object members sorted by key and
/// integral floating-point numbers written as integers, so structurally
/// equal values always produce the same key:
///
/// ```rust
/// use serde_json::json;
/// use trove::CanonicalKey;
///
/// let a = CanonicalKey::of(&json!({"b": 1.0, "a": "x"}));
/// let b = CanonicalKey::of(&json!({"a": "x", "b": 1}));
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), r#"{"a":"x","b":1}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Encodes `value` into its canonical key.
    pub fn of(value: &Value) -> Self {
        let mut buf = String::new();
        write_canonical(value, &mut buf);
        CanonicalKey(buf)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for CanonicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CanonicalKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

fn write_canonical(value: &Value, buf: &mut String) {
    match value {
        Value::Number(n) => buf.push_str(&canonical_number(n)),
        Value::Array(items) => {
            buf.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(',');
                }
                write_canonical(item, buf);
            }
            buf.push(']');
        }
        Value::Object(map) => {
            buf.push('{');
            // sorted explicitly, the map order depends on serde_json features
            for (i, (key, item)) in map.iter().sorted_by(|a, b| a.0.cmp(b.0)).enumerate() {
                if i > 0 {
                    buf.push(',');
                }
                buf.push_str(&Value::String(key.clone()).to_string());
                buf.push(':');
                write_canonical(item, buf);
            }
            buf.push('}');
        }
        // null, booleans and strings already have a single JSON spelling
        other => buf.push_str(&other.to_string()),
    }
}

/// Single spelling of a number, shared by index keys and scan equality.
///
/// Integers and integral floats below 2^64 in magnitude are written as
/// integers, so `3`, `3.0` and `2^60` as a float all spell the same.
pub(crate) fn canonical_number(n: &Number) -> String {
    if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
        if f.fract() == 0.0 && f.abs() < INTEGRAL_FLOAT_LIMIT {
            return (f as i128).to_string();
        }
    }
    n.to_string()
}
