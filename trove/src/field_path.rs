use crate::errors::{ErrorKind, TroveError, TroveResult};
use crate::record::is_truthy;
use serde_json::Value;
use smallvec::SmallVec;
use std::fmt::Display;

type SegmentVec = SmallVec<[String; 4]>;

/// A parsed field path such as `"label"` or `"nested.child"`.
///
/// Resolution first tries the whole path as a literal top-level key and only
/// then walks the nested segments, so a record with a key named
/// `"nested.child"` resolves that key directly.
///
/// ```rust
/// use serde_json::json;
/// use trove::FieldPath;
///
/// let path = FieldPath::parse("nested.child", ".").unwrap();
/// let record = json!({"nested": {"child": "eek"}});
/// assert_eq!(path.resolve(&record), Some(&json!("eek")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldPath {
    path: String,
    segments: SegmentVec,
}

impl FieldPath {
    /// Parses `path` using `separator` to split nested segments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the path is empty or any of its nested
    /// segments is empty (`"a..b"`, `".a"`).
    pub fn parse(path: &str, separator: &str) -> TroveResult<Self> {
        if path.is_empty() {
            log::error!("Field path cannot be empty");
            return Err(TroveError::new(
                "Field path cannot be empty",
                ErrorKind::InvalidArgument,
            ));
        }

        let segments: SegmentVec = path.split(separator).map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            log::error!("Field path '{}' contains an empty segment", path);
            return Err(TroveError::new(
                &format!("Field path '{}' contains an empty segment", path),
                ErrorKind::InvalidArgument,
            ));
        }

        Ok(FieldPath {
            path: path.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolves this path against `record`, returning `None` when any segment
    /// is missing.
    pub fn resolve<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        if let Some(value) = record.get(self.path.as_str()) {
            return Some(value);
        }
        if !self.is_nested() {
            return None;
        }
        walk(record, self.segments.iter().map(String::as_str))
    }

    /// Resolves the value this path contributes to an index, if any.
    ///
    /// Absent values are never indexed; with `skip_falsy` set, falsy values
    /// (`null`, `false`, `0`, `""`) are treated as absent too.
    pub(crate) fn resolve_indexable<'a>(
        &self,
        record: &'a Value,
        skip_falsy: bool,
    ) -> Option<&'a Value> {
        self.resolve(record)
            .filter(|value| !skip_falsy || is_truthy(value))
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}

/// Resolves an ad-hoc `path` (not declared as index) against `record`.
///
/// Same rules as [`FieldPath::resolve`] without validating the path.
pub(crate) fn resolve_path<'a>(record: &'a Value, path: &str, separator: &str) -> Option<&'a Value> {
    if let Some(value) = record.get(path) {
        return Some(value);
    }
    if path.is_empty() || !path.contains(separator) {
        return None;
    }
    walk(record, path.split(separator))
}

fn walk<'a, 'p>(record: &'a Value, segments: impl Iterator<Item = &'p str>) -> Option<&'a Value> {
    let mut current = record;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            // array elements are addressed by their position
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
