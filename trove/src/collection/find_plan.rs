use crate::canonical::CanonicalKey;
use crate::conditions::Conditions;
use crate::errors::TroveResult;
use crate::index::IndexSet;
use serde_json::Value;
use std::fmt::Display;

/// How a `find` call is executed.
///
/// Returned by [`crate::Collection::explain`] so callers can check whether a
/// query is served by an index or by scanning every record.
#[derive(Debug, Clone, PartialEq)]
pub enum FindPlan {
    /// No condition: copy out every record.
    All,
    /// The field is declared: read its single index slot.
    IndexLookup { field: String, key: CanonicalKey },
    /// The field is not declared: compare every record in order.
    Scan { field: String, value: Value },
}

impl FindPlan {
    pub(crate) fn create(conditions: &Value, indexes: &IndexSet) -> TroveResult<Self> {
        let plan = match Conditions::parse_single(conditions)? {
            Conditions::All => FindPlan::All,
            Conditions::Field { field, value, .. } if indexes.is_indexed(field) => {
                FindPlan::IndexLookup {
                    field: field.to_string(),
                    key: CanonicalKey::of(value),
                }
            }
            Conditions::Field { field, value, .. } => FindPlan::Scan {
                field: field.to_string(),
                value: value.clone(),
            },
        };
        log::debug!("Find plan: {}", plan);
        Ok(plan)
    }

    pub fn is_index_lookup(&self) -> bool {
        matches!(self, FindPlan::IndexLookup { .. })
    }
}

impl Display for FindPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindPlan::All => write!(f, "all records"),
            FindPlan::IndexLookup { field, key } => write!(f, "index lookup {} = {}", field, key),
            FindPlan::Scan { field, value } => write!(f, "scan {} = {}", field, value),
        }
    }
}
