use super::collection::CollectionInner;
use super::FindPlan;
use crate::errors::TroveResult;
use crate::field_path::resolve_path;
use crate::record::{values_equal, Record};
use serde_json::Value;

impl CollectionInner {
    pub(crate) fn find(&self, conditions: &Value, one: bool) -> TroveResult<Vec<Record>> {
        let plan = self.explain(conditions)?;
        Ok(self.execute(&plan, one))
    }

    pub(crate) fn explain(&self, conditions: &Value) -> TroveResult<FindPlan> {
        FindPlan::create(conditions, &self.indexes)
    }

    /// Runs `plan`; with `one` set a scan stops at its first match. Without
    /// a condition every record is copied out regardless of `one`.
    fn execute(&self, plan: &FindPlan, one: bool) -> Vec<Record> {
        match plan {
            FindPlan::All => self.store.to_vec(),
            // a slot holds at most one record, the first stored with this key
            FindPlan::IndexLookup { field, key } => self
                .indexes
                .lookup(field, key)
                .and_then(|id| self.store.get(&id))
                .cloned()
                .into_iter()
                .collect(),
            FindPlan::Scan { field, value } => {
                let limit = if one { 1 } else { usize::MAX };
                let separator = self.config.field_separator();
                self.store
                    .iter()
                    .map(|(_, record)| record)
                    .filter(|record| {
                        resolve_path(record, field, separator)
                            .is_some_and(|found| values_equal(found, value))
                    })
                    .take(limit)
                    .cloned()
                    .collect()
            }
        }
    }
}
