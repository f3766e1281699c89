//! The collection and its read and write operations.

#[allow(clippy::module_inception)]
mod collection;
mod find_plan;
mod read_operations;
mod store;
mod write_operations;
mod write_result;

pub use collection::Collection;
pub use find_plan::FindPlan;
pub(crate) use store::RecordStore;
pub use write_result::WriteResult;
