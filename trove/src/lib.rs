//! # Trove - Ordered In-Memory Record Collection
//!
//! Trove keeps JSON records in insertion order and maintains single-slot
//! secondary indexes on declared field paths.
//!
//! ## Key Features
//!
//! - **Ordered**: records are returned in the order they were added
//! - **First-wins indexes**: an indexed value maps to the first record that produced it
//! - **Nested paths**: `"nested.child"` resolves inside nested objects, with a configurable separator
//! - **Scans**: conditions on undeclared fields compare every record structurally
//! - **Shared handle**: clones of a [`Collection`] share one lock-protected state
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use trove::Collection;
//!
//! # fn main() -> trove::TroveResult<()> {
//! let collection = Collection::create([("label", true)])?;
//! collection.add(json!([
//!     {"label": "same", "n": 1},
//!     {"label": "same", "n": 2},
//! ]))?;
//!
//! // the index keeps the first record with a given value
//! assert_eq!(collection.find(&json!({"label": "same"}))?, vec![json!({"label": "same", "n": 1})]);
//!
//! // scans see every record
//! assert_eq!(collection.find(&json!({"n": 2}))?.len(), 1);
//!
//! // removing the first record hands the slot to the next one
//! collection.remove(&json!({"n": 1}), false)?;
//! assert_eq!(collection.find(&json!({"label": "same"}))?, vec![json!({"label": "same", "n": 2})]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - The collection handle, find plans and write results
//! - [`builder`] - Collection builder
//! - [`config`] - Collection configuration
//! - [`canonical`] - Canonical encoding of index keys
//! - [`field_path`] - Field path parsing and resolution
//! - [`record`] - Records and record ids
//! - [`errors`] - Error types and result definitions

pub mod builder;
pub mod canonical;
pub mod collection;
pub(crate) mod conditions;
pub mod config;
pub mod errors;
pub mod field_path;
pub(crate) mod index;
pub mod record;

pub use builder::CollectionBuilder;
pub use canonical::CanonicalKey;
pub use collection::{Collection, FindPlan, WriteResult};
pub use config::CollectionConfig;
pub use errors::{ErrorKind, TroveError, TroveResult};
pub use field_path::FieldPath;
pub use record::{Record, RecordId};
