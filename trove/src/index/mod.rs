//! Declared field indexes.
//!
//! Every declared field path owns one [`IndexSlot`], a map from the
//! canonical key of a resolved value to the id of the *first* stored record
//! that resolved to it. Later records sharing the value stay in the
//! collection but are only reachable through scans or after the
//! representative is removed.

mod index_set;
mod index_slot;

pub(crate) use index_set::IndexSet;
pub(crate) use index_slot::IndexSlot;
