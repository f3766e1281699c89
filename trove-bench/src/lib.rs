//! Trove Benchmark Library
//!
//! Data generators and collection fixtures shared by the benchmarks.

pub mod data_gen;

use trove::errors::TroveResult;
use trove::Collection;

/// Fields indexed by [`create_indexed_collection`].
pub const BENCH_INDEXES: [&str; 3] = ["id", "email", "address.city"];

/// Enables `RUST_LOG` controlled logging once per benchmark binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn create_indexed_collection() -> TroveResult<Collection> {
    Collection::create(BENCH_INDEXES.iter().map(|field| (*field, true)))
}

pub fn create_plain_collection() -> Collection {
    Collection::default()
}
