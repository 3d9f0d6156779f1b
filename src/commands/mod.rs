//! Command implementations

pub mod benchmark;
pub mod compare;
pub mod find;
pub mod neighbors;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use compare::{CompareResult, CompareRow, run_compare};
pub use find::{FindConfig, FindResult, LongestResult, run_find, run_longest};
pub use neighbors::{NeighborsResult, run_neighbors};
