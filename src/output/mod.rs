//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_compare_result, print_find_result, print_longest_result,
    print_neighbors_result,
};
