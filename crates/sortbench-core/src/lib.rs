//! # sortbench-core
//!
//! Core library for the sortbench timing harness.
//! Implements gap-sequence insertion sort (Shell sort) and binary heap sort,
//! plus the dataset and gap-schedule types they operate on.

pub mod common;
pub mod constants;
pub mod dataset;
pub mod gap_sort;
pub mod gaps;
pub mod heap_sort;
pub mod registry;
pub mod sorter;

// Re-exports
pub use constants::{exit_codes, DEFAULT_SIZES, HEAP_LABEL, SHELL_LABEL_PREFIX};
pub use dataset::{load_dataset, Dataset, OrderCategory};
pub use gap_sort::gap_sort;
pub use gaps::GapSequence;
pub use heap_sort::heap_sort;
pub use registry::{DefaultFactory, SorterFactory};
pub use sorter::{HeapSorter, ShellSorter, SortError, SortFamily, Sorter};
