//! The `Sorter` trait and its two implementations.
//!
//! `Sorter` is the public trait consumed by orchestration. `ShellSorter`
//! binds one named gap schedule to the gap-sort engine; `HeapSorter` wraps
//! the heap-sort engine.

use std::fmt;

use serde::Serialize;

use crate::constants::{HEAP_LABEL, SHELL_LABEL_PREFIX};
use crate::gap_sort::gap_sort;
use crate::gaps::GapSequence;
use crate::heap_sort::heap_sort;

/// Error type for loading and sorting datasets.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// A gap schedule is empty or contains a non-positive gap.
    #[error("invalid gap sequence: {0}")]
    InvalidGapSequence(String),

    /// A dataset file could not be parsed.
    #[error("malformed input in {source_name}: {reason}")]
    MalformedInput { source_name: String, reason: String },

    /// Sorted outputs of two variants disagree for the same dataset.
    #[error("sorted output of {variant} differs from {reference} for {source_name}")]
    Mismatch {
        source_name: String,
        reference: String,
        variant: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Algorithm family, used to split gap-sort rows from heap-sort rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortFamily {
    Shell,
    Heap,
}

impl fmt::Display for SortFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Shell => "shell",
            Self::Heap => "heap",
        })
    }
}

/// Public trait for sort variants, consumed by orchestration.
pub trait Sorter: Send + Sync {
    /// Sort `data` ascending in place.
    fn sort(&self, data: &mut [f64]) -> Result<(), SortError>;

    /// Variant label recorded with each run, e.g. `shell_knuth`.
    fn label(&self) -> &str;

    /// Algorithm family of this variant.
    fn family(&self) -> SortFamily;

    /// Gap schedule, for gap-sequence variants.
    fn gaps(&self) -> Option<&GapSequence> {
        None
    }
}

/// Gap-sequence insertion sort bound to one schedule.
pub struct ShellSorter {
    schedule: GapSequence,
    label: String,
}

impl ShellSorter {
    /// Create a sorter for `schedule`, labelled `shell_<name>`.
    #[must_use]
    pub fn new(schedule: GapSequence) -> Self {
        let label = format!("{SHELL_LABEL_PREFIX}{}", schedule.name());
        Self { schedule, label }
    }
}

impl Sorter for ShellSorter {
    fn sort(&self, data: &mut [f64]) -> Result<(), SortError> {
        gap_sort(data, self.schedule.gaps())?;
        Ok(())
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn family(&self) -> SortFamily {
        SortFamily::Shell
    }

    fn gaps(&self) -> Option<&GapSequence> {
        Some(&self.schedule)
    }
}

/// Binary max-heap sort.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapSorter;

impl HeapSorter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Sorter for HeapSorter {
    fn sort(&self, data: &mut [f64]) -> Result<(), SortError> {
        heap_sort(data);
        Ok(())
    }

    fn label(&self) -> &str {
        HEAP_LABEL
    }

    fn family(&self) -> SortFamily {
        SortFamily::Heap
    }
}
