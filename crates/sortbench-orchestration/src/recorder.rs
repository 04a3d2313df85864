//! Run records and their accumulator.

use std::time::Duration;

use serde::{Serialize, Serializer};

use sortbench_core::dataset::OrderCategory;
use sortbench_core::sorter::SortFamily;

/// One timed algorithm invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    /// Source file name.
    pub file: String,
    /// Variant label, e.g. `shell_knuth` or `heap`.
    pub variant: String,
    /// Algorithm family of the variant.
    pub family: SortFamily,
    /// Wall-clock time of the sort.
    #[serde(rename = "elapsed_s", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    /// Item count.
    pub n: usize,
    /// Initial ordering of the dataset.
    pub category: OrderCategory,
}

impl RunRecord {
    /// Elapsed time in seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

fn serialize_secs<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(d.as_secs_f64())
}

/// Append-only collection of run records, kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct RunRecorder {
    records: Vec<RunRecord>,
}

impl RunRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record. Repeated (file, variant) pairs are all kept.
    pub fn record(
        &mut self,
        file: impl Into<String>,
        variant: impl Into<String>,
        family: SortFamily,
        elapsed: Duration,
        n: usize,
        category: OrderCategory,
    ) {
        self.records.push(RunRecord {
            file: file.into(),
            variant: variant.into(),
            family,
            elapsed,
            n,
            category,
        });
    }

    /// Every record so far, oldest first.
    #[must_use]
    pub fn all(&self) -> &[RunRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
