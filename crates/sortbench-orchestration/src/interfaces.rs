//! Orchestration interfaces.

use std::io;
use std::path::Path;
use std::time::Duration;

use sortbench_core::dataset::Dataset;
use sortbench_core::gaps::GapSequence;
use sortbench_core::sorter::{SortError, SortFamily};

use crate::recorder::RunRecord;
use crate::stats::BatchStatistics;

/// Outcome of one successful timed sort, handed to the report sink.
#[derive(Debug, Clone, Copy)]
pub struct RunReport<'a> {
    /// Variant label.
    pub variant: &'a str,
    /// Algorithm family.
    pub family: SortFamily,
    /// Gap schedule, for Shell-sort variants.
    pub gaps: Option<&'a GapSequence>,
    /// The sorted output.
    pub sorted: &'a [f64],
    /// Time spent inside the sort.
    pub elapsed: Duration,
    /// Whether the output is fully non-decreasing.
    pub fully_sorted: bool,
}

/// Destination for everything the batch reports.
///
/// Called strictly outside timed regions. Write failures are fatal to the
/// batch.
pub trait ReportSink {
    /// A dataset loaded and is about to be sorted.
    fn dataset_started(&mut self, dataset: &Dataset) -> io::Result<()>;

    /// One variant finished sorting a dataset.
    fn run_finished(&mut self, dataset: &Dataset, run: &RunReport<'_>) -> io::Result<()>;

    /// One variant failed on a dataset; no record was taken.
    fn run_failed(&mut self, dataset: &Dataset, variant: &str, error: &SortError)
        -> io::Result<()>;

    /// A source could not be loaded and was skipped.
    fn dataset_skipped(&mut self, source: &Path, error: &SortError) -> io::Result<()>;

    /// The full record table, once every dataset has run.
    fn records(&mut self, records: &[RunRecord]) -> io::Result<()>;

    /// The grouped statistics.
    fn statistics(&mut self, stats: &BatchStatistics) -> io::Result<()>;

    /// Flush buffered output.
    fn finish(&mut self) -> io::Result<()>;
}

/// Sink that discards everything.
pub struct NullReportSink;

impl ReportSink for NullReportSink {
    fn dataset_started(&mut self, _dataset: &Dataset) -> io::Result<()> {
        Ok(())
    }
    fn run_finished(&mut self, _dataset: &Dataset, _run: &RunReport<'_>) -> io::Result<()> {
        Ok(())
    }
    fn run_failed(&mut self, _: &Dataset, _: &str, _: &SortError) -> io::Result<()> {
        Ok(())
    }
    fn dataset_skipped(&mut self, _source: &Path, _error: &SortError) -> io::Result<()> {
        Ok(())
    }
    fn records(&mut self, _records: &[RunRecord]) -> io::Result<()> {
        Ok(())
    }
    fn statistics(&mut self, _stats: &BatchStatistics) -> io::Result<()> {
        Ok(())
    }
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
