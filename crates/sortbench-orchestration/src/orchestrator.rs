//! Core orchestration: the sequential batch loop and its summary.
//!
//! Datasets run one after another and variants within a dataset run one
//! after another, so timed regions never overlap. Loading, copying, checking
//! and reporting all happen outside the timed call.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use sortbench_core::common::{first_inversion, is_sorted_non_decreasing};
use sortbench_core::dataset::{load_dataset, Dataset};
use sortbench_core::sorter::{SortError, Sorter};

use crate::interfaces::{ReportSink, RunReport};
use crate::recorder::RunRecorder;
use crate::stats::{BatchStatistics, StatsAggregator};
use crate::timer::measure;

/// A source that could not be loaded.
#[derive(Debug, Clone)]
pub struct SkippedInput {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything a batch produced besides the report itself.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// One record per successful (dataset, variant) run.
    pub recorder: RunRecorder,
    /// Datasets that loaded and were sorted.
    pub datasets: usize,
    /// Sources skipped because they failed to load.
    pub skipped: Vec<SkippedInput>,
    /// Runs that returned an error.
    pub failed_runs: usize,
    /// Runs whose output was not fully sorted.
    pub partial_runs: usize,
    /// Fully sorted outputs that disagreed with the first variant's output.
    pub mismatches: usize,
}

/// Sort one copy of `values` with `sorter`, timing only the sort itself.
///
/// # Errors
///
/// Propagates the sorter's error; no timing is returned for a failed run.
pub fn execute_sort(
    sorter: &dyn Sorter,
    values: &[f64],
) -> Result<(Vec<f64>, Duration), SortError> {
    let mut working = values.to_vec();
    measure(move || {
        sorter.sort(&mut working)?;
        Ok(working)
    })
}

/// Load every input and run every sorter over it.
///
/// Sources that fail to load are skipped and runs that fail are left out of
/// the records; both are logged and reported, and the batch carries on.
/// Ends by handing the record table to the sink.
///
/// # Errors
///
/// Only sink write failures abort the batch.
pub fn run_batch(
    inputs: &[PathBuf],
    sorters: &[Arc<dyn Sorter>],
    sink: &mut dyn ReportSink,
) -> Result<BatchOutcome, SortError> {
    let mut outcome = BatchOutcome::default();

    for path in inputs {
        let dataset = match load_dataset(path) {
            Ok(dataset) => dataset,
            Err(e) => {
                skip_input(path, e, sink, &mut outcome)?;
                continue;
            }
        };
        run_dataset(&dataset, sorters, sink, &mut outcome)?;
    }

    info!(
        datasets = outcome.datasets,
        skipped = outcome.skipped.len(),
        runs = outcome.recorder.len(),
        failed = outcome.failed_runs,
        "batch complete"
    );
    sink.records(outcome.recorder.all())?;
    Ok(outcome)
}

/// Compute grouped statistics over `outcome`'s records and report them.
///
/// # Errors
///
/// Only sink write failures are returned; undefined figures are reported as
/// not applicable.
pub fn summarize_batch(
    outcome: &BatchOutcome,
    sink: &mut dyn ReportSink,
) -> Result<BatchStatistics, SortError> {
    let stats = StatsAggregator::new(outcome.recorder.all()).compute();
    sink.statistics(&stats)?;
    Ok(stats)
}

fn skip_input(
    path: &Path,
    error: SortError,
    sink: &mut dyn ReportSink,
    outcome: &mut BatchOutcome,
) -> Result<(), SortError> {
    warn!(path = %path.display(), error = %error, "skipping dataset");
    sink.dataset_skipped(path, &error)?;
    outcome.skipped.push(SkippedInput {
        path: path.to_path_buf(),
        reason: error.to_string(),
    });
    Ok(())
}

fn run_dataset(
    dataset: &Dataset,
    sorters: &[Arc<dyn Sorter>],
    sink: &mut dyn ReportSink,
    outcome: &mut BatchOutcome,
) -> Result<(), SortError> {
    info!(
        file = dataset.name(),
        n = dataset.len(),
        category = %dataset.category(),
        "sorting dataset"
    );
    sink.dataset_started(dataset)?;
    outcome.datasets += 1;

    let mut reference: Option<(&str, Vec<f64>)> = None;

    for sorter in sorters {
        let (sorted, elapsed) = match execute_sort(sorter.as_ref(), dataset.values()) {
            Ok(result) => result,
            Err(e) => {
                warn!(file = dataset.name(), variant = sorter.label(), error = %e, "sort failed");
                sink.run_failed(dataset, sorter.label(), &e)?;
                outcome.failed_runs += 1;
                continue;
            }
        };

        let fully_sorted = is_sorted_non_decreasing(&sorted);
        if fully_sorted {
            if let Some((reference_label, expected)) = &reference {
                if *expected != sorted {
                    let err = SortError::Mismatch {
                        source_name: dataset.name().to_string(),
                        reference: (*reference_label).to_string(),
                        variant: sorter.label().to_string(),
                    };
                    warn!(error = %err, "cross-check failed");
                    outcome.mismatches += 1;
                }
            } else {
                reference = Some((sorter.label(), sorted.clone()));
            }
        } else {
            warn!(
                file = dataset.name(),
                variant = sorter.label(),
                first_inversion = first_inversion(&sorted),
                "output only partially sorted; gap schedule should end in 1"
            );
            outcome.partial_runs += 1;
        }

        debug!(
            file = dataset.name(),
            variant = sorter.label(),
            elapsed_s = elapsed.as_secs_f64(),
            "run finished"
        );
        outcome.recorder.record(
            dataset.name(),
            sorter.label(),
            sorter.family(),
            elapsed,
            dataset.len(),
            dataset.category().clone(),
        );
        sink.run_finished(
            dataset,
            &RunReport {
                variant: sorter.label(),
                family: sorter.family(),
                gaps: sorter.gaps(),
                sorted: &sorted,
                elapsed,
                fully_sorted,
            },
        )?;
    }

    Ok(())
}
