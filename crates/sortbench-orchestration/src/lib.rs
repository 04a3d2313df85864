//! # sortbench-orchestration
//!
//! Timed batch execution, run recording, variant selection and statistics.

pub mod interfaces;
pub mod orchestrator;
pub mod recorder;
pub mod stats;
pub mod timer;
pub mod variant_selection;

pub use interfaces::{NullReportSink, ReportSink, RunReport};
pub use orchestrator::{run_batch, summarize_batch, BatchOutcome};
pub use recorder::{RunRecord, RunRecorder};
pub use stats::{BatchStatistics, Figure, StatsAggregator};
