//! Console summary printed after a batch.

use std::path::Path;

use sortbench_orchestration::orchestrator::BatchOutcome;
use sortbench_orchestration::stats::BatchStatistics;

use crate::output::{format_duration, format_number};

/// Prints a short batch summary to stdout; the full report goes to file.
pub struct ConsolePresenter {
    quiet: bool,
}

impl ConsolePresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// The summary text, or `None` in quiet mode.
    #[must_use]
    pub fn render_summary(
        &self,
        outcome: &BatchOutcome,
        stats: &BatchStatistics,
        report_path: &Path,
    ) -> Option<String> {
        if self.quiet {
            return None;
        }

        let mut lines = vec![format!(
            "Sorted {} dataset(s), {} run(s) recorded, {} skipped.",
            format_number(outcome.datasets),
            format_number(outcome.recorder.len()),
            outcome.skipped.len()
        )];
        if outcome.failed_runs > 0 {
            lines.push(format!("Failed runs: {}", outcome.failed_runs));
        }
        if outcome.partial_runs > 0 {
            lines.push(format!("Partially sorted runs: {}", outcome.partial_runs));
        }
        if outcome.mismatches > 0 {
            lines.push(format!("Cross-check mismatches: {}", outcome.mismatches));
        }

        if !stats.per_size.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "  {:>8} {:>14} {:>14} {:>10}",
                "n", "mean shell", "heap", "heap/shell"
            ));
            lines.push(format!("  {:-<49}", ""));
            for group in &stats.per_size {
                let shell = group
                    .mean_shell_s
                    .value()
                    .map_or_else(|| "n/a".to_string(), secs_to_human);
                let heap = group
                    .heap_s
                    .value()
                    .map_or_else(|| "n/a".to_string(), secs_to_human);
                lines.push(format!(
                    "  {:>8} {:>14} {:>14} {:>10.3}",
                    format_number(group.key),
                    shell,
                    heap,
                    group.heap_to_shell_ratio
                ));
            }
        }

        lines.push(String::new());
        lines.push(format!("Report written to {}", report_path.display()));
        Some(lines.join("\n"))
    }

    pub fn present_summary(
        &self,
        outcome: &BatchOutcome,
        stats: &BatchStatistics,
        report_path: &Path,
    ) {
        if let Some(text) = self.render_summary(outcome, stats, report_path) {
            println!("{text}");
        }
    }

    pub fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}

fn secs_to_human(secs: f64) -> String {
    format_duration(std::time::Duration::from_secs_f64(secs.max(0.0)))
}
