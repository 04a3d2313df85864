//! Plain-text batch report.
//!
//! One banner per dataset, a heading whenever the algorithm family changes,
//! then per run the gap values, the sorted list, and the elapsed time. After
//! the last dataset come the record table and the three statistics blocks.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use sortbench_core::dataset::Dataset;
use sortbench_core::sorter::{SortError, SortFamily};
use sortbench_orchestration::interfaces::{ReportSink, RunReport};
use sortbench_orchestration::recorder::RunRecord;
use sortbench_orchestration::stats::{BatchStatistics, ExtremeRun, Figure, GroupStats};

use crate::output::{banner, format_seconds, format_values};

const WIDTH: usize = 80;
const RULE_WIDTH: usize = 72;
const VALUES_PER_LINE: usize = 20;

/// Report sink writing human-readable text to any writer.
pub struct TextReport<W: Write> {
    out: W,
    family: Option<SortFamily>,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out, family: None }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "\t{}", "-".repeat(RULE_WIDTH))
    }

    fn write_group<K: Display>(
        &mut self,
        group: &GroupStats<K>,
        heap_label: &str,
    ) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "\t{}", banner(&group.key.to_string(), RULE_WIDTH, '-'))?;
        writeln!(self.out, "\tRuns: {}", group.runs)?;
        writeln!(
            self.out,
            "\tAverage shell sort execution time: {}",
            seconds(group.mean_shell_s)
        )?;
        writeln!(self.out, "\t{heap_label}: {}", seconds(group.heap_s))?;
        match group.heap_to_shell_ratio {
            Figure::Value(r) => writeln!(
                self.out,
                "\tHeap sort takes {r:.4} times as long as shell sort."
            )?,
            Figure::NotApplicable => writeln!(self.out, "\tHeap to shell ratio: n/a")?,
        }
        self.write_extremes("Fastest", &group.fastest)?;
        self.write_extremes("Slowest", &group.slowest)
    }

    fn write_extremes(&mut self, what: &str, runs: &[ExtremeRun]) -> io::Result<()> {
        for run in runs {
            writeln!(
                self.out,
                "\t{what}: {} on {} in {:.9} seconds.",
                run.variant, run.file, run.elapsed_s
            )?;
        }
        Ok(())
    }

    fn write_block<K: Display>(
        &mut self,
        title: &str,
        groups: &[GroupStats<K>],
        heap_label: &str,
    ) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", banner(title, WIDTH, '='))?;
        if groups.is_empty() {
            writeln!(self.out, "\tno runs recorded")?;
        }
        for group in groups {
            self.write_group(group, heap_label)?;
        }
        Ok(())
    }
}

fn seconds(figure: Figure) -> String {
    match figure {
        Figure::Value(v) => format!("{v:.9} seconds."),
        Figure::NotApplicable => "n/a".to_string(),
    }
}

fn family_heading(family: SortFamily) -> &'static str {
    match family {
        SortFamily::Shell => "SHELL SORT",
        SortFamily::Heap => "HEAP SORT",
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn dataset_started(&mut self, dataset: &Dataset) -> io::Result<()> {
        self.family = None;
        let title = format!("NOW SORTING DATA IN {}", dataset.name());
        writeln!(self.out, "{}", "=".repeat(WIDTH))?;
        writeln!(self.out, "{}", banner(&title, WIDTH, '='))?;
        writeln!(self.out, "{}", "=".repeat(WIDTH))
    }

    fn run_finished(&mut self, dataset: &Dataset, run: &RunReport<'_>) -> io::Result<()> {
        if self.family != Some(run.family) {
            self.family = Some(run.family);
            writeln!(self.out)?;
            writeln!(self.out, "{}", family_heading(run.family))?;
        }
        self.rule()?;
        writeln!(self.out, "\tSorting data in {} with {}", dataset.name(), run.variant)?;
        if let Some(gaps) = run.gaps {
            writeln!(self.out, "\tGap Values: {gaps}")?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "\tSorted List:")?;
        writeln!(self.out, "{}", format_values(run.sorted, VALUES_PER_LINE))?;
        writeln!(self.out)?;
        if !run.fully_sorted {
            writeln!(
                self.out,
                "\tWARNING: output is only partially sorted; the gap values do not end in 1."
            )?;
        }
        writeln!(
            self.out,
            "\tElapsed Time for {}: {} seconds.",
            run.variant,
            format_seconds(run.elapsed)
        )?;
        self.rule()
    }

    fn run_failed(
        &mut self,
        dataset: &Dataset,
        variant: &str,
        error: &SortError,
    ) -> io::Result<()> {
        self.rule()?;
        writeln!(self.out, "\t{variant} FAILED on {}: {error}", dataset.name())?;
        self.rule()
    }

    fn dataset_skipped(&mut self, source: &Path, error: &SortError) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(WIDTH))?;
        writeln!(self.out, "SKIPPED {}: {error}", source.display())?;
        writeln!(self.out, "{}", "=".repeat(WIDTH))
    }

    fn records(&mut self, records: &[RunRecord]) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", banner("RUN RECORDS", WIDTH, '='))?;
        writeln!(
            self.out,
            "{:<28} {:<18} {:>14} {:>7}  type",
            "file", "variant", "elapsed_s", "n"
        )?;
        for r in records {
            writeln!(
                self.out,
                "{:<28} {:<18} {:>14} {:>7}  {}",
                r.file,
                r.variant,
                format_seconds(r.elapsed),
                r.n,
                r.category
            )?;
        }
        Ok(())
    }

    fn statistics(&mut self, stats: &BatchStatistics) -> io::Result<()> {
        self.write_block("STATISTICS PER FILE", &stats.per_file, "Heap sort execution time")?;
        self.write_block(
            "STATISTICS PER TYPE",
            &stats.per_category,
            "Average heap sort execution time",
        )?;
        self.write_block(
            "STATISTICS PER n",
            &stats.per_size,
            "Average heap sort execution time",
        )
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Open `path` as a text report for the duration of `f`.
///
/// Parent directories are created. The report is flushed whether `f`
/// succeeds or fails, so a failed batch still leaves what it wrote.
///
/// # Errors
///
/// Returns the error from `f` first, then any create or flush failure.
pub fn with_report_file<T>(
    path: &Path,
    f: impl FnOnce(&mut TextReport<BufWriter<File>>) -> Result<T, SortError>,
) -> Result<T, SortError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut report = TextReport::new(BufWriter::new(file));
    let result = f(&mut report);
    let flushed = report.finish();
    let value = result?;
    flushed?;
    tracing::debug!(path = %path.display(), "report written");
    Ok(value)
}
