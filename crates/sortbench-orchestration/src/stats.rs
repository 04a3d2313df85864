//! Grouped timing statistics.
//!
//! Records are grouped three ways (source file, ordering category, item
//! count). Each group gets the mean Shell-sort time, the heap-sort time, their
//! ratio, and the fastest and slowest runs. Anything that cannot be computed
//! for a group becomes [`Figure::NotApplicable`] instead of an error.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use sortbench_core::sorter::SortFamily;

use crate::recorder::RunRecord;

/// Error raised when an aggregate has no defined value for a group.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("undefined statistic: {0}")]
    UndefinedStatistic(String),
}

/// A computed figure, or the "not applicable" sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Figure {
    Value(f64),
    NotApplicable,
}

impl Figure {
    /// Collapse a statistic result, logging why it is undefined.
    #[must_use]
    pub fn from_stat(result: Result<f64, StatsError>) -> Self {
        match result {
            Ok(v) => Self::Value(v),
            Err(e) => {
                tracing::debug!(error = %e, "statistic not applicable");
                Self::NotApplicable
            }
        }
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotApplicable => None,
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => fmt::Display::fmt(v, f),
            Self::NotApplicable => f.pad("n/a"),
        }
    }
}

impl Serialize for Figure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::NotApplicable => serializer.serialize_none(),
        }
    }
}

/// A run at the fastest or slowest time of its group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtremeRun {
    pub file: String,
    pub variant: String,
    pub elapsed_s: f64,
}

/// Statistics for one group of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats<K> {
    /// Group key: file name, category label or item count.
    pub key: K,
    /// Number of records in the group.
    pub runs: usize,
    /// Mean time over the Shell-sort variants.
    pub mean_shell_s: Figure,
    /// Heap-sort time (mean when the group holds several heap runs).
    pub heap_s: Figure,
    /// `heap_s / mean_shell_s`.
    pub heap_to_shell_ratio: Figure,
    /// Every run tied for the minimum time.
    pub fastest: Vec<ExtremeRun>,
    /// Every run tied for the maximum time.
    pub slowest: Vec<ExtremeRun>,
}

/// The three groupings over a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchStatistics {
    pub per_file: Vec<GroupStats<String>>,
    pub per_category: Vec<GroupStats<String>>,
    pub per_size: Vec<GroupStats<usize>>,
}

/// Computes grouped statistics over a set of run records.
pub struct StatsAggregator<'a> {
    records: &'a [RunRecord],
}

impl<'a> StatsAggregator<'a> {
    #[must_use]
    pub fn new(records: &'a [RunRecord]) -> Self {
        Self { records }
    }

    /// One group per file, in order of first appearance.
    #[must_use]
    pub fn per_file(&self) -> Vec<GroupStats<String>> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(String, Vec<&RunRecord>)> = Vec::new();
        for record in self.records {
            let slot = *index.entry(record.file.as_str()).or_insert_with(|| {
                groups.push((record.file.clone(), Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(record);
        }
        groups
            .into_iter()
            .map(|(file, rows)| summarize(file, &rows))
            .collect()
    }

    /// One group per ordering-category label, sorted by label.
    #[must_use]
    pub fn per_category(&self) -> Vec<GroupStats<String>> {
        group_sorted(self.records, |r| r.category.label().to_lowercase())
            .into_iter()
            .map(|(label, rows)| summarize(label, &rows))
            .collect()
    }

    /// One group per item count, ascending.
    #[must_use]
    pub fn per_size(&self) -> Vec<GroupStats<usize>> {
        group_sorted(self.records, |r| r.n)
            .into_iter()
            .map(|(n, rows)| summarize(n, &rows))
            .collect()
    }

    /// All three groupings.
    #[must_use]
    pub fn compute(&self) -> BatchStatistics {
        BatchStatistics {
            per_file: self.per_file(),
            per_category: self.per_category(),
            per_size: self.per_size(),
        }
    }
}

fn group_sorted<K: Ord>(
    records: &[RunRecord],
    key_of: impl Fn(&RunRecord) -> K,
) -> BTreeMap<K, Vec<&RunRecord>> {
    let mut groups: BTreeMap<K, Vec<&RunRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(key_of(record)).or_default().push(record);
    }
    groups
}

fn summarize<K>(key: K, rows: &[&RunRecord]) -> GroupStats<K> {
    let times_of = |family: SortFamily| -> Vec<f64> {
        rows.iter()
            .filter(|r| r.family == family)
            .map(|r| r.elapsed_secs())
            .collect()
    };

    let mean_shell_s = Figure::from_stat(mean(&times_of(SortFamily::Shell), "shell-sort"));
    let heap_s = Figure::from_stat(mean(&times_of(SortFamily::Heap), "heap-sort"));
    let heap_to_shell_ratio = Figure::from_stat(ratio(heap_s, mean_shell_s));

    GroupStats {
        key,
        runs: rows.len(),
        mean_shell_s,
        heap_s,
        heap_to_shell_ratio,
        fastest: extremes(rows, std::cmp::min),
        slowest: extremes(rows, std::cmp::max),
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64], what: &str) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::UndefinedStatistic(format!("no {what} runs")));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

fn ratio(numerator: Figure, denominator: Figure) -> Result<f64, StatsError> {
    match (numerator, denominator) {
        (Figure::Value(num), Figure::Value(den)) if den > 0.0 => Ok(num / den),
        (Figure::Value(_), Figure::Value(_)) => Err(StatsError::UndefinedStatistic(
            "ratio denominator is zero".into(),
        )),
        _ => Err(StatsError::UndefinedStatistic(
            "ratio operand missing".into(),
        )),
    }
}

fn extremes(rows: &[&RunRecord], pick: fn(Duration, Duration) -> Duration) -> Vec<ExtremeRun> {
    let Some(target) = rows.iter().map(|r| r.elapsed).reduce(pick) else {
        return Vec::new();
    };
    rows.iter()
        .filter(|r| r.elapsed == target)
        .map(|r| ExtremeRun {
            file: r.file.clone(),
            variant: r.variant.clone(),
            elapsed_s: r.elapsed_secs(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::dataset::OrderCategory;

    fn record(file: &str, variant: &str, secs: f64, n: usize) -> RunRecord {
        let family = if variant == "heap" {
            SortFamily::Heap
        } else {
            SortFamily::Shell
        };
        RunRecord {
            file: file.into(),
            variant: variant.into(),
            family,
            elapsed: Duration::from_secs_f64(secs),
            n,
            category: OrderCategory::from_file_name(file),
        }
    }

    fn approx(figure: Figure, expected: f64) -> bool {
        figure.value().is_some_and(|v| (v - expected).abs() < 1e-9)
    }

    #[test]
    fn per_file_mean_ratio_and_fastest() {
        let records = vec![
            record("ran_4.txt", "shell_knuth", 0.1, 4),
            record("ran_4.txt", "shell_sedgewick", 0.3, 4),
            record("ran_4.txt", "heap", 0.05, 4),
        ];
        let stats = StatsAggregator::new(&records).per_file();
        assert_eq!(stats.len(), 1);
        let s = &stats[0];
        assert_eq!(s.key, "ran_4.txt");
        assert!(approx(s.mean_shell_s, 0.2));
        assert!(approx(s.heap_s, 0.05));
        assert!(approx(s.heap_to_shell_ratio, 0.25));
        assert_eq!(s.fastest.len(), 1);
        assert_eq!(s.fastest[0].variant, "heap");
        assert_eq!(s.slowest[0].variant, "shell_sedgewick");
    }

    #[test]
    fn single_record_group_is_not_applicable() {
        let records = vec![record("asc_3.txt", "heap", 0.01, 3)];
        let s = &StatsAggregator::new(&records).per_file()[0];
        assert_eq!(s.mean_shell_s, Figure::NotApplicable);
        assert_eq!(s.heap_to_shell_ratio, Figure::NotApplicable);
        assert_eq!(s.fastest, s.slowest);
    }

    #[test]
    fn zero_denominator_is_not_applicable() {
        let records = vec![
            record("asc_3.txt", "shell_knuth", 0.0, 3),
            record("asc_3.txt", "heap", 0.01, 3),
        ];
        let s = &StatsAggregator::new(&records).per_file()[0];
        assert!(approx(s.mean_shell_s, 0.0));
        assert_eq!(s.heap_to_shell_ratio, Figure::NotApplicable);
    }

    #[test]
    fn ties_keep_every_row() {
        let records = vec![
            record("dup_5.txt", "shell_knuth", 0.2, 5),
            record("dup_5.txt", "shell_third", 0.2, 5),
            record("dup_5.txt", "heap", 0.4, 5),
        ];
        let s = &StatsAggregator::new(&records).per_file()[0];
        let fastest: Vec<&str> = s.fastest.iter().map(|r| r.variant.as_str()).collect();
        assert_eq!(fastest, vec!["shell_knuth", "shell_third"]);
        assert_eq!(s.slowest.len(), 1);
    }

    #[test]
    fn per_file_keeps_first_appearance_order() {
        let records = vec![
            record("rev_2.txt", "heap", 0.1, 2),
            record("asc_2.txt", "heap", 0.1, 2),
            record("rev_2.txt", "shell_knuth", 0.1, 2),
        ];
        let keys: Vec<String> = StatsAggregator::new(&records)
            .per_file()
            .into_iter()
            .map(|s| s.key)
            .collect();
        assert_eq!(keys, vec!["rev_2.txt", "asc_2.txt"]);
    }

    #[test]
    fn per_file_groups_interleaved_records() {
        let mut records = Vec::new();
        for round in 0..3 {
            for file in ["c_1.txt", "a_1.txt", "b_1.txt"] {
                let variant = if round == 2 { "heap" } else { "shell_knuth" };
                records.push(record(file, variant, 0.1, 1));
            }
        }
        let stats = StatsAggregator::new(&records).per_file();
        let keys: Vec<&str> = stats.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["c_1.txt", "a_1.txt", "b_1.txt"]);
        assert!(stats.iter().all(|s| s.runs == 3));
        assert!(stats.iter().all(|s| approx(s.heap_to_shell_ratio, 1.0)));
    }

    #[test]
    fn per_category_averages_across_files() {
        let records = vec![
            record("random_25.txt", "shell_knuth", 0.2, 25),
            record("random_25.txt", "heap", 0.1, 25),
            record("random_50.txt", "shell_knuth", 0.4, 50),
            record("random_50.txt", "heap", 0.3, 50),
            record("ascending_25.txt", "heap", 0.1, 25),
        ];
        let stats = StatsAggregator::new(&records).per_category();
        let keys: Vec<&str> = stats.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["asc", "ran"]);

        let ran = &stats[1];
        assert_eq!(ran.runs, 4);
        assert!(approx(ran.mean_shell_s, 0.3));
        assert!(approx(ran.heap_s, 0.2));
        assert!(approx(ran.heap_to_shell_ratio, 0.2 / 0.3));
        assert_eq!(ran.slowest[0].file, "random_50.txt");
    }

    #[test]
    fn per_size_sorted_ascending() {
        let records = vec![
            record("random_500.txt", "heap", 0.5, 500),
            record("random_25.txt", "heap", 0.1, 25),
            record("reverse_25.txt", "heap", 0.3, 25),
        ];
        let stats = StatsAggregator::new(&records).per_size();
        assert_eq!(stats.iter().map(|s| s.key).collect::<Vec<_>>(), vec![25, 500]);
        assert!(approx(stats[0].heap_s, 0.2));
        assert_eq!(stats[0].fastest[0].file, "random_25.txt");
    }

    #[test]
    fn empty_records_give_empty_groupings() {
        let stats = StatsAggregator::new(&[]).compute();
        assert_eq!(stats, BatchStatistics::default());
    }

    #[test]
    fn figure_display_and_serialization() {
        assert_eq!(format!("{:.3}", Figure::Value(0.25)), "0.250");
        assert_eq!(format!("{:>5}", Figure::NotApplicable), "  n/a");
        assert_eq!(serde_json::to_value(Figure::NotApplicable).unwrap(), serde_json::Value::Null);
        assert_eq!(serde_json::to_value(Figure::Value(1.5)).unwrap(), 1.5);
    }
}
