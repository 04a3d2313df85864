//! Golden file integration tests.
//!
//! Reads tests/testdata/sorting_golden.json and verifies every registered
//! variant, and both engines called directly, produce the expected order.
//! One grouped-statistics case is checked against hand-computed figures.

use std::time::Duration;

use serde::Deserialize;

use sortbench_core::dataset::OrderCategory;
use sortbench_core::gap_sort::gap_sort;
use sortbench_core::gaps::builtin_schedules;
use sortbench_core::heap_sort::heap_sort;
use sortbench_core::registry::{DefaultFactory, SorterFactory};
use sortbench_core::sorter::SortFamily;
use sortbench_orchestration::recorder::RunRecorder;
use sortbench_orchestration::stats::StatsAggregator;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
    statistics: GoldenStats,
}

#[derive(Deserialize)]
struct GoldenCase {
    name: String,
    input: Vec<f64>,
    sorted: Vec<f64>,
}

#[derive(Deserialize)]
struct GoldenStats {
    records: Vec<GoldenRecord>,
    expected: ExpectedGroup,
}

#[derive(Deserialize)]
struct GoldenRecord {
    file: String,
    variant: String,
    elapsed_s: f64,
}

#[derive(Deserialize)]
struct ExpectedGroup {
    mean_shell_s: f64,
    heap_s: f64,
    heap_to_shell_ratio: f64,
    fastest: Vec<String>,
    slowest: Vec<String>,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/sorting_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn approx(actual: Option<f64>, expected: f64) -> bool {
    actual.is_some_and(|v| (v - expected).abs() < 1e-12)
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[test]
fn golden_every_registered_variant() {
    let golden = load_golden_data();
    let factory = DefaultFactory::new();
    for case in &golden.cases {
        for label in factory.available() {
            let sorter = factory.get(label).unwrap();
            let mut data = case.input.clone();
            sorter.sort(&mut data).unwrap();
            assert_eq!(data, case.sorted, "{label} on {}", case.name);
        }
    }
}

#[test]
fn golden_gap_sort_each_builtin_schedule() {
    let golden = load_golden_data();
    for schedule in builtin_schedules() {
        for case in &golden.cases {
            let mut data = case.input.clone();
            gap_sort(&mut data, schedule.gaps()).unwrap();
            assert_eq!(data, case.sorted, "{} on {}", schedule.name(), case.name);
        }
    }
}

#[test]
fn golden_heap_sort() {
    let golden = load_golden_data();
    for case in &golden.cases {
        let mut data = case.input.clone();
        heap_sort(&mut data);
        assert_eq!(data, case.sorted, "heap on {}", case.name);
    }
}

#[test]
fn golden_cases_are_consistent() {
    let golden = load_golden_data();
    assert!(!golden.cases.is_empty());
    for case in &golden.cases {
        assert_eq!(case.input.len(), case.sorted.len(), "{}", case.name);
        assert!(
            case.sorted.windows(2).all(|w| w[0] <= w[1]),
            "{} expected output is not ascending",
            case.name
        );
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[test]
fn golden_group_statistics() {
    let golden = load_golden_data();
    let mut recorder = RunRecorder::new();
    for r in &golden.statistics.records {
        let family = if r.variant == "heap" {
            SortFamily::Heap
        } else {
            SortFamily::Shell
        };
        recorder.record(
            r.file.as_str(),
            r.variant.as_str(),
            family,
            Duration::from_secs_f64(r.elapsed_s),
            4,
            OrderCategory::from_file_name(&r.file),
        );
    }

    let stats = StatsAggregator::new(recorder.all()).compute();
    let expected = &golden.statistics.expected;
    // one file, one category, one size: all three groupings agree
    assert_eq!(stats.per_file.len(), 1);
    assert_eq!(stats.per_category.len(), 1);
    assert_eq!(stats.per_size.len(), 1);

    let group = &stats.per_file[0];
    assert!(approx(group.mean_shell_s.value(), expected.mean_shell_s));
    assert!(approx(group.heap_s.value(), expected.heap_s));
    assert!(approx(
        group.heap_to_shell_ratio.value(),
        expected.heap_to_shell_ratio
    ));
    let fastest: Vec<&str> = group.fastest.iter().map(|r| r.variant.as_str()).collect();
    let slowest: Vec<&str> = group.slowest.iter().map(|r| r.variant.as_str()).collect();
    assert_eq!(fastest, expected.fastest);
    assert_eq!(slowest, expected.slowest);

    assert_eq!(stats.per_category[0].mean_shell_s, group.mean_shell_s);
    assert_eq!(stats.per_size[0].heap_to_shell_ratio, group.heap_to_shell_ratio);
}
