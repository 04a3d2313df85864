//! JSON export of records and statistics.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use sortbench_core::sorter::SortError;
use sortbench_orchestration::recorder::RunRecord;
use sortbench_orchestration::stats::BatchStatistics;

#[derive(Serialize)]
struct BatchExport<'a> {
    records: &'a [RunRecord],
    statistics: &'a BatchStatistics,
}

/// Render records and statistics as pretty-printed JSON.
///
/// # Errors
///
/// Returns an I/O error if serialization fails.
pub fn to_json(records: &[RunRecord], statistics: &BatchStatistics) -> io::Result<String> {
    serde_json::to_string_pretty(&BatchExport {
        records,
        statistics,
    })
    .map_err(io::Error::other)
}

/// Write the JSON export to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_json(
    path: &Path,
    records: &[RunRecord],
    statistics: &BatchStatistics,
) -> Result<(), SortError> {
    let content = to_json(records, statistics)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "json export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::dataset::OrderCategory;
    use sortbench_core::sorter::SortFamily;
    use sortbench_orchestration::stats::StatsAggregator;
    use std::time::Duration;

    fn records() -> Vec<RunRecord> {
        vec![RunRecord {
            file: "reverse_4.txt".into(),
            variant: "heap".into(),
            family: SortFamily::Heap,
            elapsed: Duration::from_millis(2),
            n: 4,
            category: OrderCategory::Reverse,
        }]
    }

    #[test]
    fn export_shape() {
        let records = records();
        let stats = StatsAggregator::new(&records).compute();
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&records, &stats).unwrap()).unwrap();

        assert_eq!(json["records"][0]["variant"], "heap");
        assert_eq!(json["records"][0]["family"], "heap");
        assert_eq!(json["records"][0]["category"], "rev");
        assert_eq!(json["records"][0]["elapsed_s"], 0.002);
        assert_eq!(json["statistics"]["per_file"][0]["key"], "reverse_4.txt");
        assert!(json["statistics"]["per_file"][0]["mean_shell_s"].is_null());
        assert_eq!(json["statistics"]["per_size"][0]["key"], 4);
    }

    #[test]
    fn write_json_creates_parents() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("runs.json");
        let records = records();
        write_json(&path, &records, &BatchStatistics::default()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"records\""));
    }
}
