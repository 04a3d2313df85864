//! Sort-variant selection logic.

use std::sync::Arc;

use sortbench_core::constants::SHELL_LABEL_PREFIX;
use sortbench_core::registry::SorterFactory;
use sortbench_core::sorter::{SortError, Sorter};

/// Resolve `--algo` into the sorters to run, in registry order.
///
/// `all` selects every variant, `shell` every gap-sequence variant, and
/// anything else is a comma-separated list of variant labels.
pub fn get_sorters_to_run(
    algo: &str,
    factory: &dyn SorterFactory,
) -> Result<Vec<Arc<dyn Sorter>>, SortError> {
    let names: Vec<String> = match algo.trim() {
        "all" => factory.available().into_iter().map(String::from).collect(),
        "shell" => factory
            .available()
            .into_iter()
            .filter(|name| name.starts_with(SHELL_LABEL_PREFIX))
            .map(String::from)
            .collect(),
        list => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    };

    if names.is_empty() {
        return Err(SortError::Config(format!("no sort variants selected by {algo:?}")));
    }

    names.iter().map(|name| factory.get(name)).collect()
}
