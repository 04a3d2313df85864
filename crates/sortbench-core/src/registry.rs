//! Sorter factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::constants::{HEAP_LABEL, SHELL_LABEL_PREFIX};
use crate::gaps::{builtin_schedules, GapSequence};
use crate::sorter::{HeapSorter, ShellSorter, SortError, Sorter};

/// Factory trait for creating sorters.
pub trait SorterFactory: Send + Sync {
    /// Get or create a sorter by variant label.
    fn get(&self, name: &str) -> Result<Arc<dyn Sorter>, SortError>;

    /// All variant labels, gap-sequence variants first and heap sort last.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    schedules: Vec<GapSequence>,
    labels: Vec<String>,
    cache: RwLock<HashMap<String, Arc<dyn Sorter>>>,
}

impl DefaultFactory {
    /// Create a factory with the built-in schedules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_schedules(Vec::new())
    }

    /// Create a factory with the built-in schedules plus `extra`.
    ///
    /// An extra schedule whose name matches a built-in one replaces it in place.
    #[must_use]
    pub fn with_schedules(extra: Vec<GapSequence>) -> Self {
        let mut schedules = builtin_schedules();
        for schedule in extra {
            match schedules.iter_mut().find(|s| s.name() == schedule.name()) {
                Some(existing) => *existing = schedule,
                None => schedules.push(schedule),
            }
        }

        let labels = schedules
            .iter()
            .map(|s| format!("{SHELL_LABEL_PREFIX}{}", s.name()))
            .chain(std::iter::once(HEAP_LABEL.to_string()))
            .collect();

        Self {
            schedules,
            labels,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Registered gap schedules in evaluation order.
    #[must_use]
    pub fn schedules(&self) -> &[GapSequence] {
        &self.schedules
    }

    fn create_sorter(&self, name: &str) -> Result<Arc<dyn Sorter>, SortError> {
        if name == HEAP_LABEL {
            return Ok(Arc::new(HeapSorter::new()));
        }
        let schedule = name
            .strip_prefix(SHELL_LABEL_PREFIX)
            .and_then(|short| self.schedules.iter().find(|s| s.name() == short))
            .ok_or_else(|| SortError::Config(format!("unknown sort variant: {name}")))?;
        Ok(Arc::new(ShellSorter::new(schedule.clone())))
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SorterFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Sorter>, SortError> {
        // Check cache first
        if let Some(sorter) = self.cache.read().get(name) {
            return Ok(Arc::clone(sorter));
        }

        // Create and cache
        let sorter = self.create_sorter(name)?;
        tracing::debug!(variant = name, "created sorter");
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&sorter));
        Ok(sorter)
    }

    fn available(&self) -> Vec<&str> {
        self.labels.iter().map(String::as_str).collect()
    }
}
