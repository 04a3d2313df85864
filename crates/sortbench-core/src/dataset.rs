//! Datasets and their ordering categories.

use std::fmt;
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::constants::CATEGORY_PREFIX_LEN;
use crate::sorter::SortError;

/// Initial arrangement of a dataset, encoded in its file-name prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderCategory {
    /// `asc…`
    Ascending,
    /// `rev…`
    Reverse,
    /// `ran…`
    Random,
    /// `dup…`
    Duplicates,
    /// Any other prefix, kept lowercased.
    Other(String),
}

impl OrderCategory {
    /// Classify a file name by its first three characters, ignoring case.
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        let prefix: String = name
            .chars()
            .take(CATEGORY_PREFIX_LEN)
            .flat_map(char::to_lowercase)
            .collect();
        match prefix.as_str() {
            "asc" => Self::Ascending,
            "rev" => Self::Reverse,
            "ran" => Self::Random,
            "dup" => Self::Duplicates,
            _ => Self::Other(prefix),
        }
    }

    /// Short grouping label (the file-name prefix).
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Ascending => "asc",
            Self::Reverse => "rev",
            Self::Random => "ran",
            Self::Duplicates => "dup",
            Self::Other(prefix) => prefix,
        }
    }
}

impl fmt::Display for OrderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl Serialize for OrderCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A loaded numeric dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    category: OrderCategory,
    values: Vec<f64>,
}

impl Dataset {
    /// Parse whitespace-separated numbers.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::MalformedInput`] if the text holds no tokens, a token
    /// that is not a number, or a non-finite value.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, SortError> {
        let name = name.into();
        let mut values = Vec::new();
        for (idx, token) in text.split_whitespace().enumerate() {
            let value: f64 = token.parse().map_err(|_| SortError::MalformedInput {
                source_name: name.clone(),
                reason: format!("token {idx} ({token:?}) is not a number"),
            })?;
            if !value.is_finite() {
                return Err(SortError::MalformedInput {
                    source_name: name,
                    reason: format!("token {idx} ({token:?}) is not finite"),
                });
            }
            values.push(value);
        }
        if values.is_empty() {
            return Err(SortError::MalformedInput {
                source_name: name,
                reason: "no numeric values".into(),
            });
        }
        Ok(Self::from_values(name, values))
    }

    /// Build a dataset from values already in memory.
    #[must_use]
    pub fn from_values(name: impl Into<String>, values: Vec<f64>) -> Self {
        let name = name.into();
        let category = OrderCategory::from_file_name(&name);
        Self {
            name,
            category,
            values,
        }
    }

    /// Source file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordering category derived from the name.
    #[must_use]
    pub fn category(&self) -> &OrderCategory {
        &self.category
    }

    /// The values in file order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Item count `n`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read and parse one dataset file. The dataset is named after the file name.
///
/// # Errors
///
/// Returns [`SortError::Io`] if the file cannot be read and
/// [`SortError::MalformedInput`] if its contents do not parse.
pub fn load_dataset(path: &Path) -> Result<Dataset, SortError> {
    let text = std::fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let dataset = Dataset::parse(name, &text)?;
    tracing::debug!(
        file = dataset.name(),
        n = dataset.len(),
        category = %dataset.category(),
        "loaded dataset"
    );
    Ok(dataset)
}
