//! Input discovery and synthetic dataset generation.

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use sortbench_core::sorter::SortError;

/// Regular files directly inside `dir`, sorted case-insensitively by path.
///
/// # Errors
///
/// Returns an I/O error when the directory cannot be read.
pub fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>, SortError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by_cached_key(|p| p.to_string_lossy().to_lowercase());
    Ok(files)
}

/// Write shuffled, descending and ascending datasets of 1..=n for each size.
///
/// Files are named `random_<n>_generated.txt`, `reverse_<n>_generated.txt`
/// and `ascending_<n>_generated.txt`. A seed makes the shuffle reproducible.
///
/// # Errors
///
/// Returns an error if a size is zero or a file cannot be written.
pub fn generate_input_files(
    dir: &Path,
    sizes: &[usize],
    seed: Option<u64>,
) -> Result<Vec<PathBuf>, SortError> {
    if let Some(pos) = sizes.iter().position(|&n| n == 0) {
        return Err(SortError::Config(format!(
            "dataset size at position {pos} is zero"
        )));
    }
    fs::create_dir_all(dir)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut written = Vec::with_capacity(sizes.len() * 3);
    for &n in sizes {
        let ascending: Vec<usize> = (1..=n).collect();
        let reverse: Vec<usize> = ascending.iter().rev().copied().collect();
        let mut random = ascending.clone();
        random.shuffle(&mut rng);

        for (prefix, values) in [
            ("random", &random),
            ("reverse", &reverse),
            ("ascending", &ascending),
        ] {
            let path = dir.join(format!("{prefix}_{n}_generated.txt"));
            fs::write(&path, join_values(values))?;
            tracing::debug!(path = %path.display(), n, "generated dataset");
            written.push(path);
        }
    }
    tracing::info!(files = written.len(), dir = %dir.display(), "generated datasets");
    Ok(written)
}

fn join_values(values: &[usize]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
