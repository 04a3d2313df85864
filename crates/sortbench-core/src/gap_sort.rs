//! Gap-sequence insertion sort (Shell sort).
//!
//! Each gap `g` runs one gapped insertion pass: every element from index `g`
//! onward is held aside and slid backward in steps of `g` past the elements
//! strictly greater than it. The passes run in the order the gaps are
//! supplied, so callers pass them largest first.
//!
//! The last gap must be 1. A schedule that stops early only leaves the data
//! `g`-sorted for its final `g`; that is a caller error and is not detected.

use crate::sorter::SortError;

/// Sort `data` in place with the given gap schedule and hand the slice back.
///
/// # Errors
///
/// Returns [`SortError::InvalidGapSequence`] when `gaps` is empty or contains
/// a zero. Validation happens before `data` is touched.
pub fn gap_sort<'a, T: PartialOrd + Copy>(
    data: &'a mut [T],
    gaps: &[usize],
) -> Result<&'a mut [T], SortError> {
    validate_gaps(gaps)?;
    for &gap in gaps {
        gapped_insertion_pass(data, gap);
    }
    Ok(data)
}

/// Check that a gap schedule is usable by [`gap_sort`].
///
/// # Errors
///
/// Returns [`SortError::InvalidGapSequence`] for an empty schedule or a zero gap.
pub fn validate_gaps(gaps: &[usize]) -> Result<(), SortError> {
    if gaps.is_empty() {
        return Err(SortError::InvalidGapSequence(
            "gap sequence is empty".into(),
        ));
    }
    if let Some(pos) = gaps.iter().position(|&g| g == 0) {
        return Err(SortError::InvalidGapSequence(format!(
            "gap at position {pos} is zero"
        )));
    }
    Ok(())
}

fn gapped_insertion_pass<T: PartialOrd + Copy>(data: &mut [T], gap: usize) {
    debug_assert!(gap > 0);
    for i in gap..data.len() {
        let held = data[i];
        let mut j = i;
        while j >= gap && data[j - gap] > held {
            data[j] = data[j - gap];
            j -= gap;
        }
        data[j] = held;
    }
}
