//! Shared helpers for checking sort output.

/// Whether every element is `<=` its successor.
#[must_use]
pub fn is_sorted_non_decreasing<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Index of the first element that is greater than its successor, if any.
#[must_use]
pub fn first_inversion<T: PartialOrd>(data: &[T]) -> Option<usize> {
    data.windows(2).position(|w| w[0] > w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_boundaries() {
        assert!(is_sorted_non_decreasing::<i32>(&[]));
        assert!(is_sorted_non_decreasing(&[7]));
        assert!(is_sorted_non_decreasing(&[1, 1, 2, 2]));
        assert!(!is_sorted_non_decreasing(&[2, 1]));
    }

    #[test]
    fn first_inversion_position() {
        assert_eq!(first_inversion(&[1.0, 2.0, 3.0]), None);
        assert_eq!(first_inversion(&[1.0, 3.0, 2.0, 0.0]), Some(1));
    }
}
