//! Gap schedules, labels and exit codes.

/// Knuth's `(3^k - 1) / 2` increments.
pub const KNUTH_GAPS: [usize; 10] = [29524, 9841, 3280, 1093, 364, 121, 40, 13, 4, 1];

/// Near-threefold increments starting just above Knuth's largest.
pub const SECOND_GAPS: [usize; 10] = [30341, 10111, 3371, 1123, 373, 149, 53, 17, 5, 1];

/// Threefold increments with a doubling tail.
pub const THIRD_GAPS: [usize; 10] = [29160, 9720, 3240, 1080, 360, 120, 60, 30, 10, 1];

/// Sedgewick's `4^k + 3 * 2^(k-1) + 1` increments.
pub const SEDGEWICK_GAPS: [usize; 9] = [65921, 16577, 4193, 1073, 281, 77, 23, 8, 1];

/// Built-in schedules in evaluation order.
pub const BUILTIN_SCHEDULES: [(&str, &[usize]); 4] = [
    ("knuth", &KNUTH_GAPS),
    ("second", &SECOND_GAPS),
    ("third", &THIRD_GAPS),
    ("sedgewick", &SEDGEWICK_GAPS),
];

/// Variant label prefix for gap-sequence sorts.
pub const SHELL_LABEL_PREFIX: &str = "shell_";

/// Variant label of the heap sort.
pub const HEAP_LABEL: &str = "heap";

/// Number of leading file-name characters that encode the ordering category.
pub const CATEGORY_PREFIX_LEN: usize = 3;

/// Dataset sizes written by the input generator.
pub const DEFAULT_SIZES: [usize; 4] = [25, 50, 200, 500];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, unexpected failure).
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
