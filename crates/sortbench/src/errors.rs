//! Error handling and exit codes.

use sortbench_core::constants::exit_codes;
use sortbench_core::sorter::SortError;

/// Exit code for a sort error.
pub fn handle_error(err: &SortError) -> i32 {
    match err {
        SortError::Config(_) | SortError::InvalidGapSequence(_) => exit_codes::ERROR_CONFIG,
        SortError::MalformedInput { .. } | SortError::Mismatch { .. } | SortError::Io(_) => {
            exit_codes::ERROR_GENERIC
        }
    }
}

/// Exit code for an application error, looking through any added context.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SortError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
