//! # sortbench-cli
//!
//! Text report, JSON export, console summary, and shell completion.

pub mod completion;
pub mod export;
pub mod output;
pub mod presenter;
pub mod report;

pub use presenter::ConsolePresenter;
pub use report::{with_report_file, TextReport};
