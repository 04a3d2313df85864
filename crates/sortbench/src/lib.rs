//! sortbench library — application logic for the sort timing harness.

pub mod app;
pub mod config;
pub mod errors;
pub mod input;
