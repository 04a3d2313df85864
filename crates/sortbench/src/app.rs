//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::warn;

use sortbench_cli::export::write_json;
use sortbench_cli::presenter::ConsolePresenter;
use sortbench_cli::report::with_report_file;
use sortbench_core::registry::DefaultFactory;
use sortbench_orchestration::interfaces::ReportSink;
use sortbench_orchestration::orchestrator::{run_batch, summarize_batch};
use sortbench_orchestration::variant_selection::get_sorters_to_run;

use crate::config::AppConfig;
use crate::input::{generate_input_files, list_input_files};

/// Run the application.
///
/// # Errors
///
/// Fails on bad configuration, an unreadable input directory, or a report
/// that cannot be written. Bad datasets and failed runs are not errors.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        sortbench_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let schedules = config.custom_schedules().context("parsing --gaps")?;
    let factory = DefaultFactory::with_schedules(schedules);
    for schedule in factory.schedules().iter().filter(|s| !s.ends_in_one()) {
        warn!(
            schedule = schedule.name(),
            gaps = %schedule,
            "gap schedule does not end in 1; its output will only be partially sorted"
        );
    }
    let sorters = get_sorters_to_run(&config.algo, &factory)?;

    if config.generate {
        generate_input_files(&config.input_dir, &config.sizes, config.seed).with_context(|| {
            format!("generating datasets in {}", config.input_dir.display())
        })?;
    }

    let inputs = list_input_files(&config.input_dir).with_context(|| {
        format!("reading input directory {}", config.input_dir.display())
    })?;
    if inputs.is_empty() {
        warn!(dir = %config.input_dir.display(), "no input files found");
    }

    let (outcome, stats) = with_report_file(&config.output, |report| {
        let sink: &mut dyn ReportSink = report;
        let outcome = run_batch(&inputs, &sorters, sink)?;
        let stats = summarize_batch(&outcome, sink)?;
        Ok((outcome, stats))
    })
    .with_context(|| format!("writing report {}", config.output.display()))?;

    if let Some(ref path) = config.json {
        write_json(path, outcome.recorder.all(), &stats)
            .with_context(|| format!("writing JSON export {}", path.display()))?;
    }

    ConsolePresenter::new(config.quiet).present_summary(&outcome, &stats, &config.output);
    Ok(())
}
