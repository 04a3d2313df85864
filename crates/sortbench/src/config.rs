//! Application configuration from CLI flags.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use sortbench_core::gaps::GapSequence;
use sortbench_core::sorter::SortError;

/// sortbench — times Shell sort gap schedules against heap sort.
#[derive(Parser, Debug)]
#[command(name = "sortbench", version, about)]
pub struct AppConfig {
    /// Directory holding the datasets to sort.
    #[arg(long, default_value = "input")]
    pub input_dir: PathBuf,

    /// Text report path.
    #[arg(short, long, default_value = "output/output.txt")]
    pub output: PathBuf,

    /// Variants to run: all, shell, or a comma-separated list of labels.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Extra gap schedule, registered as shell_NAME. Repeatable.
    #[arg(long = "gaps", value_name = "NAME=G1,G2,...")]
    pub gaps: Vec<String>,

    /// Write synthetic datasets into the input directory first.
    #[arg(long)]
    pub generate: bool,

    /// Dataset sizes for --generate.
    #[arg(long, value_delimiter = ',', default_value = "25,50,200,500")]
    pub sizes: Vec<usize>,

    /// Seed for the random datasets of --generate.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write records and statistics as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and skip the console summary.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Log level selected by `-v`/`-q`.
    #[must_use]
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// The `--gaps` schedules, parsed.
    ///
    /// # Errors
    ///
    /// Returns the first schedule that fails to parse.
    pub fn custom_schedules(&self) -> Result<Vec<GapSequence>, SortError> {
        self.gaps.iter().map(|s| GapSequence::parse(s)).collect()
    }
}
