use clap::{Parser, Subcommand, ValueEnum};
use fitness_core::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fitrep")]
#[command(about = "Workout report calculator for running, walking and swimming", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format (text, json); overrides the config file
    #[arg(long, global = true)]
    format: Option<FormatArg>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Accept zero or non-finite values and compute them as-is
    #[arg(long, global = true)]
    no_guard: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Report the built-in sample workouts (default)
    Sample,

    /// Report a single workout given on the command line
    Calc {
        /// Workout code (RUN, WLK, SWM)
        code: String,

        /// Raw values in the workout's field order
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Report every workout in a CSV, JSON or JSONL file
    Report {
        /// Input file
        input: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    fitness_core::logging::init_with_level(fitness_core::logging::level_for(cli.verbose));

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let mut validation = config.validation.clone();
    if cli.no_guard {
        validation.guard_magnitudes = false;
    }

    let packages = match cli.command {
        Some(Commands::Sample) | None => sample_packages(),
        Some(Commands::Calc { code, values }) => {
            vec![WorkoutPackage::new(code, parse_values(&values)?)]
        }
        Some(Commands::Report { input }) => load_packages(&input)?,
    };

    tracing::debug!(
        "Processing {} packages (guard_magnitudes = {})",
        packages.len(),
        validation.guard_magnitudes
    );
    let summary = process_packages(&packages, &validation);
    print_summary(&summary, format)?;

    if summary.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Print reports to stdout and failures to stderr, in input order
fn print_summary(summary: &BatchSummary, format: OutputFormat) -> Result<()> {
    for outcome in &summary.outcomes {
        match outcome.result {
            Ok(ref message) => match format {
                OutputFormat::Text => println!("{}", message),
                OutputFormat::Json => println!("{}", serde_json::to_string(message)?),
            },
            Err(ref e) => eprintln!(
                "error: record {} ({}): {}",
                outcome.index + 1,
                outcome.workout_type,
                e
            ),
        }
    }
    Ok(())
}
