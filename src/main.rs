// Pairwise Cohen's h calculator CLI
use clap::Parser;
use cohens_h::{run, AnalysisConfig, OutputTarget};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cohens-h")]
#[command(version)]
#[command(
    about = "Compute Cohen's h for every pair of groups in a proportions dataset",
    long_about = "Reads a CSV whose first column labels the rows, whose first data row holds \
                  one proportion per group and whose optional second row holds sample sizes. \
                  Writes one row per pair of groups, sorted by effect size."
)]
struct Cli {
    /// Input dataset (CSV)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Also compute 95% confidence intervals (requires sample sizes)
    #[arg(long = "ci", visible_alias = "confidence-intervals")]
    confidence_intervals: bool,

    /// Output file
    #[arg(short, long, value_name = "OUTPUT", default_value = cohens_h::table::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print the report to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> AnalysisConfig {
        let output = if self.stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(self.output.clone())
        };
        AnalysisConfig::new()
            .with_confidence_intervals(self.confidence_intervals)
            .with_output(output)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli.input, &cli.config()) {
        Ok(summary) => {
            if let OutputTarget::File(path) = &summary.output {
                println!(
                    "Compared {} pairs across {} groups. The output can be found at {}.",
                    summary.pairs,
                    summary.groups,
                    path.display()
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = ?err, "run aborted");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
