//! Console entry point for describing a numeric series.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use descriptive::shell::source::DataSource;
use descriptive::shell::Shell;

/// Elementary descriptive statistics over a numeric series.
#[derive(Parser)]
#[command(name = "descriptive")]
#[command(about = "Compute mean, standard deviation, median and modes of a numeric series")]
#[command(version)]
struct Cli {
    /// Preselect the data source instead of prompting for it.
    #[arg(long, value_enum)]
    source: Option<DataSource>,

    /// Series length for the manual and random sources.
    #[arg(long)]
    length: Option<usize>,

    /// Seed for the random source; omitted means OS entropy.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!(
        "source override: {:?}, length override: {:?}, seeded: {}",
        cli.source,
        cli.length,
        cli.seed.is_some()
    );

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), rng);

    let result = match cli.source {
        Some(source) => shell.run_with_source(source, cli.length),
        None => shell.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
