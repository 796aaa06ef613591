//! bytestats - Sort a byte sample and print its summary statistics.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use u_bytestats::report::{print_report, ReportConfig};
use u_bytestats::sample::{create_rng, random_sample, REFERENCE_SAMPLE};

#[derive(Parser)]
#[command(name = "bytestats")]
#[command(about = "Heap-sort a byte sample and report median, mean, maximum and minimum")]
struct Cli {
    /// Print the sample before and after sorting
    #[arg(short, long)]
    verbose: bool,

    /// Comma-separated values (0-255) to use instead of the reference sample
    #[arg(long, value_delimiter = ',', conflicts_with = "random")]
    values: Option<Vec<u8>>,

    /// Use N random values instead of the reference sample
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut data = match (cli.values, cli.random) {
        (Some(values), _) => values,
        (None, Some(len)) => random_sample(len, &mut create_rng(cli.seed)),
        (None, None) => REFERENCE_SAMPLE.to_vec(),
    };
    tracing::info!(len = data.len(), "sample loaded");

    let config = ReportConfig::new().with_verbose(cli.verbose);
    print_report(&mut data, &config)?;

    Ok(())
}
