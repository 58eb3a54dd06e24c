mod error;
mod input;
mod order;
mod output;
mod reduce;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use error::OrderError;
use reduce::OrderSummary;

/// Report the most notable orders in a CSV file of purchase orders
#[derive(Parser, Debug)]
#[command(name = "order-report", version)]
#[command(about = "Find the orders with the highest total, quantity and discount", long_about = None)]
struct Cli {
    /// Path to the orders CSV file
    #[arg(env = "ORDERS_CSV", default_value = "orders.csv")]
    file: PathBuf,

    /// Currency symbol printed in front of totals
    #[arg(long, default_value = "$")]
    currency: String,

    /// Enable verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!(path = %cli.file.display(), "CSV file path");

    if !cli.file.is_file() {
        println!("Error: the file {} does not exist.", cli.file.display());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_malformed_input() {
                println!("Error: the CSV file is not correctly formatted.");
            }
            println!("Error during processing: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), OrderError> {
    let orders = input::read_orders(&cli.file)?;

    let summary = OrderSummary::from_orders(&orders)?;
    debug!(?summary, "computed summary");

    output::print_summary(&summary, &cli.currency)?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}
