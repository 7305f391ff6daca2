use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process;
use std::time::Instant;

use clap::Parser;
use log::info;
use midpoint_pi::math::{calculate_pi, calculate_pi_sequential, IntegrationConfig};
use tracing_subscriber::EnvFilter;

const MIN_INTERVALS: i64 = 1_000_000;
const MAX_INTERVALS: i64 = 10_000_000;

#[derive(Parser, Debug)]
#[command(name = "pi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Approximate pi with a multi-threaded midpoint sum", long_about = None)]
struct Args {
    /// Number of intervals (1,000,000 - 10,000,000); prompted for when omitted
    #[arg(long)]
    intervals: Option<i64>,

    /// Number of worker threads; prompted for when omitted
    #[arg(long)]
    threads: Option<i64>,

    /// Run every range on the main thread instead of spawning workers
    #[arg(long)]
    sequential: bool,
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<i64, Box<dyn Error>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err("unexpected end of input".into());
    }
    let value = line
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("'{}' is not a whole number: {e}", line.trim()))?;
    Ok(value)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let intervals = match args.intervals {
        Some(n) => n,
        None => prompt(&mut input, "Number of intervals (1,000,000 - 10,000,000): ")?,
    };
    let threads = match args.threads {
        Some(n) => n,
        None => prompt(&mut input, "Number of threads: ")?,
    };

    let config = IntegrationConfig::new(intervals, threads)?;
    if !(MIN_INTERVALS..=MAX_INTERVALS).contains(&intervals) {
        return Err(midpoint_pi::Error::OutOfRange {
            intervals,
            min: MIN_INTERVALS,
            max: MAX_INTERVALS,
        }
        .into());
    }
    info!(
        "integrating {} intervals on {} threads",
        config.total_intervals(),
        config.thread_count()
    );

    let start = Instant::now();
    let pi = if args.sequential {
        calculate_pi_sequential(&config)?
    } else {
        calculate_pi(&config)?
    };
    let elapsed = start.elapsed();

    println!("Approximate value of PI: {pi}");
    println!("Computation time: {} seconds", elapsed.as_secs_f64());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("midpoint_pi=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
