#[macro_use] extern crate log;

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::*;

use percolation::PercolationStats;

/// Estimates the site percolation threshold of an n x n grid by Monte Carlo simulation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Grid side length
	n: usize,

	/// Number of independent trials; stddev and the interval need at least 2
	trials: usize,

	/// Seed for reproducible runs
	#[arg(short, long)]
	seed: Option<u64>,

	/// Run trials on all cores
	#[arg(short, long)]
	parallel: bool,

	/// off, error, warn, info, debug or trace
	#[arg(long, default_value = "warn")]
	log_level: LevelFilter,

	/// Also write logs to this file
	#[arg(long)]
	log_file: Option<PathBuf>,
}

fn init_logging(args: &Args) -> Result<(), Box<dyn Error>> {
	let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
		TermLogger::new(args.log_level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto),
	];
	if let Some(path) = &args.log_file {
		loggers.push(WriteLogger::new(args.log_level, Config::default(), File::create(path)?));
	}
	CombinedLogger::init(loggers)?;
	Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
	init_logging(args)?;
	info!("n: {}, trials: {}, seed: {:?}, parallel: {}", args.n, args.trials, args.seed, args.parallel);

	let stats = match (args.seed, args.parallel) {
		(Some(seed), true) => PercolationStats::par_with_seed(args.n, args.trials, seed)?,
		(None, true) => PercolationStats::par_with_seed(args.n, args.trials, rand::random())?,
		(Some(seed), false) => {
			let mut rng = StdRng::seed_from_u64(seed);
			PercolationStats::with_rng(args.n, args.trials, &mut rng)?
		}
		(None, false) => PercolationStats::new(args.n, args.trials)?,
	};
	match stats.report() {
		Ok(report) => println!("{}", report),
		Err(e) => {
			// mean is defined for a single trial, stddev is not
			println!("mean                    = {}", stats.mean());
			return Err(e.into());
		}
	}
	Ok(())
}

fn main() -> ExitCode {
	let args = Args::parse();
	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("error: {}", e);
			ExitCode::FAILURE
		}
	}
}
