use std::fmt;

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::PercolationError;
use crate::percolation::{site_count, Percolation};

/// 1.96 standard errors either side of the mean gives a 95% interval.
const CONFIDENCE_95: f64 = 1.96;

/// Opens uniformly random blocked sites of a fresh n x n grid until it
/// percolates, returning the fraction of sites open at that moment.
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<f64, PercolationError> {
	let mut p = Percolation::new(n)?;
	let mut opened = 0;
	loop {
		let row = rng.gen_range(1..=n);
		let col = rng.gen_range(1..=n);
		if p.is_open(row, col)? {
			continue;
		}
		p.open(row, col)?;
		opened += 1;
		if p.percolates() {
			break;
		}
	}
	Ok(opened as f64 / (n * n) as f64)
}

/// Per-trial percolation thresholds on an n x n grid and the statistics over them.
#[derive(Debug, Clone)]
pub struct PercolationStats {
	n: usize,
	thresholds: Vec<f64>,
}

impl PercolationStats {
	pub fn new(n: usize, trials: usize) -> Result<PercolationStats, PercolationError> {
		PercolationStats::with_rng(n, trials, &mut thread_rng())
	}

	pub fn with_rng<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<PercolationStats, PercolationError> {
		check_args(n, trials)?;
		let mut thresholds = Vec::with_capacity(trials);
		for i in 0..trials {
			let t = run_trial(n, rng)?;
			debug!("trial {}: percolated at {}", i, t);
			thresholds.push(t);
		}
		let stats = PercolationStats { n, thresholds };
		info!("ran {} trials on a {}x{} grid, mean threshold {}", trials, n, n, stats.mean());
		Ok(stats)
	}

	/// Runs trials on the rayon pool. Each trial gets its own `StdRng`, seeded
	/// from a master generator in trial order, so the result depends only on
	/// `seed`.
	pub fn par_with_seed(n: usize, trials: usize, seed: u64) -> Result<PercolationStats, PercolationError> {
		check_args(n, trials)?;
		let mut master = StdRng::seed_from_u64(seed);
		let seeds: Vec<u64> = (0..trials).map(|_| master.gen()).collect();
		let thresholds = seeds
			.into_par_iter()
			.enumerate()
			.map(|(i, trial_seed)| -> Result<f64, PercolationError> {
				let t = run_trial(n, &mut StdRng::seed_from_u64(trial_seed))?;
				debug!("trial {}: percolated at {}", i, t);
				Ok(t)
			})
			.collect::<Result<Vec<f64>, PercolationError>>()?;
		let stats = PercolationStats { n, thresholds };
		info!("ran {} parallel trials on a {}x{} grid, mean threshold {}", trials, n, n, stats.mean());
		Ok(stats)
	}

	pub fn grid_size(&self) -> usize {
		self.n
	}

	pub fn trials(&self) -> usize {
		self.thresholds.len()
	}

	pub fn thresholds(&self) -> &[f64] {
		&self.thresholds
	}

	pub fn mean(&self) -> f64 {
		self.thresholds.iter().sum::<f64>() / self.trials() as f64
	}

	/// Sample standard deviation. Undefined for a single trial.
	pub fn stddev(&self) -> Result<f64, PercolationError> {
		let trials = self.trials();
		if trials < 2 {
			return Err(PercolationError::NotEnoughTrials { trials });
		}
		let mean = self.mean();
		let s_square: f64 = self.thresholds.iter().map(|t| (t - mean) * (t - mean)).sum();
		Ok((s_square / (trials - 1) as f64).sqrt())
	}

	fn half_width(&self) -> Result<f64, PercolationError> {
		Ok(CONFIDENCE_95 * self.stddev()? / (self.trials() as f64).sqrt())
	}

	pub fn confidence_lo(&self) -> Result<f64, PercolationError> {
		Ok(self.mean() - self.half_width()?)
	}

	pub fn confidence_hi(&self) -> Result<f64, PercolationError> {
		Ok(self.mean() + self.half_width()?)
	}

	pub fn confidence_interval(&self) -> Result<(f64, f64), PercolationError> {
		Ok((self.confidence_lo()?, self.confidence_hi()?))
	}

	pub fn report(&self) -> Result<Report, PercolationError> {
		let (confidence_lo, confidence_hi) = self.confidence_interval()?;
		Ok(Report {
			mean: self.mean(),
			stddev: self.stddev()?,
			confidence_lo,
			confidence_hi,
		})
	}
}

fn check_args(n: usize, trials: usize) -> Result<(), PercolationError> {
	site_count(n)?;
	if trials < 1 {
		return Err(PercolationError::invalid_argument("trial count must be at least 1"));
	}
	Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
	pub mean: f64,
	pub stddev: f64,
	pub confidence_lo: f64,
	pub confidence_hi: f64,
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "mean                    = {}", self.mean)?;
		writeln!(f, "stddev                  = {}", self.stddev)?;
		write!(f, "95% confidence interval = {}, {}", self.confidence_lo, self.confidence_hi)
	}
}
