use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
	#[error("Invalid argument: {message}")]
	InvalidArgument { message: String },

	#[error("Site ({row}, {col}) is outside the {n}x{n} grid")]
	OutOfBounds { row: usize, col: usize, n: usize },

	/// Sample standard deviation divides by `trials - 1`.
	#[error("Need at least 2 trials for a standard deviation, got {trials}")]
	NotEnoughTrials { trials: usize },
}

impl PercolationError {
	pub fn invalid_argument(message: impl Into<String>) -> PercolationError {
		PercolationError::InvalidArgument { message: message.into() }
	}
}
