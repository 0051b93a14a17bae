#[macro_use] extern crate log;

mod data;
mod disjoint_set;
mod error;
mod percolation;
mod stats;

pub use data::Site;
pub use disjoint_set::DisjointSet;
pub use error::PercolationError;
pub use percolation::Percolation;
pub use stats::{run_trial, PercolationStats, Report};
