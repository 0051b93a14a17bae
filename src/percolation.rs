use crate::data::Site;
use crate::disjoint_set::DisjointSet;
use crate::error::PercolationError;

/// An n x n grid of sites, all blocked at construction.
///
/// Site (row, col) lives at disjoint-set index `(row - 1) * n + col`. Index 0
/// is a virtual top joined to every open site in row 1, and index `n * n + 1`
/// a virtual bottom joined to every open site in row n.
///
/// Every coordinate taking call rejects both `row` and `col` outside `[1, n]`
/// with [`PercolationError::OutOfBounds`]; an out-of-range column never
/// reaches the mask.
#[derive(Debug, Clone)]
pub struct Percolation {
	n: usize,
	open: Vec<bool>,
	open_count: usize,
	ds: DisjointSet,
	top: usize,
	bottom: usize,
}

/// Number of sites in an n x n grid, with room left for the two sentinels.
pub(crate) fn site_count(n: usize) -> Result<usize, PercolationError> {
	if n < 1 {
		return Err(PercolationError::invalid_argument("grid side must be at least 1"));
	}
	n.checked_mul(n)
		.filter(|sites| sites.checked_add(2).is_some())
		.ok_or_else(|| PercolationError::invalid_argument("grid side too large"))
}

impl Percolation {
	pub fn new(n: usize) -> Result<Percolation, PercolationError> {
		let sites = site_count(n)?;
		Ok(Percolation {
			n,
			open: vec![false; sites],
			open_count: 0,
			ds: DisjointSet::new(sites + 2)?,
			top: 0,
			bottom: sites + 1,
		})
	}

	pub fn size(&self) -> usize {
		self.n
	}

	pub fn number_of_open_sites(&self) -> usize {
		self.open_count
	}

	fn check_bounds(&self, row: usize, col: usize) -> Result<Site, PercolationError> {
		let site = Site::new(row, col);
		if !site.in_bounds(self.n) {
			return Err(PercolationError::OutOfBounds { row, col, n: self.n });
		}
		Ok(site)
	}

	/// Opens (row, col). Opening an already open site changes nothing.
	pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
		let site = self.check_bounds(row, col)?;
		let index = site.index(self.n);
		if self.open[index - 1] {
			return Ok(());
		}
		self.open[index - 1] = true;
		self.open_count += 1;

		// n == 1 takes both branches
		if site.row == 1 {
			self.ds.union(self.top, index);
		}
		if site.row == self.n {
			self.ds.union(self.bottom, index);
		}
		for neighbor in site.neighbors(self.n) {
			let other = neighbor.index(self.n);
			if self.open[other - 1] {
				self.ds.union(index, other);
			}
		}
		Ok(())
	}

	pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
		let site = self.check_bounds(row, col)?;
		Ok(self.open[site.index(self.n) - 1])
	}

	/// True when the site is joined to both the virtual top and the virtual
	/// bottom. Use [`Percolation::is_reachable_from_top`] for the one-sided
	/// notion of a full site.
	pub fn is_full(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
		let index = self.check_bounds(row, col)?.index(self.n);
		Ok(self.ds.connected(self.top, index) && self.ds.connected(self.bottom, index))
	}

	pub fn is_reachable_from_top(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
		let index = self.check_bounds(row, col)?.index(self.n);
		Ok(self.ds.connected(self.top, index))
	}

	pub fn percolates(&self) -> bool {
		self.ds.connected(self.top, self.bottom)
	}
}
