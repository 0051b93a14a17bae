// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use crate::error::PercolationError;

/// Weighted quick-union without path compression.
///
/// The weight used to pick a union direction is the walk height of the two
/// arguments, recomputed on every call rather than stored per root.
#[derive(Debug, Clone)]
pub struct DisjointSet {
	size: usize,
	parent: Vec<usize>,
}

impl DisjointSet {
	pub fn new(size: usize) -> Result<DisjointSet, PercolationError> {
		if size < 1 {
			return Err(PercolationError::invalid_argument("disjoint set needs at least one element"));
		}
		Ok(DisjointSet {
			size,
			parent: (0..size).collect(),
		})
	}

	pub fn len(&self) -> usize {
		self.size
	}

	pub fn find_root(&self, a: usize) -> usize {
		let mut x = a;
		while self.parent[x] != x {
			x = self.parent[x];
		}
		x
	}

	/// Number of elements on the path from `a` up to its root, inclusive.
	pub fn height(&self, a: usize) -> usize {
		let mut x = a;
		let mut result = 1;
		while self.parent[x] != x {
			result += 1;
			x = self.parent[x];
		}
		result
	}

	pub fn union(&mut self, a: usize, b: usize) {
		let a_root = self.find_root(a);
		let b_root = self.find_root(b);
		if a_root == b_root {
			return;
		}
		// ties hang b under a
		if self.height(a) >= self.height(b) {
			self.parent[b_root] = a_root;
		} else {
			self.parent[a_root] = b_root;
		}
		trace!("union({}, {}): roots {} and {} merged", a, b, a_root, b_root);
	}

	pub fn connected(&self, a: usize, b: usize) -> bool {
		self.find_root(a) == self.find_root(b)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn rejects_empty_set() {
		assert!(matches!(
			DisjointSet::new(0),
			Err(PercolationError::InvalidArgument { .. })
		));
	}

	#[rstest]
	#[case(1)]
	#[case(3)]
	#[case(11)]
	fn starts_as_singletons(#[case] size: usize) {
		let ds = DisjointSet::new(size).unwrap();
		assert_eq!(ds.len(), size);
		for i in 0..size {
			assert_eq!(ds.find_root(i), i);
			assert_eq!(ds.height(i), 1);
			for j in 0..size {
				assert_eq!(ds.connected(i, j), i == j);
			}
		}
	}

	#[test]
	fn connected_is_an_equivalence() {
		let mut ds = DisjointSet::new(6).unwrap();
		ds.union(0, 1);
		ds.union(1, 2);
		ds.union(4, 5);

		for i in 0..6 {
			assert!(ds.connected(i, i));
		}
		assert!(ds.connected(0, 1) && ds.connected(1, 0));
		assert!(ds.connected(0, 2));
		assert!(ds.connected(2, 0));
		assert!(ds.connected(5, 4));
		assert!(!ds.connected(2, 4));
		assert!(!ds.connected(3, 0));
	}

	#[test]
	fn union_is_idempotent() {
		let mut ds = DisjointSet::new(4).unwrap();
		ds.union(0, 1);
		let before = ds.parent.clone();
		ds.union(0, 1);
		ds.union(1, 0);
		assert_eq!(ds.parent, before);
	}

	#[test]
	fn tie_attaches_second_under_first() {
		let mut ds = DisjointSet::new(3).unwrap();
		ds.union(2, 1);
		assert_eq!(ds.find_root(1), 2);
		assert_eq!(ds.height(1), 2);
	}

	#[test]
	fn shorter_walk_goes_under_taller() {
		let mut ds = DisjointSet::new(3).unwrap();
		ds.union(0, 1);
		// height(2) == 1 < height(1) == 2
		ds.union(2, 1);
		assert_eq!(ds.find_root(2), 0);
		assert_eq!(ds.height(2), 2);
	}

	#[rstest]
	#[case(2)]
	#[case(64)]
	#[case(1024)]
	fn doubling_unions_stay_logarithmic(#[case] size: usize) {
		let mut ds = DisjointSet::new(size).unwrap();
		let mut step = 1;
		while step < size {
			let mut i = 0;
			while i + step < size {
				ds.union(i, i + step);
				i += 2 * step;
			}
			step *= 2;
		}

		let bound = (size as f64).log2().floor() as usize + 1;
		for i in 0..size {
			assert_eq!(ds.find_root(i), 0);
			assert!(ds.height(i) <= bound, "height {} exceeds {}", ds.height(i), bound);
		}
		assert_eq!(ds.height(size - 1), bound);
	}
}
