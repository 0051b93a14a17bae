/// A grid cell, 1-indexed in both coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Site {
        Site { row, col }
    }

    pub fn in_bounds(&self, n: usize) -> bool {
        self.row >= 1 && self.row <= n && self.col >= 1 && self.col <= n
    }

    /// Index into a disjoint set whose slot 0 is reserved for the top sentinel.
    pub fn index(&self, n: usize) -> usize {
        (self.row - 1) * n + self.col
    }

    /// The site one step in `d`, or `None` when that would leave the n x n grid.
    pub(crate) fn step_toward(&self, d: Direction, n: usize) -> Option<Site> {
        let next = match d {
            Direction::North if self.row > 1 => Site::new(self.row - 1, self.col),
            Direction::South if self.row < n => Site::new(self.row + 1, self.col),
            Direction::West if self.col > 1 => Site::new(self.row, self.col - 1),
            Direction::East if self.col < n => Site::new(self.row, self.col + 1),
            _ => return None,
        };
        Some(next)
    }

    pub fn neighbors(&self, n: usize) -> Vec<Site> {
        Direction::adjacent_directions()
            .into_iter()
            .filter_map(|d| self.step_toward(d, n))
            .collect()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Direction {
    North, East, South, West,
}

impl Direction {
    pub(crate) fn adjacent_directions() -> Vec<Direction> {
        vec![Direction::North, Direction::East,
        Direction::South, Direction::West]
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 1, 3, 1)]
    #[case(1, 3, 3, 3)]
    #[case(2, 1, 3, 4)]
    #[case(3, 3, 3, 9)]
    fn index_is_row_major_from_one(#[case] row: usize, #[case] col: usize, #[case] n: usize, #[case] expected: usize) {
        assert_eq!(Site::new(row, col).index(n), expected);
    }

    #[rstest]
    #[case(Site::new(1, 1), 2)]
    #[case(Site::new(1, 2), 3)]
    #[case(Site::new(2, 2), 4)]
    #[case(Site::new(3, 3), 2)]
    fn neighbors_stay_inside_grid(#[case] site: Site, #[case] count: usize) {
        let ns = site.neighbors(3);
        assert_eq!(ns.len(), count);
        assert!(ns.iter().all(|s| s.in_bounds(3)));
    }

    #[test]
    fn single_site_grid_has_no_neighbors() {
        assert!(Site::new(1, 1).neighbors(1).is_empty());
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 0)]
    #[case(4, 1)]
    #[case(1, 4)]
    fn out_of_range_sites(#[case] row: usize, #[case] col: usize) {
        assert!(!Site::new(row, col).in_bounds(3));
    }
}
