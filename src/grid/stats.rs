/// Summary of a grid's state at one point in time.
///
/// # Example
/// ```
/// use percolation::Grid;
///
/// let mut grid = Grid::new(2).unwrap();
/// grid.open(1, 1).unwrap();
/// let stats = grid.stats();
/// assert_eq!(stats.size, 2);
/// assert_eq!(stats.open_sites, 1);
/// assert_eq!(stats.full_sites, 1);
/// assert!(!stats.percolates);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridStats {
    pub size: usize,
    pub open_sites: usize,
    pub full_sites: usize,
    pub percolates: bool,
}

impl GridStats {
    /// Fraction of real sites that are open. `0.0` for an empty grid.
    pub fn open_fraction(&self) -> f64 {
        let total = self.size * self.size;
        if total == 0 {
            return 0.0;
        }
        self.open_sites as f64 / total as f64
    }
}

impl std::fmt::Display for GridStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "size={} open={} full={} percolates={}",
            self.size, self.open_sites, self.full_sites, self.percolates
        )
    }
}
