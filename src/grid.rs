use crate::{
    union_find::{UnionFind, WeightedQuickUnion},
    PercolationError, Result,
};
use tracing::*;

mod site;
mod stats;

pub use site::*;
pub use stats::*;

// Largest site count whose union-find arrays stay addressable
const MAX_SITES: usize = isize::MAX as usize / std::mem::size_of::<usize>();

/// An N×N percolation grid.
///
/// Real sites are addressed with 1-based `(row, column)` coordinates. Two
/// virtual sites sit above the top row and below the bottom row; the grid
/// percolates once they end up in the same connected component.
///
/// # Example
/// ```
/// use percolation::Grid;
///
/// let mut grid = Grid::new(2).unwrap();
/// grid.open(1, 1).unwrap();
/// grid.open(2, 2).unwrap();
/// assert!(!grid.percolates());
/// assert!(!grid.is_full(2, 2).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Grid<U = WeightedQuickUnion> {
    size: usize,
    open: Vec<bool>,
    open_count: usize,
    connectivity: U,
}

impl Grid {
    /// Creates a grid of `n`×`n` closed sites backed by [`WeightedQuickUnion`].
    ///
    /// Fails with [`PercolationError::InvalidArgument`] when `n` is negative or
    /// the grid cannot be allocated.
    /// `n == 0` yields an empty grid that never percolates.
    pub fn new(n: i64) -> Result<Self> {
        Self::with_union_find(n)
    }
}

impl<U: UnionFind> Grid<U> {
    /// Creates a grid with an explicit union-find strategy.
    ///
    /// # Example
    /// ```
    /// use percolation::{Grid, QuickFind};
    ///
    /// let mut grid = Grid::<QuickFind>::with_union_find(1).unwrap();
    /// grid.open(1, 1).unwrap();
    /// assert!(grid.percolates());
    /// ```
    pub fn with_union_find(n: i64) -> Result<Self> {
        let size = usize::try_from(n).map_err(|_| {
            error!("Invalid grid size: {}", n);
            PercolationError::InvalidArgument { size: n }
        })?;
        let too_large = || {
            error!("Grid size {} is too large to allocate", n);
            PercolationError::InvalidArgument { size: n }
        };
        let count = size
            .checked_mul(size)
            .and_then(|cells| cells.checked_add(2))
            .filter(|&count| count <= MAX_SITES)
            .ok_or_else(too_large)?;

        let mut open = Vec::new();
        open.try_reserve_exact(count).map_err(|_| too_large())?;
        open.resize(count, false);
        open[TOP] = true;
        open[BOTTOM] = true;

        debug!("Created {}x{} grid with {} sites", size, size, count);
        Ok(Self {
            size,
            open,
            open_count: 0,
            connectivity: U::new(count),
        })
    }

    /// Returns N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns how many real sites have been opened.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Opens site `(i, j)` if it is not open yet and connects it to every open
    /// neighbour. Opening an already open site does nothing.
    pub fn open(&mut self, i: i64, j: i64) -> Result<()> {
        let site = Site::cell(i, j, self.size)?;
        let q = site.index(self.size);
        if self.open[q] {
            trace!("Site ({}, {}) already open", i, j);
            return Ok(());
        }

        self.open[q] = true;
        self.open_count += 1;
        for neighbor in site.neighbors(self.size) {
            let p = neighbor.index(self.size);
            if self.open[p] {
                self.connectivity.union(q, p);
            }
        }
        trace!(
            "Opened ({}, {}), {} sites open, {} components",
            i,
            j,
            self.open_count,
            self.connectivity.count()
        );
        Ok(())
    }

    /// Returns whether site `(i, j)` is open.
    pub fn is_open(&self, i: i64, j: i64) -> Result<bool> {
        let site = Site::cell(i, j, self.size)?;
        Ok(self.open[site.index(self.size)])
    }

    /// Returns whether site `(i, j)` is open and connected to the virtual top.
    ///
    /// Open bottom-row sites share the virtual bottom, so once the grid
    /// percolates every open bottom-row site is full.
    pub fn is_full(&mut self, i: i64, j: i64) -> Result<bool> {
        let q = Site::cell(i, j, self.size)?.index(self.size);
        Ok(self.open[q] && self.connectivity.connected(TOP, q))
    }

    /// Returns whether an open path joins the top row to the bottom row.
    pub fn percolates(&mut self) -> bool {
        self.connectivity.connected(TOP, BOTTOM)
    }

    /// Iterates over every real site in row-major order.
    pub fn sites(&self) -> impl Iterator<Item = Site> {
        let size = self.size;
        (1..=size).flat_map(move |row| (1..=size).map(move |col| Site::Cell { row, col }))
    }

    /// Collects the current counts into a [`GridStats`].
    pub fn stats(&mut self) -> GridStats {
        let size = self.size;
        let full_sites = self
            .sites()
            .map(|site| site.index(size))
            .filter(|&q| self.open[q] && self.connectivity.connected(TOP, q))
            .count();
        GridStats {
            size: self.size,
            open_sites: self.open_count,
            full_sites,
            percolates: self.percolates(),
        }
    }
}
