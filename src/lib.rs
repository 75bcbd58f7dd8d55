//! This crate models a percolation experiment on an N×N grid of sites.
//! Sites start closed and are opened one by one; the grid percolates once an
//! open path connects the top row to the bottom row. Connectivity is tracked
//! incrementally with a union-find structure (see [`union_find`]).
//!
//! # Example
//! ```
//! use percolation::Grid;
//!
//! let mut grid = Grid::new(3).unwrap();
//! grid.open(1, 2).unwrap();
//! grid.open(2, 2).unwrap();
//! assert!(!grid.percolates());
//!
//! grid.open(3, 2).unwrap();
//! assert!(grid.percolates());
//! assert!(grid.is_full(3, 2).unwrap());
//! ```

/// Site state and connectivity tracking for an N×N grid.
pub mod grid;
/// Disjoint-set structures used as the connectivity backend of a [`Grid`].
///
/// Two strategies are provided:
/// - [`QuickFind`]: constant-time queries, linear-time unions.
/// - [`WeightedQuickUnion`]: union by size with path halving (the default).
///
/// Both satisfy the [`UnionFind`] contract, so swapping one for the other never
/// changes what a grid reports.
pub mod union_find;

pub use grid::*;
pub use union_find::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercolationError {
    #[error("Grid size must be >= 0, got {size}")]
    InvalidArgument { size: i64 },

    #[error("Index {index} is not between 1 and {size}")]
    IndexOutOfRange { index: i64, size: usize },
}

pub type Result<T> = std::result::Result<T, PercolationError>;
