use crate::{PercolationError, Result};
use smallvec::SmallVec;
use tracing::*;

/// Flat index of the virtual top site.
pub const TOP: usize = 0;
/// Flat index of the virtual bottom site.
pub const BOTTOM: usize = 1;

/// Up to four grid neighbours plus the two virtual sites.
pub type Neighbors = SmallVec<[Site; 4]>;

/// Address of a site: one of the two virtual sites, or a real cell with
/// 1-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Site {
    Top,
    Bottom,
    Cell { row: usize, col: usize },
}

impl Site {
    /// Maps the site to its slot in a grid of the given size.
    ///
    /// Real cells land on `2..=size * size + 1` in row-major order.
    /// Build cells with [`Site::cell`] to get checked coordinates.
    ///
    /// # Panics
    ///
    /// Panics when a hand-built `Cell` has a zero row or column. Coordinates
    /// above `size` are not checked here.
    ///
    /// # Example
    /// ```
    /// use percolation::Site;
    ///
    /// assert_eq!(Site::Top.index(3), 0);
    /// assert_eq!(Site::Bottom.index(3), 1);
    /// assert_eq!(Site::Cell { row: 1, col: 1 }.index(3), 2);
    /// assert_eq!(Site::Cell { row: 3, col: 3 }.index(3), 10);
    /// ```
    pub fn index(self, size: usize) -> usize {
        match self {
            Site::Top => TOP,
            Site::Bottom => BOTTOM,
            Site::Cell { row, col } => {
                assert!(row >= 1 && col >= 1, "cell ({row}, {col}) is not 1-based");
                (row - 1) * size + col + 1
            }
        }
    }

    /// Checks `(i, j)` against a grid of the given size and returns the cell.
    pub fn cell(i: i64, j: i64, size: usize) -> Result<Self> {
        Ok(Site::Cell {
            row: check_axis(i, size)?,
            col: check_axis(j, size)?,
        })
    }

    /// Sites a freshly opened cell may connect to: the virtual top for row 1,
    /// the virtual bottom for row `size`, and the in-bounds orthogonal cells.
    /// Virtual sites and other sites alike are returned; callers filter on
    /// whether they are open.
    pub fn neighbors(self, size: usize) -> Neighbors {
        let mut out = Neighbors::new();
        let Site::Cell { row, col } = self else {
            return out;
        };
        if row == 1 {
            out.push(Site::Top);
        }
        if row == size {
            out.push(Site::Bottom);
        }
        if row > 1 {
            out.push(Site::Cell { row: row - 1, col });
        }
        if row < size {
            out.push(Site::Cell { row: row + 1, col });
        }
        if col > 1 {
            out.push(Site::Cell { row, col: col - 1 });
        }
        if col < size {
            out.push(Site::Cell { row, col: col + 1 });
        }
        out
    }
}

/// Validates one coordinate against the 1-based range `[1, size]`.
///
/// Rows and columns are checked independently with this same bound.
pub fn check_axis(p: i64, size: usize) -> Result<usize> {
    match usize::try_from(p) {
        Ok(axis) if (1..=size).contains(&axis) => Ok(axis),
        _ => {
            error!("Index {} is outside 1..={}", p, size);
            Err(PercolationError::IndexOutOfRange { index: p, size })
        }
    }
}
