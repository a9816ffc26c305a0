use derive_more::Display;

use super::{ColumnIndexOutOfRange, GridIndexError, InvalidIndexArity, RowIndexOutOfRange};

/// The shape of a grid, fixed for the grid's whole lifetime.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display("{rows}x{cols}")]
pub struct Size {
    pub rows: usize,
    pub cols: usize,
}

/// A grid's shape along with the total number of cells it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capacity {
    pub rows: usize,
    pub cols: usize,
    pub items: usize,
}

/// A validated or unvalidated `(row, col)` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex {
    pub row: usize,
    pub col: usize,
}

impl Size {
    pub const fn new(rows: usize, cols: usize) -> Size {
        Size { rows, cols }
    }

    /// Returns the number of cells in a grid of this shape.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows a [`usize`].
    pub const fn items(self) -> usize {
        match self.rows.checked_mul(self.cols) {
            Some(items) => items,
            None => panic!("Capacity overflow!"),
        }
    }

    pub const fn capacity(self) -> Capacity {
        Capacity {
            rows: self.rows,
            cols: self.cols,
            items: self.items(),
        }
    }

    /// Returns the shape with rows and columns swapped.
    pub const fn transposed(self) -> Size {
        Size::new(self.cols, self.rows)
    }

    /// Checks `index` against this shape, rejecting the row first and only then the column.
    pub const fn check(self, index: GridIndex) -> Result<GridIndex, GridIndexError> {
        if index.row >= self.rows {
            Err(GridIndexError::RowIndexOutOfRange(RowIndexOutOfRange {
                row: index.row,
                rows: self.rows,
            }))
        } else if index.col >= self.cols {
            Err(GridIndexError::ColumnIndexOutOfRange(ColumnIndexOutOfRange {
                col: index.col,
                cols: self.cols,
            }))
        } else {
            Ok(index)
        }
    }

    /// Returns the row-major offset of an index that has already passed [`Size::check`].
    pub(crate) const fn offset(self, index: GridIndex) -> usize {
        index.row * self.cols + index.col
    }
}

impl GridIndex {
    pub const fn new(row: usize, col: usize) -> GridIndex {
        GridIndex { row, col }
    }
}

impl From<(usize, usize)> for GridIndex {
    fn from((row, col): (usize, usize)) -> Self {
        GridIndex { row, col }
    }
}

impl From<[usize; 2]> for GridIndex {
    fn from([row, col]: [usize; 2]) -> Self {
        GridIndex { row, col }
    }
}

impl TryFrom<&[usize]> for GridIndex {
    type Error = InvalidIndexArity;

    fn try_from(value: &[usize]) -> Result<Self, Self::Error> {
        match *value {
            [row, col] => Ok(GridIndex { row, col }),
            _ => Err(InvalidIndexArity { found: value.len() }),
        }
    }
}

/// Validates a loosely typed index against a grid of the given `size`: the index must have exactly
/// two components, then a valid row, then a valid column.
pub fn validate_index(index: &[usize], size: Size) -> Result<GridIndex, GridIndexError> {
    size.check(GridIndex::try_from(index)?)
}
