use std::fmt::{self, Display, Formatter};
use std::iter::{self, Enumerate, FusedIterator};
use std::ops::{Index, IndexMut};
use std::slice;

use super::{validate_index, Capacity, GridIndex, GridIndexError, Size};
use crate::util::result::ResultExtension;

/// A fixed size, two dimensional array where each cell either holds a value or is absent.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `r`: The number of rows.
/// - `c`: The number of columns.
///
/// | Method | Complexity |
/// |-|-|
/// | `get/set/take` | `O(1)` |
/// | `rows/cols/capacity` | `O(1)` |
/// | `clear` | `O(r*c)` |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array2D<T> {
    pub(crate) size: Size,
    pub(crate) cells: Box<[Option<T>]>,
}

/// A single cell yielded by [`Array2D::iter`], along with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a, T> {
    pub row: usize,
    pub col: usize,
    pub value: Option<&'a T>,
}

impl<T> Array2D<T> {
    /// Creates a new Array2D with the provided shape, where every cell is empty.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows a [`usize`].
    pub fn new(rows: usize, cols: usize) -> Array2D<T> {
        let size = Size::new(rows, cols);
        Array2D {
            size,
            cells: iter::repeat_with(|| None).take(size.items()).collect(),
        }
    }

    pub const fn rows(&self) -> usize {
        self.size.rows
    }

    pub const fn cols(&self) -> usize {
        self.size.cols
    }

    pub const fn size(&self) -> Size {
        self.size
    }

    pub const fn capacity(&self) -> Capacity {
        self.size.capacity()
    }

    /// Returns the total number of cells, whether or not they hold a value.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns a reference to the value at `index`, panicking if `index` is invalid.
    ///
    /// # Panics
    /// Panics if the row or column of `index` is out of range.
    pub fn get(&self, index: impl Into<GridIndex>) -> Option<&T> {
        self.try_get(index).throw()
    }

    /// Returns a reference to the value at `index`, or `None` if that cell is empty.
    pub fn try_get(&self, index: impl Into<GridIndex>) -> Result<Option<&T>, GridIndexError> {
        let index = self.size.check(index.into())?;
        Ok(self.cells[self.size.offset(index)].as_ref())
    }

    /// Like [`Array2D::try_get`], but for an index of unchecked arity.
    pub fn get_at(&self, index: &[usize]) -> Result<Option<&T>, GridIndexError> {
        self.try_get(validate_index(index, self.size)?)
    }

    /// Returns a mutable reference to the value at `index`, panicking if `index` is invalid.
    ///
    /// # Panics
    /// Panics if the row or column of `index` is out of range.
    pub fn get_mut(&mut self, index: impl Into<GridIndex>) -> Option<&mut T> {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(
        &mut self,
        index: impl Into<GridIndex>,
    ) -> Result<Option<&mut T>, GridIndexError> {
        Ok(self.slot_mut(index.into())?.as_mut())
    }

    /// Stores `value` at `index`, returning the value it replaced.
    ///
    /// # Panics
    /// Panics if the row or column of `index` is out of range.
    pub fn set(&mut self, index: impl Into<GridIndex>, value: T) -> Option<T> {
        self.try_set(index, value).throw()
    }

    pub fn try_set(
        &mut self,
        index: impl Into<GridIndex>,
        value: T,
    ) -> Result<Option<T>, GridIndexError> {
        Ok(self.slot_mut(index.into())?.replace(value))
    }

    /// Removes the value at `index`, leaving the cell empty.
    ///
    /// # Panics
    /// Panics if the row or column of `index` is out of range.
    pub fn take(&mut self, index: impl Into<GridIndex>) -> Option<T> {
        self.try_take(index).throw()
    }

    pub fn try_take(&mut self, index: impl Into<GridIndex>) -> Result<Option<T>, GridIndexError> {
        Ok(self.slot_mut(index.into())?.take())
    }

    /// Empties every cell, dropping the values they held.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
    }

    /// Returns an iterator over every cell in row-major order.
    pub fn iter(&self) -> Cells<'_, T> {
        Cells {
            inner: self.cells.iter().enumerate(),
            cols: self.size.cols,
        }
    }

    /// Returns the cells of each row, in order.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[Option<T>]> {
        let cols = self.size.cols;
        (0..self.size.rows).map(move |row| &self.cells[row * cols..(row + 1) * cols])
    }

    fn slot_mut(&mut self, index: GridIndex) -> Result<&mut Option<T>, GridIndexError> {
        let index = self.size.check(index)?;
        Ok(&mut self.cells[self.size.offset(index)])
    }
}

impl<T> Index<(usize, usize)> for Array2D<T> {
    type Output = Option<T>;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let index = self.size.check(index.into()).throw();
        &self.cells[self.size.offset(index)]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2D<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        self.slot_mut(index.into()).throw()
    }
}

impl<'a, T> IntoIterator for &'a Array2D<T> {
    type Item = Cell<'a, T>;

    type IntoIter = Cells<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Cells<'a, T> {
    pub(crate) inner: Enumerate<slice::Iter<'a, Option<T>>>,
    pub(crate) cols: usize,
}

impl<'a, T> Iterator for Cells<'a, T> {
    type Item = Cell<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        // A grid with no columns has no cells, so cols is never 0 here.
        self.inner.next().map(|(offset, value)| Cell {
            row: offset / self.cols,
            col: offset % self.cols,
            value: value.as_ref(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> FusedIterator for Cells<'_, T> {}

impl<T> ExactSizeIterator for Cells<'_, T> {}

impl<T: Display> Display for Array2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Array2D(")?;
        for row in self.rows_iter() {
            write!(f, "\t[")?;
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                match cell {
                    Some(value) => write!(f, "{value}")?,
                    None => write!(f, "None")?,
                }
            }
            writeln!(f, "]")?;
        }
        write!(f, ")")
    }
}
