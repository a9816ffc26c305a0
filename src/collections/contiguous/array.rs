use std::fmt::{self, Display, Formatter};
use std::iter;
use std::ops::{Index, IndexMut};
use std::slice;

#[doc(inline)]
pub use crate::util::error::IndexOutOfRange;
use crate::util::result::ResultExtension;

/// An array with a capacity fixed at construction, where each cell either holds a value or is
/// absent. Similar to a `Box<[Option<T>]>` with checked access.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The capacity of the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get/set/take` | `O(1)` |
/// | `capacity` | `O(1)` |
/// | `len` | `O(n)` |
/// | `clear` | `O(n)` |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array<T> {
    pub(crate) cells: Box<[Option<T>]>,
}

impl<T> Array<T> {
    /// Creates a new Array with `capacity` empty cells.
    pub fn new(capacity: usize) -> Array<T> {
        Array {
            cells: iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// Returns the number of cells in the Array, whether or not they hold a value.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of cells that currently hold a value.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns true if no cell holds a value.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Returns a reference to the value at `index`, panicking if `index` is out of range.
    ///
    /// # Panics
    /// Panics if `index >= capacity`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<Option<&T>, IndexOutOfRange> {
        Ok(self.check_index(index)?.as_ref())
    }

    /// Returns a mutable reference to the value at `index`, panicking if `index` is out of range.
    ///
    /// # Panics
    /// Panics if `index >= capacity`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<Option<&mut T>, IndexOutOfRange> {
        Ok(self.check_index_mut(index)?.as_mut())
    }

    /// Stores `value` at `index`, returning the value it replaced.
    ///
    /// # Panics
    /// Panics if `index >= capacity`.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        self.try_set(index, value).throw()
    }

    pub fn try_set(&mut self, index: usize, value: T) -> Result<Option<T>, IndexOutOfRange> {
        Ok(self.check_index_mut(index)?.replace(value))
    }

    /// Removes the value at `index`, leaving the cell empty.
    ///
    /// # Panics
    /// Panics if `index >= capacity`.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.try_take(index).throw()
    }

    pub fn try_take(&mut self, index: usize) -> Result<Option<T>, IndexOutOfRange> {
        Ok(self.check_index_mut(index)?.take())
    }

    /// Empties every cell, dropping the values they held.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, Option<T>> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Option<T>> {
        self.cells.iter_mut()
    }

    fn check_index(&self, index: usize) -> Result<&Option<T>, IndexOutOfRange> {
        if index < self.cells.len() {
            Ok(&self.cells[index])
        } else {
            Err(IndexOutOfRange { index, len: self.cells.len() })
        }
    }

    fn check_index_mut(&mut self, index: usize) -> Result<&mut Option<T>, IndexOutOfRange> {
        let len = self.cells.len();
        if index < len {
            Ok(&mut self.cells[index])
        } else {
            Err(IndexOutOfRange { index, len })
        }
    }
}

impl<T: PartialEq> Array<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.cells.iter().flatten().any(|value| value == item)
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = Option<T>;

    fn index(&self, index: usize) -> &Self::Output {
        self.check_index(index).throw()
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.check_index_mut(index).throw()
    }
}

impl<T> FromIterator<T> for Array<T> {
    /// Creates an Array with exactly enough cells for the items of `iter`, all of them filled.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            cells: iter.into_iter().map(Some).collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = Option<T>;

    type IntoIter = std::vec::IntoIter<Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a Option<T>;

    type IntoIter = slice::Iter<'a, Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Display> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match cell {
                Some(value) => write!(f, "{value}")?,
                None => write!(f, "None")?,
            }
        }
        write!(f, "]")
    }
}
