use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::Num;

use super::{validate_index, GridIndex, GridIndexError, ShapeMismatch, Size};
use crate::util::result::ResultExtension;

/// A `rows × cols` grid of numbers supporting the basic matrix arithmetic.
///
/// Binary operations are only defined between two Matrices of the same element type, so handing
/// one a different kind of operand is a compile time error rather than a runtime one. Operand
/// shapes are checked at runtime, through the `try_` methods, or by the panicking methods and
/// operators.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `r`, `c`: The number of rows and columns in `self`.
/// - `p`: The number of columns in the right hand side of a multiplication.
///
/// | Method | Complexity |
/// |-|-|
/// | `get/set` | `O(1)` |
/// | `scale_by` | `O(r*c)` |
/// | `add/subtract` | `O(r*c)` |
/// | `transpose` | `O(r*c)` |
/// | `multiply` | `O(r*c*p)` |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    pub(crate) size: Size,
    pub(crate) data: Box<[T]>,
}

impl<T: Num + Copy> Matrix<T> {
    /// Creates a new Matrix with the provided shape, where every element is zero.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows a [`usize`].
    pub fn new(rows: usize, cols: usize) -> Matrix<T> {
        Matrix::filled(rows, cols, T::zero())
    }

    /// Creates a new Matrix with the provided shape, where every element is `value`.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows a [`usize`].
    pub fn filled(rows: usize, cols: usize, value: T) -> Matrix<T> {
        let size = Size::new(rows, cols);
        Matrix {
            size,
            data: vec![value; size.items()].into_boxed_slice(),
        }
    }

    /// Creates a Matrix from a sequence of rows, panicking if the rows aren't all the same
    /// length.
    ///
    /// # Panics
    /// Panics if the rows differ in length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Matrix<T> {
        Matrix::try_from_rows(rows).throw()
    }

    /// Creates a Matrix from a sequence of rows. An empty sequence produces a `0x0` Matrix.
    ///
    /// Returns a [`ShapeMismatch`] between the first row and the first row that differs from it
    /// in length.
    pub fn try_from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Matrix<T>, ShapeMismatch> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());

        if let Some(row) = rows.iter().find(|row| row.as_ref().len() != cols) {
            return Err(ShapeMismatch {
                left: Size::new(1, cols),
                right: Size::new(1, row.as_ref().len()),
            });
        }

        Ok(Matrix {
            size: Size::new(rows.len(), cols),
            data: rows.iter().flat_map(|row| row.as_ref().iter().copied()).collect(),
        })
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

    /// Returns the element at `index`, panicking if `index` is invalid.
    ///
    /// # Panics
    /// Panics if the row or column of `index` is out of range.
    pub fn get(&self, index: impl Into<GridIndex>) -> T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: impl Into<GridIndex>) -> Result<T, GridIndexError> {
        let index = self.size.check(index.into())?;
        Ok(self.data[self.size.offset(index)])
    }

    /// Like [`Matrix::try_get`], but for an index of unchecked arity.
    pub fn get_at(&self, index: &[usize]) -> Result<T, GridIndexError> {
        self.try_get(validate_index(index, self.size)?)
    }

    /// Stores `value` at `index`, returning the element it replaced.
    ///
    /// # Panics
    /// Panics if the row or column of `index` is out of range.
    pub fn set(&mut self, index: impl Into<GridIndex>, value: T) -> T {
        self.try_set(index, value).throw()
    }

    pub fn try_set(&mut self, index: impl Into<GridIndex>, value: T) -> Result<T, GridIndexError> {
        let index = self.size.check(index.into())?;
        let slot = &mut self.data[self.size.offset(index)];
        Ok(std::mem::replace(slot, value))
    }

    /// Multiplies every element by `scalar`, in place.
    pub fn scale_by(&mut self, scalar: T) {
        for value in self.data.iter_mut() {
            *value = *value * scalar;
        }
    }

    /// Returns the element-wise sum of `self` and `other`, panicking if their shapes differ.
    ///
    /// # Panics
    /// Panics if `self` and `other` don't have the same shape.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Matrix<T>) -> Matrix<T> {
        self.try_add(other).throw()
    }

    pub fn try_add(&self, other: &Matrix<T>) -> Result<Matrix<T>, ShapeMismatch> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Returns the element-wise difference of `self` and `other`, panicking if their shapes
    /// differ.
    ///
    /// # Panics
    /// Panics if `self` and `other` don't have the same shape.
    pub fn subtract(&self, other: &Matrix<T>) -> Matrix<T> {
        self.try_subtract(other).throw()
    }

    pub fn try_subtract(&self, other: &Matrix<T>) -> Result<Matrix<T>, ShapeMismatch> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns the matrix product `self × other`, panicking if the shapes are incompatible.
    ///
    /// # Panics
    /// Panics if the number of columns in `self` isn't the number of rows in `other`.
    pub fn multiply(&self, other: &Matrix<T>) -> Matrix<T> {
        self.try_multiply(other).throw()
    }

    /// Returns the matrix product `self × other`, a new `self.rows() × other.cols()` Matrix, or a
    /// [`ShapeMismatch`] if `self.cols() != other.rows()`.
    pub fn try_multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>, ShapeMismatch> {
        if self.size.cols != other.size.rows {
            return Err(ShapeMismatch {
                left: self.size,
                right: other.size,
            });
        }

        let mut product = Matrix::new(self.size.rows, other.size.cols);
        for i in 0..self.size.rows {
            for j in 0..other.size.cols {
                let mut sum = T::zero();
                for k in 0..self.size.cols {
                    sum = sum + self[(i, k)] * other[(k, j)];
                }
                product[(i, j)] = sum;
            }
        }
        Ok(product)
    }

    /// Returns a new Matrix with rows and columns swapped, so that `result[j, i] == self[i, j]`.
    pub fn transpose(&self) -> Matrix<T> {
        let size = self.size.transposed();
        let mut transposed = Matrix::new(size.rows, size.cols);
        for i in 0..self.size.rows {
            for j in 0..self.size.cols {
                transposed[(j, i)] = self[(i, j)];
            }
        }
        transposed
    }

    /// Returns the elements of each row, in order.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[T]> {
        let cols = self.size.cols;
        (0..self.size.rows).map(move |row| &self.data[row * cols..(row + 1) * cols])
    }

    fn zip_with(
        &self,
        other: &Matrix<T>,
        op: impl Fn(T, T) -> T,
    ) -> Result<Matrix<T>, ShapeMismatch> {
        if self.size != other.size {
            return Err(ShapeMismatch {
                left: self.size,
                right: other.size,
            });
        }

        Ok(Matrix {
            size: self.size,
            data: self.data.iter().zip(other.data.iter()).map(|(a, b)| op(*a, *b)).collect(),
        })
    }
}

impl<T: Num + Copy> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let index = self.size.check(index.into()).throw();
        &self.data[self.size.offset(index)]
    }
}

impl<T: Num + Copy> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let index = self.size.check(index.into()).throw();
        &mut self.data[self.size.offset(index)]
    }
}

impl<T: Num + Copy> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl<T: Num + Copy> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<T: Num + Copy> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: Num + Copy + Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix(")?;
        for (index, row) in self.rows_iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "[")?;
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        write!(f, ")")
    }
}
