use derive_more::{Display, Error, From, IsVariant, TryInto};

use super::Size;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid number of indices: expected 2, found {found}")]
pub struct InvalidIndexArity {
    pub found: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("row index out of range: {row} for {rows} rows")]
pub struct RowIndexOutOfRange {
    pub row: usize,
    pub rows: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("column index out of range: {col} for {cols} columns")]
pub struct ColumnIndexOutOfRange {
    pub col: usize,
    pub cols: usize,
}

/// Any of the ways a two dimensional index can be rejected. When both the row and the column are
/// out of range, the row is reported.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum GridIndexError {
    InvalidIndexArity(InvalidIndexArity),
    RowIndexOutOfRange(RowIndexOutOfRange),
    ColumnIndexOutOfRange(ColumnIndexOutOfRange),
}

/// Two grids (or two rows of input) don't have compatible shapes for the requested operation.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid matrix size: {left} and {right} are incompatible")]
pub struct ShapeMismatch {
    pub left: Size,
    pub right: Size,
}
