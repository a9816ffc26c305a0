//! Two dimensional collections with a fixed shape: [`Array2D`] for arbitrary, optionally absent
//! cells and [`Matrix`] for numeric arithmetic.
//!
//! Both store their cells row-major in a single allocation of exactly `rows * cols` items, and
//! both validate every access through [`Size::check`], so a bad index is reported the same way
//! everywhere: rows are checked before columns.

mod array_2d;
mod error;
mod index;
mod matrix;

pub use array_2d::*;
pub use error::*;
pub use index::*;
pub use matrix::*;
