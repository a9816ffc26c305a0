//! A module containing [`Array`], a one dimensional collection with a capacity fixed at
//! construction.
//!
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration over its cells.

mod array;

pub use array::*;
