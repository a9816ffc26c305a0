//! Keyed collections which only rely on equality between keys: [`Map`] and [`Set`].
//!
//! Both keep their entries in insertion order within plain sequences, so lookups are linear
//! rather than hashed, while equality between two of them ignores that order.

mod map;
mod set;

pub use map::*;
pub use set::*;

#[doc(inline)]
pub use crate::util::error::{EmptyContainer, KeyNotFound};
