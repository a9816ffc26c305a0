//! Thin collections over a growable sequence, each restricting how elements are added and removed:
//! [`Bag`] (unordered, with repeats), [`Stack`] (last in, first out) and [`Queue`] (first in, first
//! out).
//!
//! Operations that need an element report an [`EmptyContainer`] error naming themselves and their
//! container, such as `pop from an empty stack`.

mod bag;
mod queue;
mod stack;
mod tests;

pub use bag::*;
pub use queue::*;
pub use stack::*;

#[doc(inline)]
pub use crate::util::error::{ElementNotFound, EmptyContainer, NotInBag};
