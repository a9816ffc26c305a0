//! A module containing [`LinkedList`], a singly linked list, and its iterators.
//!
//! [`LinkedList`] is also re-exported under the parent module.

mod iter;
mod linked_list;
mod node;
mod tests;

pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;
