//! A module containing [`DoublyLinkedList`] and its iterators.
//!
//! Nodes are linked forwards and backwards, but only the forward links own anything: a list frees
//! its nodes by walking from the head, while the backward links are plain observations used for
//! navigation.
//!
//! [`DoublyLinkedList`] is also re-exported under the parent module.

mod doubly_linked_list;
mod iter;
mod length;
mod node;
mod tests;

pub use doubly_linked_list::*;
pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
