//! Linked collection types: the singly linked [`LinkedList`] and the bidirectional
//! [`DoublyLinkedList`].
//!
//! Both lists keep their length in a counter which every mutation updates, so `len` never walks the
//! chain.

pub mod doubly;
pub mod list;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use list::LinkedList;
