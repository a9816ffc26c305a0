//! This crate is a collection of classic abstract data types, written from first principles.
//!
//! # Purpose
//! This crate is a learning project, with no expectation for it to be used in production. Each
//! type is small enough to read in one sitting: linked lists in both directions, two dimensional
//! arrays and matrices, and the usual bags, stacks, queues, maps and sets.
//!
//! # Method
//! The linked lists manage their own nodes, including raw pointers for the back links of
//! [`DoublyLinkedList`](collections::linked::DoublyLinkedList). Everything else is built on top of
//! [`Vec`], [`VecDeque`](std::collections::VecDeque) or a boxed slice, because the interesting
//! part of those types is their interface and not their storage.
//!
//! # Error Handling
//! It is more ergonomic for some methods to panic, because users don't want to be forced to handle
//! an error every time they read from a collection they know to be in range. So every fallible
//! method has a `try_` counterpart that returns a [`Result`] instead.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs that implement
//! [`Error`](std::error::Error). Errors that concern a specific value, such as
//! [`ElementNotFound`](collections::sequence::ElementNotFound), hand that value back.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types, because deriving [`Display`] and
//! [`Error`](std::error::Error) removes the need for some very repetitive programming, and on
//! `num-traits` for the numeric bound of [`Matrix`](collections::grid::Matrix).
//!
//! [`Display`]: std::fmt::Display

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
