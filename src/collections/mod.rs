//! Classic abstract data types, each built on the smallest structure that supports it.
//!
//! # Purpose
//! These types exist to show how each data structure works, including its invariants and its
//! failure modes, more than to compete with [`std::collections`].
//!
//! # Method
//! Every fallible operation comes in two forms: a `try_` method which returns a [`Result`] with a
//! strongly typed error, and a plain method which panics with that error's message. Each module
//! is gated behind a Cargo feature of the same name, all of which are enabled by default.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "grid")]
pub mod grid;
#[cfg(feature = "keyed")]
pub mod keyed;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "sequence")]
pub mod sequence;
#[cfg(feature = "traits")]
pub mod traits;
