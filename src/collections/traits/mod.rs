//! Traits shared between collections of the same kind.

pub mod set;

#[doc(inline)]
pub use set::Set;
