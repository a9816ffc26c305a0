use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error};

/// A positional index fell outside of a collection's bounds.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index out of range: {index} for length {len}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// A value-based removal couldn't find its target. The value is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNotFound<T>(pub T);

impl<T> ElementNotFound<T> {
    /// Returns the value that was searched for.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Debug> Display for ElementNotFound<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} doesn't exist", self.0)
    }
}

impl<T: Debug> Error for ElementNotFound<T> {}

/// A [`Bag`](crate::collections::sequence::Bag) removal couldn't find its target. The value is
/// handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotInBag<T>(pub T);

impl<T> NotInBag<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Debug> Display for NotInBag<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} not in Bag", self.0)
    }
}

impl<T: Debug> Error for NotInBag<T> {}

/// A keyed lookup or removal couldn't find its key. The key is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNotFound<K>(pub K);

impl<K> KeyNotFound<K> {
    /// Returns the key that was searched for.
    pub fn into_inner(self) -> K {
        self.0
    }
}

impl<K: Debug> Display for KeyNotFound<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} not found", self.0)
    }
}

impl<K: Debug> Error for KeyNotFound<K> {}

/// An operation which needs at least one element was invoked on an empty container.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("{op} from an empty {container}")]
pub struct EmptyContainer {
    pub op: &'static str,
    pub container: &'static str,
}

impl EmptyContainer {
    pub(crate) const fn new(op: &'static str, container: &'static str) -> EmptyContainer {
        EmptyContainer { op, container }
    }
}
