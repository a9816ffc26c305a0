use std::fmt::{self, Debug, Display, Formatter};
use std::slice;

use super::EmptyContainer;
use crate::util::result::ResultExtension;

/// A last in, first out collection.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`* |
/// | `pop/top` | `O(1)` |
///
/// \* Amortized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes the most recently pushed element and returns it.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    pub fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        self.items.pop().ok_or(EmptyContainer::new("pop", "stack"))
    }

    /// Returns a reference to the most recently pushed element.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    pub fn top(&self) -> &T {
        self.try_top().throw()
    }

    pub fn try_top(&self) -> Result<&T, EmptyContainer> {
        self.items.last().ok_or(EmptyContainer::new("top", "stack"))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the bottom of the Stack to the top.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Stack({:?})", self.items)
    }
}
