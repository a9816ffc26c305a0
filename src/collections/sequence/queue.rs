use std::collections::{vec_deque, VecDeque};
use std::fmt::{self, Debug, Display, Formatter};

use super::{ElementNotFound, EmptyContainer};
use crate::util::result::ResultExtension;

/// A first in, first out collection.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`* |
/// | `dequeue/front` | `O(1)` |
/// | `remove` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    pub(crate) items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Adds `value` to the back of the Queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes the element at the front of the Queue and returns it.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    pub fn dequeue(&mut self) -> T {
        self.try_dequeue().throw()
    }

    pub fn try_dequeue(&mut self) -> Result<T, EmptyContainer> {
        self.items.pop_front().ok_or(EmptyContainer::new("dequeue", "queue"))
    }

    /// Returns a reference to the element at the front of the Queue.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    pub fn try_front(&self) -> Result<&T, EmptyContainer> {
        self.items.front().ok_or(EmptyContainer::new("front", "queue"))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from the front of the Queue to the back.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Queue<T> {
    /// Removes the first occurrence of `value` and returns it, wherever it is in the Queue.
    pub fn try_remove<'v>(&mut self, value: &'v T) -> Result<T, ElementNotFound<&'v T>> {
        self.items
            .iter()
            .position(|item| item == value)
            .and_then(|index| self.items.remove(index))
            .ok_or(ElementNotFound(value))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

impl<T: PartialEq + Debug> Queue<T> {
    /// Removes the first occurrence of `value` and returns it.
    ///
    /// # Panics
    /// Panics if the Queue doesn't contain `value`.
    pub fn remove(&mut self, value: &T) -> T {
        self.try_remove(value).throw()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Queue({:?})", self.items)
    }
}
