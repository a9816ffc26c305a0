use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;
use std::slice;

use rand::Rng;

use super::{EmptyContainer, NotInBag};
use crate::util::result::ResultExtension;

/// An unordered collection which allows repeated elements. Iteration happens to follow insertion
/// order, but nothing else about a Bag depends on it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Bag.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(1)`* |
/// | `remove` | `O(n)` |
/// | `count/contains` | `O(n)` |
/// | `counts` | `O(n)` |
/// | `randpop` | `O(n)` |
///
/// \* Amortized.
#[derive(Debug, Clone)]
pub struct Bag<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Bag<T> {
    pub const fn new() -> Bag<T> {
        Bag { items: Vec::new() }
    }

    pub fn add(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes an element chosen uniformly at random and returns it.
    ///
    /// # Panics
    /// Panics if the Bag is empty.
    pub fn randpop(&mut self) -> T {
        self.try_randpop().throw()
    }

    pub fn try_randpop(&mut self) -> Result<T, EmptyContainer> {
        self.try_randpop_with(&mut rand::rng())
    }

    /// Removes an element chosen by `rng` and returns it. The remaining elements keep their order.
    pub fn try_randpop_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<T, EmptyContainer> {
        if self.items.is_empty() {
            return Err(EmptyContainer::new("randpop", "bag"));
        }
        let index = rng.random_range(0..self.items.len());
        Ok(self.items.remove(index))
    }
}

impl<T: PartialEq> Bag<T> {
    /// Removes one occurrence of `value` and returns it, returning an [`Err`] if the Bag doesn't
    /// contain `value`, rather than panicking.
    pub fn try_remove<'v>(&mut self, value: &'v T) -> Result<T, NotInBag<&'v T>> {
        match self.items.iter().position(|item| item == value) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(NotInBag(value)),
        }
    }

    /// Returns the number of occurrences of `value`.
    pub fn count(&self, value: &T) -> usize {
        self.items.iter().filter(|item| *item == value).count()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

impl<T: PartialEq + Debug> Bag<T> {
    /// Removes one occurrence of `value` and returns it.
    ///
    /// # Panics
    /// Panics if the Bag doesn't contain `value`.
    pub fn remove(&mut self, value: &T) -> T {
        self.try_remove(value).throw()
    }
}

impl<T: Hash + Eq> Bag<T> {
    /// Returns the multiplicity of every distinct element.
    pub fn counts(&self) -> HashMap<&T, usize> {
        let mut counts = HashMap::new();
        for item in self.items.iter() {
            *counts.entry(item).or_insert(0) += 1;
        }
        counts
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Bag {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for Bag<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> IntoIterator for Bag<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Display for Bag<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Bag({:?})", self.items)
    }
}
