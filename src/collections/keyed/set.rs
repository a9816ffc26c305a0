use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, BitXor, Sub};
use std::slice;

use super::{EmptyContainer, KeyNotFound};
use crate::collections::traits::set::Set as SetTrait;
use crate::util::result::ResultExtension;

/// A set of distinct elements kept in insertion order. The set algebra, such as
/// [`union`](SetTrait::union) and [`is_disjoint`](SetTrait::is_disjoint), comes from the
/// [`Set`](crate::collections::traits::Set) trait.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Set.
/// - `m`: The number of items in the other Set of a binary operation.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert/remove/contains` | `O(n)` |
/// | `pop` | `O(1)` |
/// | `union/intersection/difference` | `O(n*m)` |
/// | `eq` | `O(n^2)` |
#[derive(Clone)]
pub struct Set<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Set<T> {
    pub const fn new() -> Set<T> {
        Set { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes the most recently inserted element and returns it, panicking if the Set is empty.
    ///
    /// # Panics
    /// Panics if the Set is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    pub fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        self.items.pop().ok_or(EmptyContainer::new("pop", "set"))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: PartialEq> Set<T> {
    /// Adds `value` to the Set, returning false if an equal element was already present, in which
    /// case the Set is left unchanged.
    pub fn insert(&mut self, value: T) -> bool {
        if self.items.contains(&value) {
            false
        } else {
            self.items.push(value);
            true
        }
    }

    /// Removes the element equal to `value` and returns it, returning an [`Err`] if there isn't
    /// one, rather than panicking.
    pub fn try_remove<'v>(&mut self, value: &'v T) -> Result<T, KeyNotFound<&'v T>> {
        match self.items.iter().position(|item| item == value) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(KeyNotFound(value)),
        }
    }

    /// Removes the element equal to `value` if there is one, returning whether anything was
    /// removed.
    pub fn discard(&mut self, value: &T) -> bool {
        self.try_remove(value).is_ok()
    }
}

impl<T: PartialEq + Debug> Set<T> {
    /// Removes the element equal to `value` and returns it.
    ///
    /// # Panics
    /// Panics if the Set doesn't contain `value`.
    pub fn remove(&mut self, value: &T) -> T {
        self.try_remove(value).throw()
    }
}

impl<T: PartialEq> SetTrait<T> for Set<T> {
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.items.iter()
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for Set<T> {
    /// Inserts every item, skipping those already present.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for Set<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for Set<T> {
    /// Two Sets are equal if they hold the same elements, in any order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: PartialEq + Clone> BitOr for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: PartialEq + Clone> BitAnd for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: PartialEq + Clone> BitXor for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: PartialEq + Clone> Sub for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Debug> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Set({:?})", self.items)
    }
}
