use std::fmt::{self, Debug, Display, Formatter};
use std::iter::{FusedIterator, Zip};
use std::slice;

use super::{EmptyContainer, KeyNotFound};
use crate::util::result::ResultExtension;

/// A map from keys to values, stored as two parallel sequences where the key at each position
/// belongs to the value at the same position.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Map.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(n)` |
/// | `get/contains_key` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `pop_item` | `O(1)` |
/// | `eq` | `O(n^2)` |
#[derive(Clone)]
pub struct Map<K, V> {
    pub(crate) keys: Vec<K>,
    pub(crate) values: Vec<V>,
}

impl<K, V> Map<K, V> {
    pub const fn new() -> Map<K, V> {
        Map {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Removes the most recently inserted entry and returns it, panicking if the Map is empty.
    ///
    /// # Panics
    /// Panics if the Map is empty.
    pub fn pop_item(&mut self) -> (K, V) {
        self.try_pop_item().throw()
    }

    pub fn try_pop_item(&mut self) -> Result<(K, V), EmptyContainer> {
        match (self.keys.pop(), self.values.pop()) {
            (Some(key), Some(value)) => Ok((key, value)),
            _ => Err(EmptyContainer::new("pop_item", "map")),
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    pub fn keys(&self) -> slice::Iter<'_, K> {
        self.keys.iter()
    }

    pub fn values(&self) -> slice::Iter<'_, V> {
        self.values.iter()
    }

    pub fn values_mut(&mut self) -> slice::IterMut<'_, V> {
        self.values.iter_mut()
    }

    /// Returns an iterator over every entry, in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.keys.iter().zip(self.values.iter()),
        }
    }
}

impl<K: PartialEq, V> Map<K, V> {
    /// Associates `value` with `key`, returning the value previously associated with it. A key
    /// that is already present keeps its position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.values[index], value)),
            None => {
                self.keys.push(key);
                self.values.push(value);
                None
            },
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Returns a reference to the value associated with `key`, returning an [`Err`] if the key
    /// isn't present, rather than panicking.
    pub fn try_get<'k>(&self, key: &'k K) -> Result<&V, KeyNotFound<&'k K>> {
        match self.position(key) {
            Some(index) => Ok(&self.values[index]),
            None => Err(KeyNotFound(key)),
        }
    }

    pub fn try_get_mut<'k>(&mut self, key: &'k K) -> Result<&mut V, KeyNotFound<&'k K>> {
        match self.position(key) {
            Some(index) => Ok(&mut self.values[index]),
            None => Err(KeyNotFound(key)),
        }
    }

    /// Returns the value associated with `key`, inserting `default` first if the key isn't
    /// present.
    pub fn get_or_insert(&mut self, key: K, default: V) -> &mut V {
        let index = match self.position(&key) {
            Some(index) => index,
            None => {
                self.keys.push(key);
                self.values.push(default);
                self.values.len() - 1
            },
        };
        &mut self.values[index]
    }

    /// Removes the entry for `key` and returns its value, returning an [`Err`] if the key isn't
    /// present, rather than panicking.
    pub fn try_remove<'k>(&mut self, key: &'k K) -> Result<V, KeyNotFound<&'k K>> {
        match self.position(key) {
            Some(index) => {
                self.keys.remove(index);
                Ok(self.values.remove(index))
            },
            None => Err(KeyNotFound(key)),
        }
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }
}

impl<K: PartialEq + Debug, V> Map<K, V> {
    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if `key` isn't present.
    pub fn get(&self, key: &K) -> &V {
        self.try_get(key).throw()
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if `key` isn't present.
    pub fn get_mut(&mut self, key: &K) -> &mut V {
        self.try_get_mut(key).throw()
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// # Panics
    /// Panics if `key` isn't present.
    pub fn remove(&mut self, key: &K) -> V {
        self.try_remove(key).throw()
    }
}

impl<K: PartialEq, V: Clone> Map<K, V> {
    /// Creates a Map where every key from `keys` is associated with a copy of `value`.
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I, value: V) -> Map<K, V> {
        keys.into_iter().map(|key| (key, value.clone())).collect()
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for Map<K, V> {
    /// Inserts every entry, where later entries replace the values of earlier ones with the same
    /// key.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: PartialEq, V, const N: usize> From<[(K, V); N]> for Map<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Map<K, V> {
    /// Two Maps are equal if they hold the same entries, in any order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.try_get(key).is_ok_and(|other_value| value == other_value))
    }
}

impl<K: Eq, V: Eq> Eq for Map<K, V> {}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);

    type IntoIter = Zip<std::vec::IntoIter<K>, std::vec::IntoIter<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, K, V> {
    pub(crate) inner: Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: Debug, V: Debug> Debug for Map<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Debug, V: Debug> Display for Map<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Map({self:?})")
    }
}
