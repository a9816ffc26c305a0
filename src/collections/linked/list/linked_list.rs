use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use super::{Iter, IterMut, Link, Node};
#[doc(inline)]
pub use crate::util::error::{ElementNotFound, IndexOutOfRange};
use crate::util::result::ResultExtension;

/// A list with links in a single direction, from the head towards the terminal node.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `append_left` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `append` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// Unlike [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList), this list doesn't
/// track its last node, so appending to the back walks the whole chain.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList { head: None, len: 0 }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Adds the provided element to the front of the LinkedList, making it the new head.
    pub fn append_left(&mut self, value: T) {
        self.head = Some(Node::boxed(value, self.head.take()));
        self.len += 1;
    }

    /// Adds the provided element to the back of the LinkedList. This walks the entire list to find
    /// the terminal node.
    pub fn append(&mut self, value: T) {
        if self.is_empty() {
            return self.append_left(value);
        }

        *self.tail_link() = Some(Node::boxed(value, None));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        let mut curr = self.head.as_deref();
        for _ in 0..index {
            curr = curr.and_then(|node| node.next.as_deref());
        }
        curr.map(|node| &node.value).ok_or(IndexOutOfRange { index, len: self.len })
    }

    /// Inserts `value` so that it ends up at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` doesn't refer to an existing element. See [`LinkedList::try_insert`].
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, shifting the element currently there (and
    /// everything after it) one place back.
    ///
    /// Inserting at index 0, or into an empty list, is the same as [`LinkedList::append_left`].
    /// Otherwise `index` must refer to an existing element: `index == len` is rejected, even
    /// though [`LinkedList::append`] would place the value in that position.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        if index == 0 || self.is_empty() {
            self.append_left(value);
            return Ok(());
        }

        let len = self.len;
        let prev = self.node_mut(index - 1)
            .filter(|node| node.next.is_some())
            .ok_or(IndexOutOfRange { index, len })?;

        prev.next = Some(Node::boxed(value, prev.next.take()));
        self.len += 1;
        Ok(())
    }

    /// Reverses the list in place by pointing every node back at its predecessor.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut curr = self.head.take();

        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = prev;
            prev = Some(node);
        }

        self.head = prev;
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }

    /// Removes the first element equal to `value` and returns it, returning an [`Err`] if no such
    /// element exists, rather than panicking.
    ///
    /// Removing from an empty list does nothing and returns `Ok(None)`.
    pub fn try_remove<'v>(
        &mut self,
        value: &'v T,
    ) -> Result<Option<T>, ElementNotFound<&'v T>> {
        if self.is_empty() {
            return Ok(None);
        }

        match self.index_of(value) {
            Some(0) => Ok(self.pop_front()),
            Some(index) => {
                let removed = self.node_mut(index - 1)
                    .and_then(|prev| {
                        let node = prev.next.take()?;
                        prev.next = node.next;
                        Some(node.value)
                    });
                self.len -= 1;
                Ok(removed)
            },
            None => Err(ElementNotFound(value)),
        }
    }
}

impl<T: PartialEq + Debug> LinkedList<T> {
    /// Removes the first element equal to `value` and returns it, panicking if no such element
    /// exists.
    ///
    /// # Panics
    /// Panics if the list isn't empty and doesn't contain `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.try_remove(value).throw()
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut curr = self.head.as_deref_mut();
        for _ in 0..index {
            curr = curr?.next.as_deref_mut();
        }
        curr
    }

    /// Returns the empty link after the terminal node, or the head link for an empty list.
    pub(crate) fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    #[cfg(test)]
    pub(crate) fn verify_len(&self) {
        let mut count = 0;
        let mut curr = self.head.as_deref();
        while let Some(node) = curr {
            count += 1;
            curr = node.next.as_deref();
        }
        assert_eq!(count, self.len, "Length counter should match the number of reachable nodes.");
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut link = self.tail_link();

        for value in iter {
            link = &mut link.insert(Node::boxed(value, None)).next;
            added += 1;
        }

        self.len += added;
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink one node at a time, dropping a long chain recursively could overflow the stack.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        match iter.next() {
            None => write!(f, "HEAD(None)"),
            Some(head) => {
                write!(f, "HEAD({head})")?;
                for value in iter {
                    write!(f, " -> {value}")?;
                }
                write!(f, " -> None")
            },
        }
    }
}
