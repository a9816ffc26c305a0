use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::{Iter, IterMut, Length, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::{ElementNotFound, IndexOutOfRange};
use crate::util::result::ResultExtension;

/// A list with links in both directions, tracking both its first and last node.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `append_left/append` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists, (or more
/// importantly, favours contiguous collections) because all `O(i)` or `O(n)` operations will
/// consist primarily of cache misses.
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

/// The contents of a non-empty list. Head and tail exist together or not at all, which this type
/// makes impossible to get wrong.
pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

// SAFETY: The list owns all of its nodes, so sending it sends the Ts, and sharing it only shares
// access to the Ts.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: See above.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Adds the provided element to the front of the DoublyLinkedList.
    pub fn append_left(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.append_left(value),
        }
    }

    /// Adds the provided element to the back of the DoublyLinkedList. For an empty list this is
    /// the same as [`DoublyLinkedList::append_left`], so the head and tail are the same node.
    pub fn append(&mut self, value: T) {
        match &mut self.state {
            Empty => self.append_left(value),
            Full(contents) => contents.append(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = head.take_node();

                match (len.decrement(), node.next) {
                    (Some(new_len), Some(new_head)) => {
                        *new_head.prev_mut() = None;
                        *head = new_head;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let node = tail.take_node();

                match (len.decrement(), node.prev) {
                    (Some(new_len), Some(new_tail)) => {
                        *new_tail.next_mut() = None;
                        *tail = new_tail;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        Ok(self.checked_contents_for_index(index)?.seek(index).value())
    }

    /// Inserts `value` so that it ends up at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` doesn't refer to an existing element. See
    /// [`DoublyLinkedList::try_insert`].
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, linking it between the node currently at
    /// `index` and that node's predecessor.
    ///
    /// Inserting at index 0, or into an empty list, is the same as
    /// [`DoublyLinkedList::append_left`]. Otherwise `index` must refer to an existing element, so
    /// `index == len` is rejected rather than treated as [`DoublyLinkedList::append`].
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        if index == 0 || self.is_empty() {
            self.append_left(value);
            return Ok(());
        }

        let contents = self.checked_contents_for_index_mut(index)?;
        let next = contents.seek(index);
        let prev = *next.prev();

        let node = NodePtr::from_node(Node {
            value,
            prev,
            next: Some(next),
        });

        // For this branch index isn't 0, so the node being displaced always has a predecessor.
        if let Some(prev) = prev {
            *prev.next_mut() = Some(node);
        }
        *next.prev_mut() = Some(node);
        contents.len = contents.len.increment();

        Ok(())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
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
        let contents = match &mut self.state {
            Empty => return Ok(None),
            Full(contents) => contents,
        };

        if contents.head.value() == value {
            return Ok(self.pop_front());
        }
        if contents.tail.value() == value {
            return Ok(self.pop_back());
        }

        // Neither end matched, so any match from here on is an interior node with neighbours on
        // both sides.
        let mut curr = *contents.head.next();
        while let Some(ptr) = curr {
            if ptr == contents.tail {
                break;
            }
            if ptr.value() == value {
                if let (Some(prev), Some(next)) = (*ptr.prev(), *ptr.next()) {
                    *prev.next_mut() = Some(next);
                    *next.prev_mut() = Some(prev);
                }
                // SAFETY: The list held at least the head, tail and this node, so it can't be
                // emptied by removing one of them.
                contents.len = unsafe { contents.len.decrement().unwrap_unchecked() };
                return Ok(Some(ptr.take_node().value));
            }
            curr = *ptr.next();
        }

        Err(ElementNotFound(value))
    }
}

impl<T: PartialEq + Debug> DoublyLinkedList<T> {
    /// Removes the first element equal to `value` and returns it, panicking if no such element
    /// exists.
    ///
    /// # Panics
    /// Panics if the list isn't empty and doesn't contain `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.try_remove(value).throw()
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfRange> {
        match &self.state {
            Empty => Err(IndexOutOfRange { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfRange { index, len })
                }
            },
        }
    }

    pub(crate) const fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfRange> {
        match &mut self.state {
            Empty => Err(IndexOutOfRange { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfRange { index, len })
                }
            },
        }
    }

    /// Walks the list both ways, checking that every back-reference points at its predecessor and
    /// that both walks visit exactly `len` nodes.
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "Head shouldn't have a predecessor.");
                assert!(tail.next().is_none(), "Tail shouldn't have a successor.");

                let mut fwd = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(
                        next.prev().unwrap() == curr,
                        "Each back-reference should point at its predecessor."
                    );
                    curr = *next;
                    fwd += 1;
                }
                assert!(tail == curr, "Walking forward should end at the tail.");

                let mut bwd = 1;
                let mut curr = tail;
                while let Some(prev) = curr.prev() {
                    curr = *prev;
                    bwd += 1;
                }
                assert!(head == curr, "Walking backward should end at the head.");

                assert_eq!(fwd, len.get(), "Forward walk should visit len nodes.");
                assert_eq!(bwd, len.get(), "Backward walk should visit len nodes.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Finds the node at `index`, starting from whichever end is closer.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index, self.head)
        } else {
            self.seek_bwd(self.last_index() - index, self.tail)
        }
    }

    pub fn seek_fwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            match node.next() {
                Some(next) => node = *next,
                None => break,
            }
        }
        node
    }

    pub fn seek_bwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            match node.prev() {
                Some(prev) => node = *prev,
                None => break,
            }
        }
        node
    }

    pub fn append_left(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
        self.len = self.len.increment();
    }

    pub fn append(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
        self.len = self.len.increment();
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ListState<T> {
    /// Copies the pointers only, for use by the borrowed iterators.
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, .. }) => {
                // Only the forward links own their nodes.
                let mut curr = Some(head);
                while let Some(ptr) = curr {
                    curr = ptr.take_node().next;
                }
            },
        }
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        match iter.next() {
            None => write!(f, "HEAD(None)"),
            Some(head) => {
                write!(f, "HEAD({head})")?;
                for value in iter {
                    write!(f, " <-> {value}")?;
                }
                write!(f, " <-> None")
            },
        }
    }
}
