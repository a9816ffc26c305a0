use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

/// A pointer to a heap allocated [`Node`].
///
/// Every NodePtr held by a list refers to a live node that was created by [`NodePtr::from_node`]
/// and is only freed by [`NodePtr::take_node`], which is what allows the accessors here to be
/// safe for use within this module.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is live while this pointer is held by a list or iterator.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub const fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: The node is live, and the list hands out at most one mutable reference.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is live while this pointer is held by a list or iterator.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Links are only rewritten by the owning list, which holds a unique borrow.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub const fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is live while this pointer is held by a list or iterator.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Links are only rewritten by the owning list, which holds a unique borrow.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back out of the heap, freeing its allocation. Any other copies of this
    /// pointer must be discarded.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node, and the caller unlinks it so that
        // no copy of it is used again.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    /// Observes the previous node, never owns it.
    pub prev: Link<T>,
    /// Owns the rest of the chain.
    pub next: Link<T>,
}
