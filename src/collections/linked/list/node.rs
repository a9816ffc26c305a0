pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single link in a [`LinkedList`](super::LinkedList). Each node owns the rest of the chain
/// through `next`, so a list only ever has one path to any of its nodes.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node { value, next })
    }
}
