use std::num::NonZero;

/// The length of a non-empty list. An empty list has no contents at all, so zero is never stored.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    /// Returns the length after one more node has been linked in.
    pub const fn increment(self) -> Length {
        // Every node is its own allocation, so the count can't reach usize::MAX.
        Length(self.0.saturating_add(1))
    }

    /// Returns the length after one node has been unlinked, or `None` if that was the last one.
    pub const fn decrement(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
