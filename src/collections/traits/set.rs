use std::iter::{Chain, FusedIterator};
use std::marker::PhantomData;

/// Set algebra for collections of distinct elements.
///
/// An implementor supplies two things, a membership test and an iterator over its elements, and
/// gets every operation below for free. The derived operations never hash or sort: each element
/// of one operand is looked up in the other with [`Set::contains`]. For the
/// [`Vec`]-backed [`keyed::Set`](crate::collections::keyed::Set), where membership is a linear
/// scan, that makes `difference`, `intersection`, `union` and the subset checks `O(n*m)`.
///
/// The iterators are lazy and yield elements in the order of the operand they walk. With an
/// insertion-ordered implementor, `a.union(&b)` gives every element of `a` as inserted, followed by
/// the elements only `b` has, as inserted into `b`.
pub trait Set<T>: IntoIterator<Item = T> + Sized {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool;

    /// Returns an iterator over the elements by reference, in the implementor's own order.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Consumes both operands, yielding the elements of `self` which `other` lacks.
    fn into_difference(self, other: Self) -> IntoDifference<Self, T> {
        IntoDifference {
            left: self.into_iter(),
            right: other,
            _phantom: PhantomData,
        }
    }

    /// Elements of `self` which `other` lacks, as `self \ other`.
    fn difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T> {
        Difference {
            left: self.iter(),
            right: other,
        }
    }

    /// Elements held by exactly one operand: first those only in `self`, then those only in
    /// `other`.
    fn symmetric_difference<'a>(
        &'a self,
        other: &'a Self,
    ) -> SymmetricDifference<'a, Self, T> {
        SymmetricDifference {
            halves: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Consumes both operands, yielding the elements of `self` which `other` also holds.
    fn into_intersection(self, other: Self) -> IntoIntersection<Self, T> {
        IntoIntersection {
            left: self.into_iter(),
            right: other,
            _phantom: PhantomData,
        }
    }

    /// Elements of `self` which `other` also holds, as `self ∩ other`.
    fn intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T> {
        Intersection {
            left: self.iter(),
            right: other,
        }
    }

    /// All of `self`, then whatever `other` adds, as `self ∪ other`. No element is yielded twice.
    fn union<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T> {
        Union {
            halves: self.iter().chain(other.difference(self)),
        }
    }

    fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    /// Returns true if every element of `other` is in `self`. An empty `other` always passes.
    fn is_superset(&self, other: &Self) -> bool {
        other.iter().all(|item| self.contains(item))
    }

    /// Returns true if the operands share no element. Stops at the first shared one.
    fn is_disjoint(&self, other: &Self) -> bool {
        self.intersection(other).next().is_none()
    }
}

/// Owned form of [`Set::difference`].
pub struct IntoDifference<S: Set<T>, T> {
    pub(crate) left: S::IntoIter,
    pub(crate) right: S,
    pub(crate) _phantom: PhantomData<T>,
}

impl<S: Set<T>, T> Iterator for IntoDifference<S, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let right = &self.right;
        self.left.by_ref().find(|item| !right.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.left.size_hint().1)
    }
}

impl<S: Set<T>, T> FusedIterator for IntoDifference<S, T> where S::IntoIter: FusedIterator {}

pub struct Difference<'a, S: Set<T>, T: 'a> {
    pub(crate) left: S::Iter<'a>,
    pub(crate) right: &'a S,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Difference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let right = self.right;
        self.left.by_ref().find(|item| !right.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.left.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Difference<'a, S, T> where S::Iter<'a>: FusedIterator {}

pub struct SymmetricDifference<'a, S: Set<T>, T: 'a> {
    pub(crate) halves: Chain<Difference<'a, S, T>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for SymmetricDifference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.halves.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.halves.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for SymmetricDifference<'a, S, T> where
    S::Iter<'a>: FusedIterator
{
}

/// Owned form of [`Set::intersection`].
pub struct IntoIntersection<S: Set<T>, T> {
    pub(crate) left: S::IntoIter,
    pub(crate) right: S,
    pub(crate) _phantom: PhantomData<T>,
}

impl<S: Set<T>, T> Iterator for IntoIntersection<S, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let right = &self.right;
        self.left.by_ref().find(|item| right.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.left.size_hint().1)
    }
}

impl<S: Set<T>, T> FusedIterator for IntoIntersection<S, T> where S::IntoIter: FusedIterator {}

pub struct Intersection<'a, S: Set<T>, T: 'a> {
    pub(crate) left: S::Iter<'a>,
    pub(crate) right: &'a S,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Intersection<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let right = self.right;
        self.left.by_ref().find(|item| right.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.left.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Intersection<'a, S, T> where
    S::Iter<'a>: FusedIterator
{
}

pub struct Union<'a, S: Set<T>, T: 'a> {
    pub(crate) halves: Chain<S::Iter<'a>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Union<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.halves.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.halves.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Union<'a, S, T> where S::Iter<'a>: FusedIterator {}
