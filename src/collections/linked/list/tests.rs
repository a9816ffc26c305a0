#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn collect<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_build_preserves_order() {
    let list = LinkedList::from([2, 4, 5, 6]);
    list.verify_len();
    assert_eq!(list.len(), 4);
    assert_eq!(collect(&list), [2, 4, 5, 6], "Building should keep the input order.");

    let list: LinkedList<char> = "hello".chars().collect();
    assert_eq!(list.len(), 5);
    assert_eq!(list.front(), Some(&'h'));

    let empty = LinkedList::<u8>::new();
    assert!(empty.is_empty());
    assert_eq!(empty.front(), None);
    assert_eq!(empty.iter().next(), None);
}

#[test]
fn test_append_left() {
    let mut list = LinkedList::new();
    list.append_left(1);
    assert_eq!(list.front(), Some(&1), "The appended value should be the new head.");

    let mut list = LinkedList::from([1, 2, 3]);
    for i in 0..10 {
        list.append_left(i);
        assert_eq!(list.front(), Some(&i), "The appended value should be the new head.");
    }
    list.verify_len();
    assert_eq!(list.len(), 13);
}

#[test]
fn test_append() {
    let mut list = LinkedList::from([1, 2, 3]);
    for i in 0..10 {
        list.append(i);
    }
    list.verify_len();
    assert_eq!(list.len(), 13);
    assert_eq!(list.front(), Some(&1), "Appending to the back shouldn't move the head.");
    assert_eq!(list.iter().last(), Some(&9));

    let mut list = LinkedList::new();
    list.append("only");
    assert_eq!(collect(&list), ["only"]);
}

#[test]
fn test_insert() {
    let mut list = LinkedList::from([1, 2, 3]);
    list.insert(1, 99);
    list.verify_len();
    assert_eq!(collect(&list), [1, 99, 2, 3]);

    list.insert(0, 0);
    assert_eq!(collect(&list), [0, 1, 99, 2, 3]);

    list.insert(4, 50);
    list.verify_len();
    assert_eq!(collect(&list), [0, 1, 99, 2, 50, 3]);

    let mut list = LinkedList::new();
    list.insert(7, 1);
    assert_eq!(
        collect(&list),
        [1],
        "Inserting into an empty list should behave like append_left."
    );
}

#[test]
fn test_insert_at_len_is_rejected() {
    let mut list = LinkedList::from([1, 2, 3]);

    assert_eq!(
        list.try_insert(3, 99),
        Err(IndexOutOfRange { index: 3, len: 3 }),
        "Inserting at the length only reaches existing positions, unlike append."
    );
    assert_eq!(list.try_insert(5, 100), Err(IndexOutOfRange { index: 5, len: 3 }));
    assert_eq!(collect(&list), [1, 2, 3], "A failed insert shouldn't modify the list.");
    list.verify_len();

    assert_panics!({
        LinkedList::from([1, 2]).insert(2, 3)
    }, "index out of range");
}

#[test]
fn test_remove() {
    let mut list = LinkedList::from([1, 2, 3]);
    assert_eq!(list.remove(&1), Some(1));
    assert_eq!(collect(&list), [2, 3]);

    let mut list = LinkedList::from([1, 2, 3]);
    assert_eq!(list.remove(&2), Some(2));
    list.verify_len();
    assert_eq!(list.len(), 2);
    assert_eq!(collect(&list), [1, 3]);

    let mut list = LinkedList::from([1, 2, 3]);
    assert_eq!(list.remove(&3), Some(3));
    assert_eq!(collect(&list), [1, 2]);

    let mut list = LinkedList::from([1, 2, 1]);
    list.remove(&1);
    assert_eq!(collect(&list), [2, 1], "Only the first matching element should be removed.");

    let mut list = LinkedList::from([5]);
    list.remove(&5);
    list.verify_len();
    assert!(list.is_empty());
}

#[test]
fn test_remove_missing() {
    let mut list = LinkedList::<i32>::new();
    assert_eq!(list.try_remove(&1), Ok(None), "Removing from an empty list is a no-op.");

    let mut list = LinkedList::from([1, 2, 3]);
    assert_eq!(list.try_remove(&100), Err(ElementNotFound(&100)));
    assert_eq!(list.len(), 3, "A failed removal shouldn't change the length.");
    assert_eq!(collect(&list), [1, 2, 3], "A failed removal shouldn't change the contents.");

    assert_panics!({
        LinkedList::from([1, 2, 3]).remove(&4)
    }, "4 doesn't exist");
}

#[test]
fn test_remove_every_position() {
    for len in 1..6 {
        for target in 0..len {
            let mut list: LinkedList<usize> = (0..len).collect();
            assert_eq!(list.try_remove(&target), Ok(Some(target)));
            list.verify_len();

            let expected: Vec<usize> = (0..len).filter(|i| *i != target).collect();
            assert_eq!(collect(&list), expected, "Removal should splice out exactly one node.");

            list.append(len);
            assert_eq!(list.iter().last(), Some(&len), "The chain should stay terminated.");
        }
    }
}

#[test]
fn test_reverse() {
    let mut list = LinkedList::from([1, 2, 3]);
    list.reverse();
    list.verify_len();
    assert_eq!(list.front(), Some(&3));
    assert_eq!(collect(&list), [3, 2, 1]);

    let mut empty = LinkedList::<u8>::new();
    empty.reverse();
    assert!(empty.is_empty());

    for len in 0..8 {
        let original: LinkedList<usize> = (0..len).collect();
        let mut list = original.clone();
        list.reverse();
        list.reverse();
        assert_eq!(list, original, "Reversing twice should restore the list.");
    }
}

#[test]
fn test_len_tracks_mixed_mutations() {
    let mut list = LinkedList::new();
    for i in 0..20 {
        match i % 4 {
            0 => list.append(i),
            1 => list.append_left(i),
            2 => list.insert(1, i),
            _ => {
                list.remove(&(i - 1));
            },
        }
        list.verify_len();
    }
    list.reverse();
    list.verify_len();
    while list.pop_front().is_some() {
        list.verify_len();
    }
}

#[test]
fn test_get_and_search() {
    let list = LinkedList::from(['a', 'b', 'c']);
    assert_eq!(list.get(2), &'c');
    assert_eq!(list.try_get(3), Err(IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(list.index_of(&'b'), Some(1));
    assert!(list.contains(&'a'));
    assert!(!list.contains(&'z'));
}

#[test]
fn test_iterators() {
    let mut list = LinkedList::from([1, 2, 3]);
    let mut iter = list.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.len(), 2);

    assert_eq!(
        list.iter().collect::<Vec<_>>(),
        list.iter().collect::<Vec<_>>(),
        "Iteration should be restartable."
    );

    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(collect(&list), [10, 20, 30]);

    let owned: Vec<_> = list.into_iter().collect();
    assert_eq!(owned, [10, 20, 30]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(list);
    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let mut list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    let removed = list.remove(&counter);
    drop(removed);
    assert_eq!(counter.take(), 1, "Removing should hand back exactly one element.");
    drop(list);
    assert_eq!(counter.take(), 3);

    let long: LinkedList<usize> = (0..200_000).collect();
    drop(long);
}

#[test]
fn test_equality_hash_and_format() {
    let list = LinkedList::from([1, 2, 3]);
    assert_eq!(list, (1..=3).collect::<LinkedList<_>>());
    assert_ne!(list, LinkedList::from([1, 2]));

    let state = RandomState::new();
    assert_eq!(state.hash_one(&list), state.hash_one(list.clone()));

    assert_eq!(list.to_string(), "HEAD(1) -> 2 -> 3 -> None");
    assert_eq!(LinkedList::<u8>::new().to_string(), "HEAD(None)");
    assert_eq!(format!("{list:?}"), "LinkedList { contents: [1, 2, 3], len: 3 }");
}
