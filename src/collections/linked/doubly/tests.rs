#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn forward<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

fn backward<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
    list.iter().rev().cloned().collect()
}

/// Checks the links, and that both walks agree with each other and with `expected`.
fn assert_contents(list: &DoublyLinkedList<i32>, expected: &[i32]) {
    list.verify_double_links();
    assert_eq!(list.len(), expected.len());
    assert_eq!(forward(list), expected);
    let mut reversed = backward(list);
    reversed.reverse();
    assert_eq!(reversed, expected, "Backward iteration should mirror forward iteration.");
}

#[test]
fn test_build() {
    let list = DoublyLinkedList::from([1, 2, 3]);
    assert_contents(&list, &[1, 2, 3]);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(backward(&list), [3, 2, 1]);

    let empty = DoublyLinkedList::<i32>::new();
    assert_contents(&empty, &[]);
    assert_eq!(empty.front(), None);
    assert_eq!(empty.back(), None);
}

#[test]
fn test_append_left() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    list.append_left(0);
    assert_contents(&list, &[0, 1, 2, 3]);
    assert_eq!(list.front(), Some(&0));

    let mut list = DoublyLinkedList::new();
    list.append_left(0);
    assert_contents(&list, &[0]);
    assert_eq!(list.back(), Some(&0), "A single element should be both head and tail.");
}

#[test]
fn test_append() {
    let mut list = DoublyLinkedList::from([0, 1, 2]);
    list.append(3);
    assert_contents(&list, &[0, 1, 2, 3]);
    assert_eq!(list.front(), Some(&0));
    assert_eq!(list.back(), Some(&3));

    let mut list = DoublyLinkedList::new();
    list.append(0);
    assert_contents(&list, &[0]);
    assert_eq!(list.front(), list.back(), "Head and tail should coincide for one element.");
}

#[test]
fn test_remove() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    assert_eq!(list.remove(&1), Some(1));
    assert_contents(&list, &[2, 3]);

    let mut list = DoublyLinkedList::from([1, 2, 3]);
    assert_eq!(list.remove(&2), Some(2));
    assert_contents(&list, &[1, 3]);

    let mut list = DoublyLinkedList::from([1, 2, 3]);
    assert_eq!(list.remove(&3), Some(3));
    assert_contents(&list, &[1, 2]);

    let mut list = DoublyLinkedList::from([4, 5, 6, 7, 8]);
    list.remove(&6);
    assert_contents(&list, &[4, 5, 7, 8]);
    list.remove(&7);
    assert_contents(&list, &[4, 5, 8]);

    let mut list = DoublyLinkedList::from([9]);
    assert_eq!(list.remove(&9), Some(9));
    assert_contents(&list, &[]);
    assert_eq!(list.front(), None);
}

#[test]
fn test_remove_missing() {
    let mut list = DoublyLinkedList::<i32>::new();
    assert_eq!(list.try_remove(&1), Ok(None), "Removing from an empty list is a no-op.");

    let mut list = DoublyLinkedList::from([1, 2, 3]);
    assert_eq!(list.try_remove(&4), Err(ElementNotFound(&4)));
    assert_contents(&list, &[1, 2, 3]);

    assert_panics!({
        DoublyLinkedList::from([1, 2, 3]).remove(&4)
    }, "4 doesn't exist");
}

#[test]
fn test_insert() {
    let mut list = DoublyLinkedList::new();
    list.insert(0, 1);
    assert_contents(&list, &[1]);

    let mut list = DoublyLinkedList::from([1, 3]);
    list.insert(1, 2);
    assert_contents(&list, &[1, 2, 3]);

    let mut list = DoublyLinkedList::from([1, 2, 3, 4, 5, 6]);
    list.insert(5, 50);
    assert_contents(&list, &[1, 2, 3, 4, 5, 50, 6]);
    list.insert(2, 20);
    assert_contents(&list, &[1, 2, 20, 3, 4, 5, 50, 6]);
    list.insert(0, 0);
    assert_contents(&list, &[0, 1, 2, 20, 3, 4, 5, 50, 6]);
}

#[test]
fn test_insert_at_len_is_rejected() {
    let mut list = DoublyLinkedList::from([1, 2]);
    assert_eq!(
        list.try_insert(2, 3),
        Err(IndexOutOfRange { index: 2, len: 2 }),
        "Inserting at the length only reaches existing positions, unlike append."
    );
    assert_contents(&list, &[1, 2]);

    assert_panics!({
        DoublyLinkedList::from([1, 2]).insert(2, 3)
    }, "index out of range");
}

#[test]
fn test_pop() {
    let mut list = DoublyLinkedList::from([1, 2, 3, 4]);
    assert_eq!(list.pop_front(), Some(1));
    assert_contents(&list, &[2, 3, 4]);
    assert_eq!(list.pop_back(), Some(4));
    assert_contents(&list, &[2, 3]);
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.pop_front(), None);
    assert_contents(&list, &[]);
}

#[test]
fn test_links_survive_mixed_mutations() {
    let mut list = DoublyLinkedList::new();
    let mut model = Vec::new();

    for i in 0..40 {
        match i % 5 {
            0 => {
                list.append(i);
                model.push(i);
            },
            1 => {
                list.append_left(i);
                model.insert(0, i);
            },
            2 if model.len() > 1 => {
                list.insert(1, i);
                model.insert(1, i);
            },
            3 => {
                let target = model[model.len() / 2];
                list.remove(&target);
                model.retain(|v| *v != target);
            },
            _ => {
                list.pop_back();
                model.pop();
            },
        }
        assert_contents(&list, &model);
    }
}

#[test]
fn test_get() {
    let list = DoublyLinkedList::from([10, 20, 30, 40, 50]);
    for (index, expected) in [10, 20, 30, 40, 50].iter().enumerate() {
        assert_eq!(list.get(index), expected, "Seeking from either end should agree.");
    }
    assert_eq!(list.try_get(5), Err(IndexOutOfRange { index: 5, len: 5 }));
    assert_eq!(list.index_of(&40), Some(3));
    assert!(list.contains(&50));
}

#[test]
fn test_iterators() {
    let mut list = DoublyLinkedList::from([1, 2, 3, 4]);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    for value in list.iter_mut().rev() {
        *value += 1;
    }
    assert_contents(&list, &[2, 3, 4, 5]);

    let mut owned = list.into_iter();
    assert_eq!(owned.next_back(), Some(5));
    assert_eq!(owned.next(), Some(2));
    assert_eq!(owned.collect::<Vec<_>>(), [3, 4]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let list: DoublyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(list);
    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let list: DoublyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(6).collect();
    let mut owned = list.into_iter();
    owned.next();
    owned.next_back();
    assert_eq!(counter.take(), 2);
    drop(owned);
    assert_eq!(counter.take(), 4, "Dropping an owned iterator should drop the remaining elements.");
}

#[test]
fn test_equality_and_format() {
    let list = DoublyLinkedList::from([1, 2, 3]);
    assert_eq!(list, list.clone());
    assert_ne!(list, DoublyLinkedList::from([3, 2, 1]));

    assert_eq!(list.to_string(), "HEAD(1) <-> 2 <-> 3 <-> None");
    assert_eq!(DoublyLinkedList::<u8>::new().to_string(), "HEAD(None)");
    assert_eq!(format!("{list:?}"), "DoublyLinkedList { contents: [1, 2, 3], len: 3 }");
}
