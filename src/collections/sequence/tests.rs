#![cfg(test)]

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_bag_add_remove() {
    let mut bag = Bag::from([1, 2, 3]);
    bag.add(4);
    assert_eq!(bag.len(), 4);
    assert!(bag.contains(&4));

    assert_eq!(bag.remove(&1), 1);
    assert_eq!(bag.iter().copied().collect::<Vec<_>>(), [2, 3, 4]);
    assert!(!bag.contains(&1));

    assert_eq!(bag.try_remove(&10), Err(NotInBag(&10)));
    assert_eq!(bag.len(), 3, "A failed removal shouldn't change the Bag.");
    assert_panics!({ Bag::from([1]).remove(&3) }, "3 not in Bag");
}

#[test]
fn test_bag_count() {
    let mut bag = Bag::from(["a", "b", "b", "c", "b"]);
    assert_eq!(bag.count(&"b"), 3);
    assert_eq!(bag.count(&"z"), 0);

    bag.remove(&"b");
    assert_eq!(bag.count(&"b"), 2, "Removal should only take one occurrence.");

    let counts = bag.counts();
    assert_eq!(counts, HashMap::from([(&"a", 1), (&"b", 2), (&"c", 1)]));
    assert_eq!(counts.values().sum::<usize>(), bag.len());
}

#[test]
fn test_bag_iter_and_format() {
    let mut bag: Bag<i32> = (1..=3).collect();
    bag.extend([3, 4]);
    assert_eq!(bag.to_string(), "Bag([1, 2, 3, 3, 4])");
    assert_eq!((&bag).into_iter().count(), 5);
    assert_eq!(bag.into_iter().sum::<i32>(), 13);
    assert!(Bag::<u8>::new().is_empty());
}

#[test]
fn test_bag_randpop() {
    let mut bag = Bag::from([1, 2, 3]);
    let popped = bag.randpop();
    assert!([1, 2, 3].contains(&popped));
    assert_eq!(bag.len(), 2);
    assert!(!bag.contains(&popped), "The popped element should leave the Bag.");

    let mut rng = StdRng::seed_from_u64(7);
    let mut seen: Vec<i32> = Vec::new();
    while let Ok(value) = bag.try_randpop_with(&mut rng) {
        seen.push(value);
    }
    seen.push(popped);
    seen.sort();
    assert_eq!(seen, [1, 2, 3], "Every element should come out exactly once.");

    assert_eq!(bag.try_randpop(), Err(EmptyContainer::new("randpop", "bag")));
    assert_panics!({ Bag::<u8>::new().randpop() }, "randpop from an empty bag");
}

#[test]
fn test_stack() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.top(), &3);
    assert_eq!(stack.len(), 3, "Top shouldn't remove the element.");

    assert_eq!(stack.pop(), 3);
    assert_eq!(stack.pop(), 2);
    assert_eq!(stack.pop(), 1);
    assert!(stack.is_empty());
}

#[test]
fn test_stack_empty() {
    let mut stack = Stack::<i32>::new();
    assert_eq!(
        stack.try_pop(),
        Err(EmptyContainer {
            op: "pop",
            container: "stack"
        })
    );
    assert_eq!(stack.try_top().unwrap_err().to_string(), "top from an empty stack");
    assert_panics!({ Stack::<i32>::new().pop() }, "pop from an empty stack");

    stack.extend([1, 2]);
    stack.clear();
    assert!(stack.try_pop().is_err());
}

#[test]
fn test_stack_iter_and_format() {
    let stack = Stack::from([1, 2, 3]);
    assert_eq!(
        stack.iter().copied().collect::<Vec<_>>(),
        [1, 2, 3],
        "Iteration should go from the bottom to the top."
    );
    assert!(stack.contains(&2));
    assert_eq!(stack.to_string(), "Stack([1, 2, 3])");
}

#[test]
fn test_queue() {
    let mut queue = Queue::new();
    for i in 1..5 {
        queue.enqueue(i);
    }
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.front(), &1);

    assert_eq!(queue.dequeue(), 1);
    assert_eq!(queue.dequeue(), 2);
    assert_eq!(queue.front(), &3);
    assert_eq!(queue.to_string(), "Queue([3, 4])");
}

#[test]
fn test_queue_empty() {
    let mut queue = Queue::<i32>::new();
    assert!(queue.is_empty());
    assert_eq!(
        queue.try_dequeue().unwrap_err().to_string(),
        "dequeue from an empty queue"
    );
    assert_eq!(
        queue.try_front(),
        Err(EmptyContainer {
            op: "front",
            container: "queue"
        })
    );
    assert_panics!({ Queue::<i32>::new().dequeue() }, "dequeue from an empty queue");
}

#[test]
fn test_queue_remove() {
    let mut queue = Queue::from([1, 2, 3, 2]);
    assert_eq!(queue.remove(&2), 2);
    assert_eq!(
        queue.iter().copied().collect::<Vec<_>>(),
        [1, 3, 2],
        "Only the first occurrence should be removed."
    );
    assert!(queue.contains(&2));

    assert_eq!(queue.try_remove(&10), Err(ElementNotFound(&10)));
    assert_eq!(queue.len(), 3);
    assert_panics!({ Queue::from([1]).remove(&10) }, "10 doesn't exist");

    assert_eq!(queue.into_iter().rev().collect::<Vec<_>>(), [2, 3, 1]);
}
