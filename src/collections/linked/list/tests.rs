#![cfg(test)]

use std::any::Any;

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::error::{Empty, NotFound};

fn contents<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_append_then_pop_is_identity() {
    let mut list = LinkedList::new();
    for i in 0..10 {
        list.append(i);
        list.verify_double_links();
    }
    assert_eq!(list.len(), 10);
    assert_eq!(list.front(), Ok(&0));
    assert_eq!(list.back(), Ok(&9));

    for i in (0..10).rev() {
        assert_eq!(list.pop(), Ok(i), "Pops should mirror appends.");
        list.verify_double_links();
    }
    assert!(list.is_empty());
    assert_eq!(list.pop(), Err(Empty));
    assert_eq!(list.back(), Err(Empty));
}

#[test]
fn test_prepend_then_pop_front_is_identity() {
    let mut list = LinkedList::new();
    for i in 0..10 {
        list.prepend(i);
    }
    list.verify_double_links();
    assert_eq!(contents(&list), (0..10).rev().collect::<Vec<_>>());

    for i in (0..10).rev() {
        assert_eq!(list.pop_front(), Ok(i));
    }
    assert_eq!(list.pop_front(), Err(Empty));
    assert_eq!(list.front(), Err(Empty));
}

#[test]
fn test_mixed_ends() {
    let mut list = LinkedList::new();
    list.append(2);
    list.prepend(1);
    list.append(3);
    list.verify_double_links();

    assert_eq!(list.pop_front(), Ok(1));
    assert_eq!(list.pop(), Ok(3));
    assert_eq!(list.pop(), Ok(2));
    list.verify_double_links();
    assert!(list.is_empty());

    list.prepend(4);
    assert_eq!(list.front(), list.back(), "A single node is both head and tail.");
}

#[test]
fn test_insert_before_and_after() {
    let mut list = LinkedList::from_iter(['b', 'd']);

    list.insert_before(&'b', 'a').unwrap();
    list.insert_before(&'d', 'c').unwrap();
    list.insert_after(&'d', 'e').unwrap();
    list.insert_after(&'a', 'x').unwrap();
    list.verify_double_links();
    assert_eq!(contents(&list), ['a', 'x', 'b', 'c', 'd', 'e']);
    assert_eq!(list.front(), Ok(&'a'), "Inserting before the head should move the head.");
    assert_eq!(list.back(), Ok(&'e'), "Inserting after the tail should move the tail.");

    assert_eq!(list.insert_before(&'z', 'y'), Err(NotFound));
    assert_eq!(list.insert_after(&'z', 'y'), Err(NotFound));
    assert_eq!(list.len(), 6, "A failed insert shouldn't change the list.");
}

#[test]
fn test_insert_targets_first_match() {
    let mut list = LinkedList::from_iter([1, 2, 1]);
    list.insert_after(&1, 9).unwrap();
    assert_eq!(contents(&list), [1, 9, 2, 1]);
}

#[test]
fn test_remove() {
    let mut list = LinkedList::from_iter([1, 2, 3, 2]);

    assert_eq!(list.remove(&2), Ok(2));
    assert_eq!(contents(&list), [1, 3, 2], "Only the first match should be removed.");
    assert_eq!(list.remove(&7), Err(NotFound));

    assert_eq!(list.remove(&1), Ok(1));
    assert_eq!(list.remove(&2), Ok(2));
    list.verify_double_links();
    assert_eq!(list.front(), Ok(&3));
    assert_eq!(list.back(), Ok(&3));

    assert_eq!(list.remove(&3), Ok(3));
    assert!(list.is_empty());
    assert_eq!(list.remove(&3), Err(NotFound));
}

#[test]
fn test_remove_all() {
    let mut list = LinkedList::from_iter([5, 1, 5, 5, 2, 5]);

    assert_eq!(list.remove_all(&5), 4);
    list.verify_double_links();
    assert_eq!(contents(&list), [1, 2]);
    assert_eq!(list.remove_all(&5), 0);

    let mut list = LinkedList::from_iter([3, 3, 3]);
    assert_eq!(list.remove_all(&3), 3);
    assert!(list.is_empty());
    list.verify_double_links();
}

#[test]
fn test_remove_where_and_find() {
    let mut list: LinkedList<i32> = (1..=10).collect();

    assert_eq!(list.find(|v| v % 4 == 0), Some(&4));
    if let Some(v) = list.find_mut(|v| *v == 4) {
        *v = 40;
    }
    assert!(list.contains(&40));
    assert!(!list.contains(&4));

    assert_eq!(list.remove_first_where(|v| *v > 5), Some(40));
    assert_eq!(list.remove_where(|v| v % 2 == 1), 5);
    list.verify_double_links();
    assert_eq!(contents(&list), [2, 6, 8, 10]);
    assert_eq!(list.remove_first_where(|v| *v > 100), None);
}

#[test]
fn test_reversed() {
    let list = LinkedList::from_iter(["a", "b", "c"]);
    let reversed = list.reversed();

    reversed.verify_double_links();
    assert_eq!(contents(&reversed), ["c", "b", "a"]);
    assert_eq!(reversed.reversed(), list, "Reversing twice should restore the original.");
    assert_eq!(contents(&list), ["a", "b", "c"], "The source list is left untouched.");
    assert!(LinkedList::<u8>::new().reversed().is_empty());
}

#[test]
fn test_iterators() {
    let mut list = LinkedList::from_iter([1, 2, 3, 4]);

    for v in list.iter_mut() {
        *v *= 10;
    }
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [40, 30, 20, 10]);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&10));
    assert_eq!(iter.next_back(), Some(&40));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.clone().count(), 2);
    assert_eq!(iter.next(), Some(&20));
    assert_eq!(iter.next_back(), Some(&30));
    assert_eq!(iter.next(), None, "Front and back cursors must not cross.");

    assert_eq!(list.iter().count(), 4, "Each traversal starts again from the front.");

    let mut owned = list.into_iter();
    assert_eq!(owned.next_back(), Some(40));
    assert_eq!(owned.collect::<Vec<_>>(), [10, 20, 30]);
}

#[test]
fn test_front_and_back_mut() {
    let mut list = LinkedList::from_iter([1, 2]);
    *list.front_mut().unwrap() = 0;
    *list.back_mut().unwrap() = 3;
    assert_eq!(contents(&list), [0, 3]);

    list.clear();
    assert!(list.front_mut().is_err());
    list.verify_double_links();
}

#[test]
fn test_try_from_any() {
    let items: Vec<Box<dyn Any>> = vec![Box::new("x".to_owned()), Box::new("y".to_owned())];
    let list = LinkedList::<String>::try_from_any(items).unwrap();
    assert_eq!(list.to_string(), "[x, y]");

    let items: Vec<Box<dyn Any>> = vec![Box::new(1_i32), Box::new(2_i32), Box::new(3.0_f32)];
    let err = LinkedList::<i32>::try_from_any(items).unwrap_err();
    assert_eq!(err.position, 2);
    assert_eq!(err.expected, "i32");
}

#[test]
fn test_equality_and_clone() {
    let list = LinkedList::from_iter([1, 2, 3]);

    assert_eq!(list, list.clone());
    assert_ne!(list, LinkedList::from_iter([1, 2]));
    assert_ne!(list, LinkedList::from_iter([3, 2, 1]), "Order matters for equality.");
    assert_eq!(LinkedList::<u8>::new(), LinkedList::default());
}

#[test]
fn test_drop_accounting() {
    let counter = DropCounter::new();
    let mut list: LinkedList<_> = (0..6).map(|i| counter.track(i)).collect();

    let popped = list.pop().unwrap();
    assert_eq!(counter.dropped(), 0);
    drop(popped);
    assert_eq!(counter.dropped(), 1);

    assert_eq!(list.remove_where(|t| t.id % 2 == 0), 3);
    assert_eq!(counter.dropped(), 4);

    drop(list);
    assert_eq!(counter.dropped(), 6, "Dropping the list drops every remaining node.");
}

#[test]
fn test_formatting() {
    let list = LinkedList::from_iter([1, 2, 3]);
    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert_eq!(format!("{list:?}"), "LinkedList(1 <-> 2 <-> 3) Count: 3");
    assert_eq!(format!("{:?}", LinkedList::<u8>::new()), "LinkedList() Count: 0");
    assert_eq!(LinkedList::<u8>::new().to_string(), "[]");
}
