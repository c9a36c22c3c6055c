#![cfg(test)]

use super::*;
use crate::util::error::{InvalidArgument, NotFound};

#[test]
fn test_add_and_remove_counts() {
    let mut bag = Bag::new();
    bag.add("apple");
    bag.add("apple");
    bag.add("apple");
    bag.add("pear");

    assert_eq!(bag.remove(&"apple"), Ok(()));
    assert_eq!(bag.count(&"apple"), 2, "Three adds and one remove should leave two.");
    assert_eq!(bag.count(&"pear"), 1);
    assert_eq!(bag.count(&"plum"), 0, "Absent items have a count of zero.");
    assert_eq!(bag.len(), 3, "Length is the sum of every count.");
}

#[test]
fn test_remove_absent() {
    let mut bag = Bag::from_iter([1, 2]);

    assert_eq!(bag.remove(&3), Err(NotFound));
    assert_eq!(bag.len(), 2, "A failed removal shouldn't change the length.");

    assert_eq!(bag.remove(&1), Ok(()));
    assert_eq!(bag.remove(&1), Err(NotFound), "An exhausted item is forgotten.");
    assert!(!bag.contains(&1));
    assert_eq!(bag.distinct_items().count(), 1);
}

#[test]
fn test_length_tracks_successful_operations() {
    let mut bag = Bag::new();
    let mut expected = 0_usize;

    for i in 0..50_u32 {
        bag.add(i % 7);
        expected += 1;
        if i % 3 == 0 && bag.remove(&(i % 5)).is_ok() {
            expected -= 1;
        }
    }

    assert_eq!(bag.len(), expected);
    assert_eq!(bag.counts().map(|(_, count)| count).sum::<usize>(), expected);
    assert!(bag.counts().all(|(_, count)| count > 0), "No entry may hold a zero count.");
}

#[test]
fn test_absent_values_rejected() {
    let mut bag = Bag::new();

    assert_eq!(bag.try_add(Some('a')), Ok(()));
    assert!(matches!(bag.try_add(None), Err(InvalidArgument { .. })));
    assert_eq!(bag.len(), 1);

    let bag = Bag::try_from_options([Some(1), Some(1), Some(2)]).unwrap();
    assert_eq!(bag.count(&1), 2);
    assert!(Bag::try_from_options([Some(1), None]).is_err());
}

#[test]
fn test_distinct_items() {
    let bag = Bag::from_iter(["x", "y", "x", "z", "x"]);

    let mut distinct = bag.distinct_items().copied().collect::<Vec<_>>();
    distinct.sort_unstable();
    assert_eq!(distinct, ["x", "y", "z"]);
    assert_eq!(bag.distinct_items().len(), 3);
    assert_eq!(bag.len(), 5);
}

#[test]
fn test_clear_and_equality() {
    let mut bag = Bag::from_iter([3, 1, 3]);

    assert_eq!(bag, Bag::from_iter([3, 3, 1]), "Insertion order doesn't matter.");
    assert_ne!(bag, Bag::from_iter([3, 1]));
    assert_eq!(bag.clone(), bag);

    bag.clear();
    assert!(bag.is_empty());
    assert_eq!(bag, Bag::default());
}

#[test]
fn test_formatting() {
    let mut bag = Bag::new();
    assert_eq!(bag.to_string(), "{}");

    bag.extend(['q', 'q']);
    assert_eq!(bag.to_string(), "{q: 2}");
    assert_eq!(format!("{bag:?}"), "Bag { counts: {'q': 2}, len: 2 }");
}
