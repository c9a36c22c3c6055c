// HashMap property tests.
//
// Property 1: the map behaves like std's HashMap.
//  - Model: std::collections::HashMap with the same keys and values.
//  - Operations: set, delete, get, get_mut.
//  - Invariant: len and every lookup match the model; the load factor never exceeds its maximum
//    once an insertion returns.
//
// Property 2: growth preserves associations.
//  - Enumerate every pair before and after the insertion that grows the map; apart from the new
//    pair, the two enumerations hold the same pairs.
//
// Property 3: the bag's length is the sum of its counts.
//  - Model: std HashMap of counts.
use std::collections::HashMap as StdHashMap;

use container_lib::collections::bag::Bag;
use container_lib::collections::hash::{HashMap, HashMapConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_hash_map_matches_std(
        buckets in 1usize..12,
        ops in proptest::collection::vec((0u8..4u8, 0u16..64u16, any::<i64>()), 1..300)
    ) {
        let config = HashMapConfig { buckets, ..HashMapConfig::default() };
        let mut map = HashMap::with_config(config).unwrap();
        let mut model: StdHashMap<String, i64> = StdHashMap::new();

        for (op, raw_key, value) in ops {
            let key = format!("k{raw_key}");
            match op {
                0 => prop_assert_eq!(map.set(key.clone(), value), model.insert(key.clone(), value)),
                1 => prop_assert_eq!(map.delete(&key).ok(), model.remove(&key)),
                2 => prop_assert_eq!(map.get(&key).ok(), model.get(&key)),
                3 => {
                    if let (Ok(ours), Some(theirs)) = (map.get_mut(&key), model.get_mut(&key)) {
                        *ours = ours.wrapping_add(1);
                        *theirs = theirs.wrapping_add(1);
                    }
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(map.len(), model.len());
            prop_assert_eq!(map.contains(&key), model.contains_key(&key));
            prop_assert!(map.load_factor() <= map.max_load_factor());
        }

        let pairs: StdHashMap<String, i64> =
            map.iter().map(|(key, value)| (key.clone(), *value)).collect();
        prop_assert_eq!(pairs, model);
    }

    #[test]
    fn prop_growth_preserves_associations(
        keys in proptest::collection::hash_set(any::<u32>(), 1..120)
    ) {
        let mut map = HashMap::new();

        for key in keys {
            let before: StdHashMap<u32, u32> = map.iter().map(|(k, v)| (*k, *v)).collect();
            let buckets = map.bucket_count();

            prop_assert_eq!(map.set(key, key.wrapping_mul(31)), None);

            let mut after: StdHashMap<u32, u32> = map.iter().map(|(k, v)| (*k, *v)).collect();
            prop_assert_eq!(after.remove(&key), Some(key.wrapping_mul(31)));
            prop_assert_eq!(&after, &before);
            if map.bucket_count() != buckets {
                prop_assert!(map.bucket_count() > buckets * 2);
            }
        }
    }

    #[test]
    fn prop_bag_length_is_sum_of_counts(
        ops in proptest::collection::vec((any::<bool>(), 0u8..10u8), 1..200)
    ) {
        let mut bag = Bag::new();
        let mut model: StdHashMap<u8, usize> = StdHashMap::new();

        for (add, item) in ops {
            if add {
                bag.add(item);
                *model.entry(item).or_default() += 1;
            } else {
                match model.get_mut(&item) {
                    Some(count) => {
                        prop_assert!(bag.remove(&item).is_ok());
                        *count -= 1;
                        if *count == 0 {
                            model.remove(&item);
                        }
                    }
                    None => prop_assert!(bag.remove(&item).is_err()),
                }
            }

            prop_assert_eq!(bag.len(), model.values().sum::<usize>());
            prop_assert_eq!(bag.distinct_items().len(), model.len());
            prop_assert_eq!(bag.count(&item), model.get(&item).copied().unwrap_or(0));
        }
    }
}
