#![cfg(test)]

use std::collections::{BTreeMap, BTreeSet};

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use super::*;
use super::hash_map::next_bucket_count;
use crate::util::error::{InvalidArgument, KeyNotFound};
use crate::util::hash::{CollidingHasher, IdentityHasher};
use crate::util::panic::assert_panics;

#[test]
fn test_growth_on_threshold() {
    let mut map = HashMap::new();
    assert_eq!(map.bucket_count(), 7);
    assert_eq!(map.max_load_factor(), 0.75);

    for i in 0..5 {
        map.set(format!("key{i}"), i);
    }
    assert_eq!(map.bucket_count(), 7, "5 pairs don't exceed 7 * 0.75 = 5.25.");

    map.set("key5".to_owned(), 5);
    assert_eq!(map.bucket_count(), 17, "The sixth pair should grow the map before returning.");

    for i in 0..6 {
        assert_eq!(map.get(&format!("key{i}")), Ok(&i), "Every pair must survive a rehash.");
    }
    assert_eq!(map.len(), 6);
}

#[test]
fn test_next_bucket_count() {
    assert_eq!(next_bucket_count(7), 17);
    assert_eq!(next_bucket_count(17), 37);
    assert_eq!(next_bucket_count(3), 11, "The first odd candidate is skipped.");
    assert_eq!(next_bucket_count(1), 5);
}

#[test]
fn test_associations_survive_growth() {
    let mut map = HashMap::with_hasher(IdentityHasher);
    let mut counts = Vec::new();

    for key in 0..200_u64 {
        map.set(key, key * 3);
        counts.push(map.bucket_count());
    }
    counts.dedup();
    assert_eq!(counts, [7, 17, 37, 79, 163, 331], "The map should have grown five times.");

    let mut keys = map.keys().copied().collect::<Vec<_>>();
    keys.sort_unstable();
    assert_eq!(keys, (0..200).collect::<Vec<_>>());
    assert!(map.iter().all(|(key, value)| *value == key * 3));
    assert!(map.load_factor() <= map.max_load_factor());
}

#[test]
fn test_set_replaces_existing() {
    let mut map = HashMap::new();

    assert_eq!(map.set("a", 1), None);
    assert_eq!(map.set("a", 2), Some(1), "Replacing should return the old value.");
    assert_eq!(map.len(), 1, "Replacing shouldn't change the pair count.");
    assert_eq!(map[&"a"], 2);

    *map.get_mut(&"a").unwrap() += 10;
    assert_eq!(map.get(&"a"), Ok(&12));
    assert_eq!(map.get_mut(&"b"), Err(KeyNotFound));
}

#[test]
fn test_delete() {
    let mut map: HashMap<_, _> = [(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();

    assert_eq!(map.delete(&2), Ok('b'));
    assert_eq!(map.get(&2), Err(KeyNotFound));
    assert_eq!(map.delete(&2), Err(KeyNotFound), "A deleted key can't be deleted again.");
    assert!(!map.contains(&2));
    assert!(map.contains(&1));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_full_collisions() {
    let mut map = HashMap::with_hasher(CollidingHasher);
    for i in 0..20 {
        map.set(i, i.to_string());
    }

    assert!(
        map.buckets.iter().filter(|bucket| !bucket.is_empty()).count() == 1,
        "Every pair should share a single chain."
    );
    assert_eq!(map.get(&13).map(String::as_str), Ok("13"));
    assert_eq!(map.delete(&10), Ok("10".to_owned()));
    assert_eq!(map.delete(&0), Ok("0".to_owned()));
    assert_eq!(map.delete(&19), Ok("19".to_owned()));
    assert_eq!(map.len(), 17);
    for i in (1..19).filter(|i| *i != 10) {
        assert!(map.contains(&i), "Removing from a chain must keep its other pairs reachable.");
    }
}

#[test]
fn test_bucket_placement() {
    let mut map = HashMap::with_hasher(IdentityHasher);
    map.set(3, "three");
    map.set(10, "ten");
    map.set(4, "four");

    let bucket = &map.buckets.as_slice()[3];
    assert_eq!(bucket.len(), 2, "3 and 10 collide modulo 7.");
    assert_eq!(bucket.front(), Ok(&(3, "three")), "Chains keep insertion order.");
    assert_eq!(
        map.keys().copied().collect::<Vec<_>>(),
        [3, 10, 4],
        "Iteration walks buckets in order, then each chain."
    );
}

#[test]
fn test_config() {
    let config = HashMapConfig {
        buckets: 2,
        load_factor: 1.5,
    };
    let mut map = HashMap::with_config_and_hasher(config, IdentityHasher).unwrap();
    for key in 0..3 {
        map.set(key, ());
    }
    assert_eq!(map.bucket_count(), 2);
    map.set(3, ());
    assert_eq!(map.bucket_count(), 7, "4 pairs exceed 2 * 1.5 buckets.");

    assert_eq!(HashMapConfig::default().buckets, DEFAULT_BUCKETS);
    for load_factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let config = HashMapConfig {
            buckets: 7,
            load_factor,
        };
        assert!(matches!(
            HashMap::<u8, u8>::with_config(config),
            Err(InvalidArgument { .. })
        ));
    }
    let config = HashMapConfig {
        buckets: 0,
        load_factor: 0.75,
    };
    assert!(HashMap::<u8, u8>::with_config(config).is_err());
}

#[test]
fn test_custom_hash_function() {
    let mut map = HashMap::with_hasher(|key: &String| key.len() as u64);
    map.set("ab".to_owned(), 1);
    map.set("cd".to_owned(), 2);

    assert_eq!(map.buckets.as_slice()[2].len(), 2, "Equal lengths share a bucket.");
    assert_eq!(map.get(&"cd".to_owned()), Ok(&2));
}

#[derive(Hash)]
struct Unencodable(u8);

impl Serialize for Unencodable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("not encodable"))
    }
}

impl std::fmt::Debug for Unencodable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unencodable({})", self.0)
    }
}

#[test]
fn test_digest_hasher() {
    let hasher = DigestHasher;

    assert_eq!(
        hasher.hash_key("key"),
        hasher.hash_key(&"key".to_owned()),
        "Equal encodings should give equal hashes."
    );
    assert_ne!(hasher.hash_key(&1_u32), hasher.hash_key(&2_u32));

    let expected = {
        let digest = Sha256::digest(bincode::serialize(&42_u64).unwrap());
        u64::from_be_bytes(digest[..8].try_into().unwrap())
    };
    assert_eq!(hasher.hash_key(&42_u64), expected);

    let fallback = {
        let digest = Sha256::digest(b"Unencodable(9)");
        u64::from_be_bytes(digest[..8].try_into().unwrap())
    };
    assert_eq!(
        hasher.hash_key(&Unencodable(9)),
        fallback,
        "Keys that fail to encode should be hashed through their Debug rendering."
    );
}

#[test]
fn test_equal_collection_keys_share_a_hash() {
    let forward: BTreeSet<u32> = (0..64).collect();
    let backward: BTreeSet<u32> = (0..64).rev().collect();
    assert_eq!(forward, backward);
    assert_eq!(
        DigestHasher.hash_key(&forward),
        DigestHasher.hash_key(&backward),
        "Keys that compare equal must encode to the same bytes regardless of insertion order."
    );

    let mut map = HashMap::new();
    map.set(forward, 1);
    assert_eq!(map.get(&backward), Ok(&1), "An equal key should find the stored pair.");
    assert_eq!(map.set(backward, 2), Some(1), "An equal key should replace, not duplicate.");
    assert_eq!(map.len(), 1);
}

#[test]
fn test_iterators() {
    let mut map: HashMap<_, _> = (0..10).map(|i| (i, i * i)).collect();

    for value in map.values_mut() {
        *value += 1;
    }
    for (_, value) in map.iter_mut() {
        *value *= 2;
    }

    let model: BTreeMap<_, _> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(model.len(), 10);
    assert!(model.iter().all(|(k, v)| *v == (k * k + 1) * 2));

    assert_eq!(map.keys().len(), 10);
    assert_eq!(map.values().sum::<i32>(), model.values().sum::<i32>());
    assert_eq!(map.items().count(), map.iter().count(), "Iteration is restartable.");

    let owned: BTreeMap<_, _> = map.clone().into_iter().collect();
    assert_eq!(owned, model);

    let mut keys = map.clone().into_keys().collect::<Vec<_>>();
    keys.sort_unstable();
    assert_eq!(keys, (0..10).collect::<Vec<_>>());
    assert_eq!(map.into_values().len(), 10);
}

#[test]
fn test_equality_ignores_layout() {
    let forward: HashMap<_, _> = (0..8).map(|i| (i, i)).collect();
    let mut backward = HashMap::with_config(HashMapConfig {
        buckets: 31,
        load_factor: 0.75,
    })
    .unwrap();
    backward.extend((0..8).rev().map(|i| (i, i)));

    assert_ne!(forward.bucket_count(), backward.bucket_count());
    assert_eq!(forward, backward, "Equal pairs make equal maps, whatever the layout.");

    backward.set(0, 100);
    assert_ne!(forward, backward);
    backward.delete(&0).unwrap();
    assert_ne!(forward, backward);
}

#[test]
fn test_clear() {
    let mut map: HashMap<_, _> = (0..10).map(|i| (i, ())).collect();
    let buckets = map.bucket_count();

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.iter().count(), 0);
    assert_eq!(map.bucket_count(), buckets, "clear keeps the bucket count.");
    assert_eq!(map.get(&3), Err(KeyNotFound));
}

#[test]
fn test_index_panics() {
    assert_panics!({
        let map: HashMap<u8, u8> = HashMap::new();
        map[&1]
    });
}

#[test]
fn test_formatting() {
    let mut map = HashMap::new();
    assert_eq!(map.to_string(), "{}");

    map.set("k", 1);
    assert_eq!(map.to_string(), "{k: 1}");
    assert_eq!(format!("{map:?}"), "HashMap({\"k\": 1}) Buckets: 7");
}
