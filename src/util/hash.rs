#![cfg(test)]

use crate::collections::hash::KeyHasher;

/// Sends every key to the same hash, forcing all entries into one bucket chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollidingHasher;

impl<K: ?Sized> KeyHasher<K> for CollidingHasher {
    fn hash_key(&self, _key: &K) -> u64 {
        0
    }
}

/// Uses the key itself as its hash, making bucket placement predictable.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityHasher;

impl KeyHasher<u64> for IdentityHasher {
    fn hash_key(&self, key: &u64) -> u64 {
        *key
    }
}
