use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Reduces a key to the 64-bit hash a [`HashMap`](super::HashMap) uses to pick its bucket.
///
/// Equal keys must produce equal hashes. Any `Fn(&K) -> u64` closure or function implements this
/// trait, so a custom hash can be supplied without declaring a type:
/// ```
/// # use container_lib::collections::hash::HashMap;
/// let mut map = HashMap::with_hasher(|key: &u32| u64::from(*key));
/// map.set(7_u32, "seven");
/// assert_eq!(map.get(&7), Ok(&"seven"));
/// ```
pub trait KeyHasher<K: ?Sized> {
    fn hash_key(&self, key: &K) -> u64;
}

impl<K: ?Sized, F: Fn(&K) -> u64> KeyHasher<K> for F {
    fn hash_key(&self, key: &K) -> u64 {
        self(key)
    }
}

/// The default [`KeyHasher`]. It hashes the `bincode` encoding of a key with SHA-256 and keeps the
/// first 8 bytes of the digest, read big-endian.
///
/// The encoding has to be canonical: values that compare equal must serialize to the same bytes.
/// Keys are therefore required to implement [`Hash`], which rules out the standard library's
/// unordered collections, whose encoding follows each instance's iteration order. Keys whose
/// [`Serialize`] implementation refuses to encode are hashed through their [`Debug`] rendering
/// instead, and must likewise render equal values identically.
///
/// The result depends only on the key's value, so it is stable across runs and processes, unlike
/// the randomly seeded hashers of the standard library.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DigestHasher;

impl<K: Serialize + Debug + Hash + ?Sized> KeyHasher<K> for DigestHasher {
    fn hash_key(&self, key: &K) -> u64 {
        let mut digest = Sha256::new();

        match bincode::serialize(key) {
            Ok(bytes) => digest.update(&bytes),
            Err(_) => digest.update(format!("{key:?}").as_bytes()),
        }

        let output = digest.finalize();
        let mut head = [0_u8; 8];
        head.copy_from_slice(&output[..8]);
        u64::from_be_bytes(head)
    }
}
