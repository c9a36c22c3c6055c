use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::Index;

use super::{
    DigestHasher, IntoKeys, IntoValues, Iter, IterMut, KeyHasher, Keys, Values, ValuesMut,
};
use crate::collections::contiguous::DynamicArray;
use crate::collections::linked::LinkedList;
use crate::util::error::{InvalidArgument, KeyNotFound, Throw};
use crate::util::fmt::{Pair, write_joined};

/// The number of buckets a map starts with unless configured otherwise.
pub const DEFAULT_BUCKETS: usize = 7;
/// The ratio of pairs to buckets that a map may reach before it grows, unless configured
/// otherwise.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Construction parameters for a [`HashMap`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HashMapConfig {
    /// The initial number of buckets. Must be at least one.
    pub buckets: usize,
    /// The highest ratio of pairs to buckets allowed before the map grows. Must be finite and
    /// positive.
    pub load_factor: f64,
}

impl HashMapConfig {
    /// Checks that the configuration describes a usable map.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if there are no buckets or the load factor isn't a finite,
    /// positive number.
    pub fn validate(self) -> Result<HashMapConfig, InvalidArgument> {
        if self.buckets == 0 {
            return Err(InvalidArgument {
                reason: "a hash map needs at least one bucket",
            });
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(InvalidArgument {
                reason: "a hash map's load factor must be finite and positive",
            });
        }
        Ok(self)
    }
}

impl Default for HashMapConfig {
    fn default() -> Self {
        HashMapConfig {
            buckets: DEFAULT_BUCKETS,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

pub(crate) type Bucket<K, V> = LinkedList<(K, V)>;

/// A map of keys to values which resolves collisions by chaining. Each bucket is a
/// [`LinkedList`] of pairs and the buckets themselves are held in a
/// [`DynamicArray`].
///
/// Keys only need to be comparable with [`Eq`]. They are hashed by `H`, a [`KeyHasher`], which
/// defaults to [`DigestHasher`] and can be replaced with any `Fn(&K) -> u64`.
///
/// Once the number of pairs exceeds the bucket count multiplied by the load factor, the map grows
/// before the insertion returns. The new bucket count is the first prime among the odd numbers
/// following twice the old count plus one, and every pair is moved to its new bucket.
///
/// Iteration walks the buckets in order and each chain from front to back. That order depends on
/// the hashes and the bucket count, so it changes when the map grows and shouldn't be relied upon.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of pairs in the HashMap.
/// - `c`: The length of the chain a key hashes to.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get/contains` | `O(c)` |
/// | `set` | `O(c)`, `O(n)` when growing |
/// | `delete` | `O(c)` |
/// | `clear` | `O(n)` |
///
/// With a reasonable hash, `c` is expected to stay below the load factor, making the operations
/// `O(1)` on average and `set` amortized `O(1)`.
pub struct HashMap<K, V, H = DigestHasher> {
    pub(crate) buckets: DynamicArray<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) max_load_factor: f64,
    pub(crate) hasher: H,
}

impl<K, V> HashMap<K, V> {
    /// Creates an empty HashMap with the default configuration and [`DigestHasher`].
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::hash::HashMap;
    /// let mut map = HashMap::new();
    /// map.set("one", 1);
    /// assert_eq!(map.get(&"one"), Ok(&1));
    /// assert_eq!(map.bucket_count(), 7);
    /// ```
    pub fn new() -> HashMap<K, V> {
        HashMap::with_hasher(DigestHasher)
    }

    /// Creates an empty HashMap from `config`, using [`DigestHasher`].
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `config` is invalid, see [`HashMapConfig::validate`].
    pub fn with_config(config: HashMapConfig) -> Result<HashMap<K, V>, InvalidArgument> {
        HashMap::with_config_and_hasher(config, DigestHasher)
    }
}

impl<K, V, H> HashMap<K, V, H> {
    /// Creates an empty HashMap with the default configuration that hashes keys with `hasher`.
    pub fn with_hasher(hasher: H) -> HashMap<K, V, H> {
        HashMap {
            buckets: empty_buckets(DEFAULT_BUCKETS),
            len: 0,
            max_load_factor: DEFAULT_LOAD_FACTOR,
            hasher,
        }
    }

    /// Creates an empty HashMap from `config` that hashes keys with `hasher`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `config` is invalid, see [`HashMapConfig::validate`].
    pub fn with_config_and_hasher(
        config: HashMapConfig,
        hasher: H,
    ) -> Result<HashMap<K, V, H>, InvalidArgument> {
        let config = config.validate()?;
        Ok(HashMap {
            buckets: empty_buckets(config.buckets),
            len: 0,
            max_load_factor: config.load_factor,
            hasher,
        })
    }

    /// Returns the number of pairs in the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no pairs.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets.
    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current ratio of pairs to buckets.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.bucket_count() as f64
    }

    /// Returns the ratio of pairs to buckets that the map may reach before it grows.
    pub const fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Returns a reference to the hasher used for keys.
    pub const fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Drops every pair. The bucket count is kept.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over all pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all pairs in the HashMap. Keys are provided as references while
    /// values are mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Alias of [`HashMap::iter`].
    pub fn items(&self) -> Iter<'_, K, V> {
        self.iter()
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Consumes the HashMap, returning an iterator over its keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Consumes the HashMap, returning an iterator over its values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }
}

impl<K: Eq, V, H: KeyHasher<K>> HashMap<K, V, H> {
    /// Returns a reference to the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the map has no pair for `key`.
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        self.buckets.as_slice()[self.bucket_index(key)]
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the map has no pair for `key`.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound> {
        let index = self.bucket_index(key);
        self.buckets.as_mut_slice()[index]
            .find_mut(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or(KeyNotFound)
    }

    /// Associates `value` with `key`, returning the value it replaced, if any. Adding a new key may
    /// grow the map, which rehashes every pair before returning.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::hash::HashMap;
    /// let mut map = HashMap::new();
    /// assert_eq!(map.set('k', 1), None);
    /// assert_eq!(map.set('k', 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets.as_mut_slice()[index];

        if let Some((_, existing)) = bucket.find_mut(|(k, _)| *k == key) {
            return Some(mem::replace(existing, value));
        }

        bucket.append((key, value));
        self.len += 1;

        if self.len as f64 > self.bucket_count() as f64 * self.max_load_factor {
            self.rehash(next_bucket_count(self.bucket_count()));
        }
        None
    }

    /// Removes the pair for `key`, returning its value.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the map has no pair for `key`.
    pub fn delete(&mut self, key: &K) -> Result<V, KeyNotFound> {
        let index = self.bucket_index(key);
        let (_, value) = self.buckets.as_mut_slice()[index]
            .remove_first_where(|(k, _)| k == key)
            .ok_or(KeyNotFound)?;

        self.len -= 1;
        Ok(value)
    }

    /// Returns true if the map has a pair for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }

    pub(crate) fn bucket_index(&self, key: &K) -> usize {
        // The bucket count is at least one and the result is below it, so both casts are lossless.
        (self.hasher.hash_key(key) % self.bucket_count() as u64) as usize
    }

    /// Replaces the buckets with `count` empty ones and moves every pair into its new bucket.
    pub(crate) fn rehash(&mut self, count: usize) {
        let old = mem::replace(&mut self.buckets, empty_buckets(count));

        for (key, value) in old.into_iter().flatten() {
            let index = self.bucket_index(&key);
            self.buckets.as_mut_slice()[index].append((key, value));
        }
    }
}

fn empty_buckets<K, V>(count: usize) -> DynamicArray<Bucket<K, V>> {
    DynamicArray::repeat_with(count, LinkedList::new)
}

/// Returns the bucket count a map grows to from `count`: the first prime among the odd numbers
/// after `2 * count + 1`.
pub(crate) fn next_bucket_count(count: usize) -> usize {
    let mut size = count * 2 + 1;
    loop {
        size += 2;
        if is_prime(size) {
            return size;
        }
    }
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

impl<K: Eq, V, H: KeyHasher<K>> Index<&K> for HashMap<K, V, H> {
    type Output = V;

    /// # Panics
    /// Panics if the map has no pair for `key`, see [`HashMap::get`].
    fn index(&self, key: &K) -> &Self::Output {
        self.get(key).throw()
    }
}

impl<K: Eq, V, H: KeyHasher<K>> Extend<(K, V)> for HashMap<K, V, H> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Eq, V, H: KeyHasher<K> + Default> FromIterator<(K, V)> for HashMap<K, V, H> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::with_hasher(H::default());
        map.extend(iter);
        map
    }
}

impl<K, V, H: Default> Default for HashMap<K, V, H> {
    fn default() -> Self {
        HashMap::with_hasher(H::default())
    }
}

impl<K: Clone, V: Clone, H: Clone> Clone for HashMap<K, V, H> {
    fn clone(&self) -> Self {
        HashMap {
            buckets: self.buckets.clone(),
            len: self.len,
            max_load_factor: self.max_load_factor,
            hasher: self.hasher.clone(),
        }
    }
}

/// Maps are equal when they hold the same pairs. Bucket counts and chain order aren't compared.
impl<K: Eq, V: PartialEq, H: KeyHasher<K>> PartialEq for HashMap<K, V, H> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(key, value)| other.get(key) == Ok(value))
    }
}

impl<K: Eq, V: Eq, H: KeyHasher<K>> Eq for HashMap<K, V, H> {}

impl<K: Debug, V: Debug, H> Debug for HashMap<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "HashMap(")?;
        f.debug_map().entries(self.iter()).finish()?;
        write!(f, ") Buckets: {}", self.bucket_count())
    }
}

impl<K: Display, V: Display, H> Display for HashMap<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(
            f,
            "{",
            self.iter().map(|(key, value)| Pair(key, value)),
            ", ",
            "}",
        )
    }
}
