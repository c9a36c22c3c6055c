use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;
use std::num::NonZeroUsize;

use crate::util::error::{InvalidArgument, NotFound};
use crate::util::fmt::{Pair, write_joined};

/// An unordered collection that remembers how many times each distinct element was added.
///
/// A Bag never stores a count of zero: removing the last occurrence of an element forgets the
/// element entirely. Its length is the total number of occurrences, not the number of distinct
/// elements.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `count/contains` | `O(1)`* |
/// | `len` | `O(1)` |
/// | `distinct_items` | `O(1)` to create, `O(d)` to exhaust |
///
/// \* Expected, based on the standard library's map.
pub struct Bag<T> {
    pub(crate) counts: HashMap<T, NonZeroUsize>,
    pub(crate) len: usize,
}

impl<T: Hash + Eq> Bag<T> {
    /// Creates a new empty Bag.
    pub fn new() -> Bag<T> {
        Bag {
            counts: HashMap::new(),
            len: 0,
        }
    }

    /// Creates a Bag from possibly missing values.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if any of the provided values is [`None`].
    pub fn try_from_options<I>(items: I) -> Result<Bag<T>, InvalidArgument>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut bag = Bag::new();
        for item in items {
            bag.try_add(item)?;
        }
        Ok(bag)
    }

    /// Adds one occurrence of `item`.
    pub fn add(&mut self, item: T) {
        self.counts
            .entry(item)
            .and_modify(|count| *count = count.saturating_add(1))
            .or_insert(NonZeroUsize::MIN);
        self.len += 1;
    }

    /// Adds one occurrence of `item`, treating [`None`] as an absent value that a Bag can't hold.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `item` is [`None`].
    pub fn try_add(&mut self, item: Option<T>) -> Result<(), InvalidArgument> {
        let item = item.ok_or(InvalidArgument {
            reason: "a bag can't hold an absent value",
        })?;
        self.add(item);
        Ok(())
    }

    /// Removes one occurrence of `item`, forgetting it completely once its count reaches zero.
    ///
    /// # Errors
    /// Returns [`NotFound`] if the Bag doesn't contain `item`.
    pub fn remove(&mut self, item: &T) -> Result<(), NotFound> {
        let Some((key, count)) = self.counts.remove_entry(item) else {
            return Err(NotFound);
        };

        if let Some(remaining) = NonZeroUsize::new(count.get() - 1) {
            self.counts.insert(key, remaining);
        }
        self.len -= 1;
        Ok(())
    }

    /// Returns how many times `item` occurs in the Bag, which is zero for absent items.
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).map_or(0, |count| count.get())
    }

    /// Returns true if `item` occurs at least once.
    pub fn contains(&self, item: &T) -> bool {
        self.counts.contains_key(item)
    }

    /// Returns an iterator over each distinct element in the Bag, in no particular order.
    pub fn distinct_items(&self) -> impl ExactSizeIterator<Item = &T> + Clone + '_ {
        self.counts.keys()
    }

    /// Returns an iterator over each distinct element and its number of occurrences.
    pub fn counts(&self) -> impl ExactSizeIterator<Item = (&T, usize)> + Clone + '_ {
        self.counts.iter().map(|(item, count)| (item, count.get()))
    }
}

impl<T> Bag<T> {
    /// Returns the total number of occurrences held, counting repeats.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Bag holds nothing.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forgets every element.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.len = 0;
    }
}

impl<T: Hash + Eq> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Bag::new();
        bag.extend(iter);
        bag
    }
}

impl<T: Hash + Eq> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Hash + Eq> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> Clone for Bag<T> {
    fn clone(&self) -> Self {
        Bag {
            counts: self.counts.clone(),
            len: self.len,
        }
    }
}

impl<T: Hash + Eq> PartialEq for Bag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.counts == other.counts
    }
}

impl<T: Hash + Eq> Eq for Bag<T> {}

impl<T: Debug> Debug for Bag<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bag")
            .field("counts", &self.counts)
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for Bag<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(
            f,
            "{",
            self.counts.iter().map(|(item, count)| Pair(item, count)),
            ", ",
            "}",
        )
    }
}

