//! Hash-based collections.
//!
//! [`HashMap`] chains colliding pairs into per-bucket [`LinkedList`](crate::collections::linked::LinkedList)s
//! and hashes keys through the [`KeyHasher`] trait, so callers can supply their own hash function.

pub mod map;

#[doc(inline)]
pub use map::{DigestHasher, HashMap, HashMapConfig, KeyHasher};
