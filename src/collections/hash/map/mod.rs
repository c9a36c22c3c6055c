//! A module containing [`HashMap`] and associated types.
//!
//! Other than the map and its configuration, the included types are for hashing keys and for
//! iteration, providing owned and borrowed iteration over pairs, keys or values in a map.
//!
//! As a note, mutable iteration only ever hands out shared references to keys, because mutating
//! the keys of a HashMap in place would leave them in the wrong bucket.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod hash_map;
mod hasher;
mod iter;
mod tests;

pub use hash_map::*;
pub use hasher::*;
pub use iter::*;
