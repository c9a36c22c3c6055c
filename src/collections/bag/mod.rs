//! A module containing [`Bag`], an unordered collection that counts repeated elements.

mod bag;
mod tests;

pub use bag::*;
