//! A module containing [`DynamicArray`] and its owned iterator. Borrowed iteration is provided by
//! the slice that a DynamicArray dereferences to.

mod dynamic_array;
mod iter;

pub use dynamic_array::*;
pub use iter::*;
