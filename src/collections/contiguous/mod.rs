//! Contiguous collection types: [`DynamicArray`] and the [`Array2D`] grid built on it.

pub mod array;
pub mod array_2d;

#[doc(inline)]
pub use array::DynamicArray;
#[doc(inline)]
pub use array_2d::Array2D;
