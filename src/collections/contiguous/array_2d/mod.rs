//! A module containing [`Array2D`], a fixed-shape grid laid out row-major over a
//! [`DynamicArray`](super::DynamicArray), and its borrowed [`Row`] views.

mod array_2d;
mod tests;

pub use array_2d::*;
