//! Various general-purpose collection types.
//!
//! # Purpose
//! The leaf collections, [`DynamicArray`](contiguous::DynamicArray) and
//! [`LinkedList`](linked::LinkedList), manage their own storage. Everything else is built on top
//! of them: [`RingQueue`](queue::RingQueue) and [`ArrayStack`](stack::ArrayStack) wrap an array,
//! [`ListStack`](stack::ListStack) wraps a list and [`HashMap`](hash::HashMap) chains its buckets
//! with lists held in an array. [`Bag`](bag::Bag) stands alone over the standard library's map.
//!
//! # Method
//! [`DynamicArray`](contiguous::DynamicArray) implements [`Deref<Target = [T]>`](std::ops::Deref)
//! (and DerefMut), so slice methods such as sorting and searching don't need to be rewritten for
//! it, or for the types that store their elements in one.

pub mod bag;
pub mod contiguous;
pub mod hash;
pub mod linked;
pub mod queue;
pub mod stack;
pub mod traits;
