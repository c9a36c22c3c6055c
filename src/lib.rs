//! A small library of generic containers, written from the ground up rather than wrapping the
//! standard library's collections.
//!
//! # Contents
//! - [`DynamicArray`](collections::contiguous::DynamicArray): a contiguous, growable array that
//!   accepts negative indices and returns memory as it empties.
//! - [`Array2D`](collections::contiguous::Array2D): a fixed-shape grid over a DynamicArray.
//! - [`LinkedList`](collections::linked::LinkedList): a doubly linked list whose nodes live in an
//!   arena and link to each other by key.
//! - [`Bag`](collections::bag::Bag): a multiset that counts repeated elements.
//! - [`RingQueue`](collections::queue::RingQueue): a fixed-size queue over a ring of slots.
//! - [`ArrayStack`](collections::stack::ArrayStack) and [`ListStack`](collections::stack::ListStack):
//!   last-in first-out adapters over the array and the list.
//! - [`HashMap`](collections::hash::HashMap): a chained hash table with a pluggable key hash.
//!
//! # Error Handling
//! Specifically for containers, it is more ergonomic for some operations to panic, because users
//! don't want to be forced to handle an error every time they index into an array. Those operations
//! are the [`Index`](std::ops::Index) implementations, and each one has a fallible counterpart.
//! Everything else reports failure through a [`Result`].
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed:
//! each method returns the one error struct that describes how it can fail, and every such struct
//! implements [`Error`](std::error::Error). [`ContainerError`](error::ContainerError) unions them
//! all for callers that would rather propagate a single type.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. `slotmap` provides the arena behind the linked list, while `serde`,
//! `bincode` and `sha2` produce the default, run-independent hash for map keys.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;
