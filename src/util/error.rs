//! Error types shared by every container in the crate.
//!
//! Each kind of failure is its own type, so that a method's signature states exactly what can go
//! wrong. [`ContainerError`] unions all of them for callers that juggle several containers.

use std::error::Error as StdError;

use derive_more::{Display, Error, From, IsVariant};

/// A value didn't satisfy the element type a container was declared with. Only produced where
/// type-erased input enters a container, e.g. [`DynamicArray::try_from_any`].
///
/// [`DynamicArray::try_from_any`]: crate::collections::contiguous::DynamicArray::try_from_any
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("element {position} is not a {expected}")]
pub struct TypeMismatch {
    /// The name of the type the container holds.
    pub expected: &'static str,
    /// The position of the offending element in the provided input.
    pub position: usize,
}

/// A signed index fell outside of the valid range for a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of range for collection with {len} elements")]
pub struct IndexOutOfRange {
    /// The index as provided by the caller.
    pub index: isize,
    /// The length of the collection at the time of the access.
    pub len: usize,
}

/// A value targeted by a search, removal or positional insertion isn't present.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("value not found")]
pub struct NotFound;

/// A key isn't present in a map.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("key not found")]
pub struct KeyNotFound;

/// The operation requires at least one element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("container is empty")]
pub struct Empty;

/// A capacity-bounded container can't accept another element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("container is full ({max_size} elements)")]
pub struct Full {
    /// The fixed maximum number of elements.
    pub max_size: usize,
}

/// A disallowed value or malformed constructor input.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid argument: {reason}")]
pub struct InvalidArgument {
    /// What was wrong with the argument.
    pub reason: &'static str,
}

/// Any error produced by a container in this crate.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// See [`TypeMismatch`].
    TypeMismatch(TypeMismatch),
    /// See [`IndexOutOfRange`].
    IndexOutOfRange(IndexOutOfRange),
    /// See [`NotFound`].
    NotFound(NotFound),
    /// See [`KeyNotFound`].
    KeyNotFound(KeyNotFound),
    /// See [`Empty`].
    Empty(Empty),
    /// See [`Full`].
    Full(Full),
    /// See [`InvalidArgument`].
    InvalidArgument(InvalidArgument),
}

/// Panicking access for the operator impls, which can't return a [`Result`]. The panic message is
/// the error's own [`Display`](std::fmt::Display) output, so `arr[9]` reports the same
/// [`IndexOutOfRange`] text that `arr.get(9)` would have returned.
pub(crate) trait Throw<T> {
    /// # Panics
    /// Panics with the error's message if `self` is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: StdError> Throw<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
