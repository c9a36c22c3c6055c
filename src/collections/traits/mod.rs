//! Traits shared by collections that offer the same discipline over different storage.

mod stack;

pub use stack::*;
