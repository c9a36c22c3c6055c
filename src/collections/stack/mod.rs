//! A module containing the last-in first-out adapters [`ArrayStack`], bounded and backed by a
//! [`DynamicArray`](crate::collections::contiguous::DynamicArray), and [`ListStack`], unbounded and
//! backed by a [`LinkedList`](crate::collections::linked::LinkedList).

mod array_stack;
mod list_stack;

pub use array_stack::*;
pub use list_stack::*;
