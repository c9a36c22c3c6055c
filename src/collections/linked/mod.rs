//! Linked collection types. Primarily revolves around [`LinkedList`].

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
