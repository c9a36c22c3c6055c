use std::fmt::{self, Debug, Display, Formatter};
use std::iter::Rev;
use std::slice;

use crate::collections::contiguous::DynamicArray;
use crate::collections::traits::Stack;
use crate::util::error::{Empty, Full};
use crate::util::fmt::write_list;

/// A stack holding at most a fixed number of elements, stored contiguously in a [`DynamicArray`].
/// The top of the stack is the back of the array.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`* |
/// | `pop` | `O(1)`* |
/// | `peek` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized, the backing array resizes as it fills and drains.
pub struct ArrayStack<T> {
    pub(crate) arr: DynamicArray<T>,
    pub(crate) max_size: usize,
}

impl<T> ArrayStack<T> {
    /// Creates an empty ArrayStack that refuses pushes beyond `max_size` elements.
    pub fn new(max_size: usize) -> ArrayStack<T> {
        ArrayStack {
            arr: DynamicArray::new(),
            max_size,
        }
    }

    /// Places `item` on top of the stack.
    ///
    /// # Errors
    /// Returns [`Full`] if the stack already holds `max_size` elements.
    pub fn push(&mut self, item: T) -> Result<(), Full> {
        if self.is_full() {
            return Err(Full {
                max_size: self.max_size,
            });
        }
        self.arr.append(item);
        Ok(())
    }

    /// Removes the top element and returns it.
    ///
    /// # Errors
    /// Returns [`Empty`] if the stack holds no elements.
    pub fn pop(&mut self) -> Result<T, Empty> {
        self.arr.pop()
    }

    /// Returns a reference to the top element.
    ///
    /// # Errors
    /// Returns [`Empty`] if the stack holds no elements.
    pub fn peek(&self) -> Result<&T, Empty> {
        self.arr.last().ok_or(Empty)
    }

    pub const fn len(&self) -> usize {
        self.arr.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    pub const fn is_full(&self) -> bool {
        self.arr.len() >= self.max_size
    }

    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn clear(&mut self) {
        self.arr.clear();
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.arr.contains(item)
    }

    /// Returns an iterator over the elements from the top of the stack to the bottom.
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.arr.iter().rev()
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    type PushError = Full;

    fn push(&mut self, item: T) -> Result<(), Full> {
        ArrayStack::push(self, item)
    }

    fn pop(&mut self) -> Result<T, Empty> {
        ArrayStack::pop(self)
    }

    fn peek(&self) -> Result<&T, Empty> {
        ArrayStack::peek(self)
    }

    fn len(&self) -> usize {
        ArrayStack::len(self)
    }

    fn clear(&mut self) {
        ArrayStack::clear(self)
    }
}

impl<'a, T> IntoIterator for &'a ArrayStack<T> {
    type Item = &'a T;

    type IntoIter = Rev<slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for ArrayStack<T> {
    fn clone(&self) -> Self {
        ArrayStack {
            arr: self.arr.clone(),
            max_size: self.max_size,
        }
    }
}

/// Stacks are equal when they would pop the same elements in the same order. The maximum size
/// isn't compared.
impl<T: PartialEq> PartialEq for ArrayStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.arr == other.arr
    }
}

impl<T: Eq> Eq for ArrayStack<T> {}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayStack({}): items: ", self.max_size)?;
        f.debug_list().entries(self.arr.iter()).finish()
    }
}

/// Renders the elements from the bottom of the stack to the top.
impl<T: Display> Display for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.arr.iter())
    }
}
