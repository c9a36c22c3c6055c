use std::convert::Infallible;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::Rev;

use crate::collections::linked::{self, LinkedList};
use crate::collections::traits::Stack;
use crate::util::error::Empty;
use crate::util::fmt::write_joined;

/// An unbounded stack over a [`LinkedList`]. The top of the stack is the back of the list, so
/// every operation besides `contains` is `O(1)`.
pub struct ListStack<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> ListStack<T> {
    pub fn new() -> ListStack<T> {
        ListStack {
            list: LinkedList::new(),
        }
    }

    /// Places `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.list.append(item);
    }

    /// Removes the top element and returns it.
    ///
    /// # Errors
    /// Returns [`Empty`] if the stack holds no elements.
    pub fn pop(&mut self) -> Result<T, Empty> {
        self.list.pop()
    }

    /// Returns a reference to the top element.
    ///
    /// # Errors
    /// Returns [`Empty`] if the stack holds no elements.
    pub fn peek(&self) -> Result<&T, Empty> {
        self.list.back()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.contains(item)
    }

    /// Returns an iterator over the elements from the top of the stack to the bottom.
    pub fn iter(&self) -> Rev<linked::list::Iter<'_, T>> {
        self.list.iter().rev()
    }
}

impl<T> Stack<T> for ListStack<T> {
    type PushError = Infallible;

    fn push(&mut self, item: T) -> Result<(), Infallible> {
        ListStack::push(self, item);
        Ok(())
    }

    fn pop(&mut self) -> Result<T, Empty> {
        ListStack::pop(self)
    }

    fn peek(&self) -> Result<&T, Empty> {
        ListStack::peek(self)
    }

    fn len(&self) -> usize {
        ListStack::len(self)
    }

    fn clear(&mut self) {
        ListStack::clear(self)
    }
}

impl<'a, T> IntoIterator for &'a ListStack<T> {
    type Item = &'a T;

    type IntoIter = Rev<linked::list::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for ListStack<T> {
    /// Pushes each item in turn, so the last item yielded ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ListStack {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Default for ListStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ListStack<T> {
    fn clone(&self) -> Self {
        ListStack {
            list: self.list.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for ListStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for ListStack<T> {}

impl<T: Debug> Debug for ListStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ListStack: [")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{item:?}")?;
        }
        write!(f, "], Count: {}", self.len())
    }
}

/// Renders the elements from the top of the stack down, separated by spaces.
impl<T: Display> Display for ListStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, "", self.iter(), " ", "")
    }
}
