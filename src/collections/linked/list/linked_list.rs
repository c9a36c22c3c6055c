use std::any::{self, Any};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use derive_more::IsVariant;

use super::{Arena, Iter, IterMut, Node, NodeKey};
use crate::util::error::{Empty, NotFound, TypeMismatch};
use crate::util::fmt::write_list;

/// A list with links in both directions.
///
/// Nodes live in an arena owned by the list and refer to their neighbours through stable keys
/// rather than pointers, so a link can never dangle or free a node twice. The previous link exists
/// purely for traversal from the back.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The position of the first item matching a search.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `append/prepend` | `O(1)` |
/// | `pop/pop_front` | `O(1)` |
/// | `insert_before/after` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `remove_all` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `reversed` | `O(n)` |
///
/// As a general note, the arena keeps nodes close together in memory, but a list is still a poor
/// choice for workloads that are mostly iteration. Prefer
/// [`DynamicArray`](crate::collections::contiguous::DynamicArray) unless the `O(1)` operations at
/// either end are being heavily utilized.
pub struct LinkedList<T> {
    pub(crate) nodes: Arena<T>,
    pub(crate) state: ListState,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListEnds),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListEnds {
    pub head: NodeKey,
    pub tail: NodeKey,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            nodes: Arena::with_key(),
            state: ListState::Empty,
        }
    }

    /// Creates a LinkedList from type-erased values, checking that every one of them is a `T`.
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] naming the position of the first value that isn't a `T`.
    pub fn try_from_any<I>(items: I) -> Result<LinkedList<T>, TypeMismatch>
    where
        T: 'static,
        I: IntoIterator<Item = Box<dyn Any>>,
    {
        let mut list = LinkedList::new();

        for (position, item) in items.into_iter().enumerate() {
            let value = item.downcast::<T>().map_err(|_| TypeMismatch {
                expected: any::type_name::<T>(),
                position,
            })?;
            list.append(*value);
        }

        Ok(list)
    }

    /// Returns the number of elements in the LinkedList.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list.
    ///
    /// # Errors
    /// Returns [`Empty`] if the list has no elements.
    pub fn front(&self) -> Result<&T, Empty> {
        match self.state {
            ListState::Empty => Err(Empty),
            ListState::Full(ListEnds { head, .. }) => self.value(head).ok_or(Empty),
        }
    }

    /// Returns a mutable reference to the first element in the list.
    ///
    /// # Errors
    /// Returns [`Empty`] if the list has no elements.
    pub fn front_mut(&mut self) -> Result<&mut T, Empty> {
        match self.state {
            ListState::Empty => Err(Empty),
            ListState::Full(ListEnds { head, .. }) => self.value_mut(head).ok_or(Empty),
        }
    }

    /// Returns a reference to the last element in the list.
    ///
    /// # Errors
    /// Returns [`Empty`] if the list has no elements.
    pub fn back(&self) -> Result<&T, Empty> {
        match self.state {
            ListState::Empty => Err(Empty),
            ListState::Full(ListEnds { tail, .. }) => self.value(tail).ok_or(Empty),
        }
    }

    /// Returns a mutable reference to the last element in the list.
    ///
    /// # Errors
    /// Returns [`Empty`] if the list has no elements.
    pub fn back_mut(&mut self) -> Result<&mut T, Empty> {
        match self.state {
            ListState::Empty => Err(Empty),
            ListState::Full(ListEnds { tail, .. }) => self.value_mut(tail).ok_or(Empty),
        }
    }

    /// Adds the provided element to the back of the LinkedList.
    pub fn append(&mut self, value: T) {
        match &mut self.state {
            ListState::Empty => {
                let key = self.nodes.insert(Node::detached(value));
                self.state = ListState::single(key);
            },
            ListState::Full(ends) => {
                let key = self.nodes.insert(Node {
                    value,
                    prev: Some(ends.tail),
                    next: None,
                });
                self.nodes[ends.tail].next = Some(key);
                ends.tail = key;
            },
        }
    }

    /// Adds the provided element to the front of the LinkedList.
    pub fn prepend(&mut self, value: T) {
        match &mut self.state {
            ListState::Empty => {
                let key = self.nodes.insert(Node::detached(value));
                self.state = ListState::single(key);
            },
            ListState::Full(ends) => {
                let key = self.nodes.insert(Node {
                    value,
                    prev: None,
                    next: Some(ends.head),
                });
                self.nodes[ends.head].prev = Some(key);
                ends.head = key;
            },
        }
    }

    /// Removes the last element from the list and returns it.
    ///
    /// # Errors
    /// Returns [`Empty`] if the list has no elements.
    pub fn pop(&mut self) -> Result<T, Empty> {
        match self.state {
            ListState::Empty => Err(Empty),
            ListState::Full(ListEnds { tail, .. }) => self.unlink(tail).ok_or(Empty),
        }
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Errors
    /// Returns [`Empty`] if the list has no elements.
    pub fn pop_front(&mut self) -> Result<T, Empty> {
        match self.state {
            ListState::Empty => Err(Empty),
            ListState::Full(ListEnds { head, .. }) => self.unlink(head).ok_or(Empty),
        }
    }

    /// Returns a reference to the first element that satisfies `predicate`, searching from the
    /// front.
    pub fn find<P: FnMut(&T) -> bool>(&self, predicate: P) -> Option<&T> {
        let key = self.find_key(predicate)?;
        self.value(key)
    }

    /// Returns a mutable reference to the first element that satisfies `predicate`, searching from
    /// the front.
    pub fn find_mut<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> Option<&mut T> {
        let key = self.find_key(predicate)?;
        self.value_mut(key)
    }

    /// Removes and returns the first element that satisfies `predicate`.
    pub fn remove_first_where<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> Option<T> {
        let key = self.find_key(predicate)?;
        self.unlink(key)
    }

    /// Removes every element that satisfies `predicate` in a single pass, returning how many were
    /// removed.
    pub fn remove_where<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> usize {
        let mut removed = 0;
        let mut cursor = self.head_key();

        while let Some(key) = cursor {
            let Some(node) = self.nodes.get(key) else { break };
            // Step past the node before it is unlinked.
            cursor = node.next;

            if predicate(&node.value) && self.unlink(key).is_some() {
                removed += 1;
            }
        }

        removed
    }

    /// Drops every element, leaving the list empty.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.state = ListState::Empty;
    }

    /// Returns a new list holding clones of this list's elements, from back to front.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::linked::LinkedList;
    /// let list = LinkedList::from_iter([1, 2, 3]);
    /// let reversed = list.reversed();
    /// assert_eq!(reversed.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// assert_eq!(reversed.reversed(), list);
    /// ```
    pub fn reversed(&self) -> LinkedList<T>
    where
        T: Clone,
    {
        let mut list = LinkedList::new();
        let mut cursor = self.tail_key();

        while let Some(node) = cursor.and_then(|key| self.nodes.get(key)) {
            list.append(node.value.clone());
            cursor = node.prev;
        }

        list
    }

    /// Returns a forward iterator over references to the elements. Each call starts again from the
    /// front.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a forward iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Inserts `value` directly before the first element equal to `target`.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no element equals `target`.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::linked::LinkedList;
    /// let mut list = LinkedList::from_iter(['a', 'c']);
    /// list.insert_before(&'c', 'b').unwrap();
    /// assert!(list.insert_before(&'z', 'y').is_err());
    /// assert_eq!(list.to_string(), "[a, b, c]");
    /// ```
    pub fn insert_before(&mut self, target: &T, value: T) -> Result<(), NotFound> {
        let key = self.find_key(|v| v == target).ok_or(NotFound)?;
        self.link_before(key, value);
        Ok(())
    }

    /// Inserts `value` directly after the first element equal to `target`.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no element equals `target`.
    pub fn insert_after(&mut self, target: &T, value: T) -> Result<(), NotFound> {
        let key = self.find_key(|v| v == target).ok_or(NotFound)?;
        self.link_after(key, value);
        Ok(())
    }

    /// Removes the first element equal to `item` and returns it.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no element equals `item`.
    pub fn remove(&mut self, item: &T) -> Result<T, NotFound> {
        self.remove_first_where(|v| v == item).ok_or(NotFound)
    }

    /// Removes every element equal to `item`, returning how many were removed.
    pub fn remove_all(&mut self, item: &T) -> usize {
        self.remove_where(|v| v == item)
    }

    /// Returns true if any element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.find_key(|v| v == item).is_some()
    }
}

impl<T> LinkedList<T> {
    pub(crate) const fn head_key(&self) -> Option<NodeKey> {
        match self.state {
            ListState::Empty => None,
            ListState::Full(ListEnds { head, .. }) => Some(head),
        }
    }

    pub(crate) const fn tail_key(&self) -> Option<NodeKey> {
        match self.state {
            ListState::Empty => None,
            ListState::Full(ListEnds { tail, .. }) => Some(tail),
        }
    }

    pub(crate) fn value(&self, key: NodeKey) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.value)
    }

    pub(crate) fn value_mut(&mut self, key: NodeKey) -> Option<&mut T> {
        self.nodes.get_mut(key).map(|node| &mut node.value)
    }

    /// Walks forward from the head and returns the key of the first node whose value satisfies
    /// `predicate`.
    pub(crate) fn find_key<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Option<NodeKey> {
        let mut cursor = self.head_key();

        while let Some(key) = cursor {
            let node = self.nodes.get(key)?;
            if predicate(&node.value) {
                return Some(key);
            }
            cursor = node.next;
        }

        None
    }

    /// Splices a new node holding `value` in front of the node at `key`.
    pub(crate) fn link_before(&mut self, key: NodeKey, value: T) {
        let Some(prev) = self.nodes.get(key).map(|node| node.prev) else { return };

        let new = self.nodes.insert(Node {
            value,
            prev,
            next: Some(key),
        });
        self.nodes[key].prev = Some(new);

        match prev {
            Some(prev) => self.nodes[prev].next = Some(new),
            None => self.state.set_head(new),
        }
    }

    /// Splices a new node holding `value` behind the node at `key`.
    pub(crate) fn link_after(&mut self, key: NodeKey, value: T) {
        let Some(next) = self.nodes.get(key).map(|node| node.next) else { return };

        let new = self.nodes.insert(Node {
            value,
            prev: Some(key),
            next,
        });
        self.nodes[key].next = Some(new);

        match next {
            Some(next) => self.nodes[next].prev = Some(new),
            None => self.state.set_tail(new),
        }
    }

    /// Detaches the node at `key` from the chain, re-linking its neighbours, and returns its value.
    /// Returns None if `key` doesn't refer to a node of this list.
    pub(crate) fn unlink(&mut self, key: NodeKey) -> Option<T> {
        let node = self.nodes.remove(key)?;

        match (node.prev, node.next) {
            (None, None) => self.state = ListState::Empty,
            (None, Some(next)) => {
                self.nodes[next].prev = None;
                self.state.set_head(next);
            },
            (Some(prev), None) => {
                self.nodes[prev].next = None;
                self.state.set_tail(prev);
            },
            (Some(prev), Some(next)) => {
                self.nodes[prev].next = Some(next);
                self.nodes[next].prev = Some(prev);
            },
        }

        Some(node.value)
    }

    /// Asserts the structural invariants of the chain: the head has no predecessor, every node's
    /// successor points back to it, the walk ends at the tail and visits every node exactly once.
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            ListState::Empty => assert!(self.nodes.is_empty()),
            ListState::Full(ListEnds { head, tail }) => {
                assert!(self.nodes[head].prev.is_none());
                let mut curr = head;
                let mut visited = 1;
                while let Some(next) = self.nodes[curr].next {
                    assert!(self.nodes[next].prev.unwrap() == curr);
                    curr = next;
                    visited += 1;
                }
                assert!(tail == curr);
                assert_eq!(visited, self.nodes.len());
            },
        }
    }
}

impl ListState {
    pub const fn single(key: NodeKey) -> ListState {
        ListState::Full(ListEnds {
            head: key,
            tail: key,
        })
    }

    pub fn set_head(&mut self, key: NodeKey) {
        if let ListState::Full(ends) = self {
            ends.head = key;
        }
    }

    pub fn set_tail(&mut self, key: NodeKey) {
        if let ListState::Full(ends) = self {
            ends.tail = key;
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "LinkedList(")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ") Count: {}", self.len())
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}
