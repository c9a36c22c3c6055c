use std::iter::FusedIterator;

use slotmap::SecondaryMap;

use super::{Arena, LinkedList, NodeKey};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

pub struct IntoIter<T> {
    // The list already knows how to hand out its ends, so the iterator just holds it.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop().ok()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            nodes: &self.nodes,
            front: self.head_key(),
            back: self.tail_key(),
            remaining: self.len(),
        }
    }
}

/// A borrowing iterator over a [`LinkedList`], following `next` links from the front and `prev`
/// links from the back.
pub struct Iter<'a, T> {
    pub(crate) nodes: &'a Arena<T>,
    pub(crate) front: Option<NodeKey>,
    pub(crate) back: Option<NodeKey>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let front = self.head_key();
        let back = self.tail_key();
        let remaining = self.len();

        // Split every node into its value borrow and its links up front, so that following the
        // links never needs the arena again.
        let mut links = SecondaryMap::with_capacity(remaining);
        for (key, node) in self.nodes.iter_mut() {
            links.insert(key, MutLink {
                value: &mut node.value,
                prev: node.prev,
                next: node.next,
            });
        }

        IterMut {
            links,
            front,
            back,
            remaining,
        }
    }
}

pub(crate) struct MutLink<'a, T> {
    value: &'a mut T,
    prev: Option<NodeKey>,
    next: Option<NodeKey>,
}

/// A mutably borrowing iterator over a [`LinkedList`].
pub struct IterMut<'a, T> {
    pub(crate) links: SecondaryMap<NodeKey, MutLink<'a, T>>,
    pub(crate) front: Option<NodeKey>,
    pub(crate) back: Option<NodeKey>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.links.remove(self.front?)?;
        self.front = link.next;
        self.remaining -= 1;
        Some(link.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.links.remove(self.back?)?;
        self.back = link.prev;
        self.remaining -= 1;
        Some(link.value)
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}
