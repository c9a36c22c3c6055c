use std::iter::FusedIterator;

use super::RingQueue;

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            slots: self.slots.as_slice(),
            pos: self.front,
            remaining: self.len(),
        }
    }
}

/// A borrowing iterator over a [`RingQueue`], from front to rear.
#[derive(Debug)]
pub struct Iter<'a, T> {
    pub(crate) slots: &'a [Option<T>],
    pub(crate) pos: usize,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.slots.get(self.pos)?.as_ref();
        self.pos = (self.pos + 1) % self.slots.len();
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
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
