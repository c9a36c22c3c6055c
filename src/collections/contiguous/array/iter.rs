use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};

use super::DynamicArray;

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Take the buffer and zero len so that dropping self afterwards is a no-op.
        let end = mem::replace(&mut self.len, 0);
        IntoIter {
            buf: mem::replace(&mut self.buf, Box::new_uninit_slice(0)),
            start: 0,
            end,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

/// An owned iterator over the elements of a [`DynamicArray`]. See [`DynamicArray::into_iter`].
pub struct IntoIter<T> {
    // Slots in start..end are initialized and still owned by the iterator.
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, so the slot is initialized. Advancing start gives up ownership of
        // it, so the value is moved out exactly once.
        let value = unsafe { self.buf[self.start].assume_init_read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: The slot at the newly decremented end is initialized and no longer in range.
        Some(unsafe { self.buf[self.end].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[self.start..self.end] {
            // SAFETY: Slots between start and end haven't been yielded, so they are initialized
            // and owned by the iterator.
            unsafe { slot.assume_init_drop(); }
        }
    }
}
