use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::collections::contiguous::DynamicArray;
use crate::util::error::{Empty, Full};
use crate::util::fmt::write_list;

/// A first-in first-out queue holding at most a fixed number of elements, stored in a ring over a
/// [`DynamicArray`].
///
/// The ring has one more slot than the queue's maximum size. That slot is never filled, so that a
/// full queue (`rear` directly behind `front`) can be told apart from an empty one (`rear ==
/// front`). Neither index ever moves elements, they only advance and wrap.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the RingQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)` |
/// | `dequeue` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `len` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `eq` | `O(n^2)` |
pub struct RingQueue<T> {
    pub(crate) slots: DynamicArray<Option<T>>,
    pub(crate) front: usize,
    pub(crate) rear: usize,
}

impl<T> RingQueue<T> {
    /// Creates an empty RingQueue that can hold up to `max_size` elements.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::queue::RingQueue;
    /// let mut queue = RingQueue::new(2);
    /// queue.enqueue('a').unwrap();
    /// queue.enqueue('b').unwrap();
    /// assert!(queue.is_full());
    /// assert!(queue.enqueue('c').is_err());
    /// assert_eq!(queue.dequeue(), Ok('a'));
    /// ```
    pub fn new(max_size: usize) -> RingQueue<T> {
        RingQueue {
            slots: DynamicArray::repeat_with(max_size.saturating_add(1), || None),
            front: 0,
            rear: 0,
        }
    }

    /// Returns the maximum number of elements the queue can hold at once.
    pub const fn max_size(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns the number of elements currently queued.
    pub const fn len(&self) -> usize {
        (self.rear + self.slots.len() - self.front) % self.slots.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    pub const fn is_full(&self) -> bool {
        self.advance(self.rear) == self.front
    }

    /// Adds `value` to the rear of the queue.
    ///
    /// # Errors
    /// Returns [`Full`] if the queue already holds its maximum number of elements.
    pub fn enqueue(&mut self, value: T) -> Result<(), Full> {
        if self.is_full() {
            return Err(Full {
                max_size: self.max_size(),
            });
        }

        self.slots.as_mut_slice()[self.rear] = Some(value);
        self.rear = self.advance(self.rear);
        Ok(())
    }

    /// Removes the element at the front of the queue and returns it.
    ///
    /// # Errors
    /// Returns [`Empty`] if the queue holds no elements.
    pub fn dequeue(&mut self) -> Result<T, Empty> {
        if self.is_empty() {
            return Err(Empty);
        }

        let value = self.slots.as_mut_slice()[self.front].take().ok_or(Empty)?;
        self.front = self.advance(self.front);
        Ok(value)
    }

    /// Returns a reference to the element that would be dequeued next.
    ///
    /// # Errors
    /// Returns [`Empty`] if the queue holds no elements.
    pub fn front(&self) -> Result<&T, Empty> {
        if self.is_empty() {
            return Err(Empty);
        }
        self.slots.as_slice()[self.front].as_ref().ok_or(Empty)
    }

    /// Returns a reference to the most recently enqueued element.
    ///
    /// # Errors
    /// Returns [`Empty`] if the queue holds no elements.
    pub fn back(&self) -> Result<&T, Empty> {
        if self.is_empty() {
            return Err(Empty);
        }
        let last = (self.rear + self.max_size()) % self.slots.len();
        self.slots.as_slice()[last].as_ref().ok_or(Empty)
    }

    /// Drops every queued element and rewinds both indices to the start of the ring.
    pub fn clear(&mut self) {
        for slot in self.slots.as_mut_slice() {
            *slot = None;
        }
        self.front = 0;
        self.rear = 0;
    }

    /// Returns an iterator over the queued elements, from front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns the position one step after `index`, wrapping around the ring.
    pub(crate) const fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }
}

impl<T: Clone> Clone for RingQueue<T> {
    fn clone(&self) -> Self {
        RingQueue {
            slots: self.slots.clone(),
            front: self.front,
            rear: self.rear,
        }
    }
}

/// Two queues are equal when they hold the same elements the same number of times. Neither their
/// order nor their position in the ring is considered.
impl<T: PartialEq> PartialEq for RingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut matched = vec![false; other.len()];
        self.iter().all(|item| {
            let found = other
                .iter()
                .enumerate()
                .position(|(i, candidate)| !matched[i] && candidate == item);

            match found {
                Some(i) => {
                    matched[i] = true;
                    true
                },
                None => false,
            }
        })
    }
}

impl<T: Eq> Eq for RingQueue<T> {}

impl<T: Debug> Debug for RingQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "RingQueue({}): items: ", self.max_size())?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for RingQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}
