use std::any::{self, Any};
use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::num::NonZeroIsize;
use std::ops::{Bound, Deref, DerefMut, Index, IndexMut, RangeBounds};
use std::ptr;
use std::slice;

use crate::util::error::{Empty, IndexOutOfRange, Throw, TypeMismatch};
use crate::util::fmt::write_list;

const GROWTH_FACTOR: usize = 2;
const SHRINK_DIVISOR: usize = 4;

/// A growable contiguous collection with an explicit, observable capacity policy.
///
/// The capacity is always a power of two, or 0 exactly when the array is empty. Pushing past the
/// capacity doubles it, and removing elements until at most a quarter of the capacity is in use
/// halves it. Every resize moves the existing elements into the new buffer in order.
///
/// Indices are signed: `-1` refers to the last element, `-len` to the first.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The resolved index of the item in question.
/// - `r`: The length of a requested range.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `get_range` | `O(r)` |
/// | `get_range_step` | `O(r)` |
/// | `len` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `append_front` | `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)`*, `O(n)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `pop_front` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized. When a push exceeds the capacity, or a removal crosses the shrink threshold, the
/// whole buffer is moved to a new allocation.
pub struct DynamicArray<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length and capacity 0.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub fn new() -> DynamicArray<T> {
        DynamicArray {
            buf: Box::new_uninit_slice(0),
            len: 0,
        }
    }

    /// Creates a DynamicArray of `len` elements, each produced by calling `f`. The capacity is the
    /// smallest power of two that can hold them.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<Option<u8>> = DynamicArray::repeat_with(3, || None);
    /// assert_eq!(arr.len(), 3);
    /// assert_eq!(arr.cap(), 4);
    /// ```
    pub fn repeat_with<F: FnMut() -> T>(len: usize, mut f: F) -> DynamicArray<T> {
        let mut arr = DynamicArray {
            buf: Box::new_uninit_slice(cap_for_len(len)),
            len: 0,
        };

        for slot in arr.buf.iter_mut().take(len) {
            slot.write(f());
            // Track each write so that a panic in f drops exactly the written values.
            arr.len += 1;
        }

        arr
    }

    /// Creates a DynamicArray from type-erased values, checking that every one of them is a `T`.
    /// This is the entry point for heterogeneous input, such as values produced by a deserializer
    /// that doesn't know the element type statically.
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] naming the position of the first value that isn't a `T`.
    ///
    /// # Examples
    /// ```
    /// # use std::any::Any;
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let good: Vec<Box<dyn Any>> = vec![Box::new(1_i32), Box::new(2_i32)];
    /// assert_eq!(&*DynamicArray::<i32>::try_from_any(good).unwrap(), &[1, 2]);
    ///
    /// let bad: Vec<Box<dyn Any>> = vec![Box::new(1_i32), Box::new("two")];
    /// assert_eq!(DynamicArray::<i32>::try_from_any(bad).unwrap_err().position, 1);
    /// ```
    pub fn try_from_any<I>(items: I) -> Result<DynamicArray<T>, TypeMismatch>
    where
        T: 'static,
        I: IntoIterator<Item = Box<dyn Any>>,
    {
        let mut arr = DynamicArray::new();

        for (position, item) in items.into_iter().enumerate() {
            match item.downcast::<T>() {
                Ok(value) => arr.append(*value),
                Err(_) => {
                    return Err(TypeMismatch {
                        expected: any::type_name::<T>(),
                        position,
                    });
                },
            }
        }

        Ok(arr)
    }

    /// Returns the number of elements in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2, 3]);
    /// assert_eq!(arr.cap(), 4);
    /// arr.append(4);
    /// arr.append(5);
    /// assert_eq!(arr.cap(), 8);
    /// ```
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is outside of `[-len, len)`.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from(['a', 'b', 'c']);
    /// assert_eq!(arr.get(0), Ok(&'a'));
    /// assert_eq!(arr.get(-1), Ok(&'c'));
    /// assert!(arr.get(3).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T, IndexOutOfRange> {
        let index = resolve_index(index, self.len)?;
        Ok(&self.as_slice()[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is outside of `[-len, len)`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, IndexOutOfRange> {
        let index = resolve_index(index, self.len)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Replaces the element at `index` with `value`, returning the previous element.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is outside of `[-len, len)`.
    pub fn set(&mut self, index: isize, value: T) -> Result<T, IndexOutOfRange> {
        Ok(mem::replace(self.get_mut(index)?, value))
    }

    /// Returns a new DynamicArray holding clones of the elements within `range`.
    ///
    /// Bounds are signed like indices. An included start must lie in `[-len, len)` and an excluded
    /// end in `[-len, len]`. A range that starts after it ends selects nothing.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if either bound is outside of the ranges described above.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from([0, 1, 2, 3, 4]);
    /// assert_eq!(&*arr.get_range(1..3).unwrap(), &[1, 2]);
    /// assert_eq!(&*arr.get_range(-2..).unwrap(), &[3, 4]);
    /// assert_eq!(&*arr.get_range(..=-4).unwrap(), &[0, 1]);
    /// assert!(arr.get_range(5..).is_err());
    /// ```
    pub fn get_range<R: RangeBounds<isize>>(
        &self,
        range: R,
    ) -> Result<DynamicArray<T>, IndexOutOfRange>
    where
        T: Clone,
    {
        let (start, end) = self.resolve_range(&range)?;

        if start >= end {
            return Ok(DynamicArray::new());
        }

        Ok(self.as_slice()[start..end].iter().cloned().collect())
    }

    /// Returns a new DynamicArray holding clones of every `step`th element within `range`.
    ///
    /// A positive `step` walks forward from the start of the range, exactly like [`get_range`]
    /// followed by skipping. A negative `step` walks backwards: the range then reads from its start
    /// bound down to, but excluding, its end bound (so `4..1` with a step of `-1` selects indices 4,
    /// 3 and 2). An unbounded start begins at the last element and an unbounded end runs past the
    /// first. Bounds are validated as for [`get_range`].
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if either bound is out of range.
    ///
    /// # Examples
    /// ```
    /// # use std::num::NonZeroIsize;
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from([0, 1, 2, 3, 4, 5]);
    /// let two = NonZeroIsize::new(2).unwrap();
    /// let back = NonZeroIsize::new(-1).unwrap();
    /// assert_eq!(&*arr.get_range_step(.., two).unwrap(), &[0, 2, 4]);
    /// assert_eq!(&*arr.get_range_step(4..1, back).unwrap(), &[4, 3, 2]);
    /// assert_eq!(&*arr.get_range_step(.., back).unwrap(), &[5, 4, 3, 2, 1, 0]);
    /// ```
    ///
    /// [`get_range`]: DynamicArray::get_range
    pub fn get_range_step<R: RangeBounds<isize>>(
        &self,
        range: R,
        step: NonZeroIsize,
    ) -> Result<DynamicArray<T>, IndexOutOfRange>
    where
        T: Clone,
    {
        let stride = step.get().unsigned_abs();

        if step.get() > 0 {
            let (start, end) = self.resolve_range(&range)?;
            if start >= end {
                return Ok(DynamicArray::new());
            }
            return Ok(self.as_slice()[start..end].iter().step_by(stride).cloned().collect());
        }

        // Walking backwards, `first` is the first index read and `stop` the exclusive lower limit,
        // which may be -1 to include index 0.
        let first = match range.start_bound() {
            Bound::Included(&i) => resolve_index(i, self.len)? as isize,
            Bound::Excluded(&i) => resolve_index(i, self.len)? as isize - 1,
            Bound::Unbounded => self.len as isize - 1,
        };
        let stop = match range.end_bound() {
            Bound::Included(&i) => resolve_index(i, self.len)? as isize - 1,
            Bound::Excluded(&i) => resolve_bound(i, self.len)? as isize,
            Bound::Unbounded => -1,
        };

        if first <= stop {
            return Ok(DynamicArray::new());
        }

        let slice = &self.as_slice()[(stop + 1) as usize..=first as usize];
        Ok(slice.iter().rev().step_by(stride).cloned().collect())
    }

    /// Pushes `value` onto the end of the DynamicArray, doubling the capacity if it is exhausted.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// for i in 0..=5 {
    ///     arr.append(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn append(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.buf[self.len].write(value);
        self.len += 1;
    }

    /// Inserts `value` at the front of the DynamicArray, moving all existing elements back by one.
    pub fn append_front(&mut self, value: T) {
        self.insert_at(0, value);
    }

    /// Inserts `value` so that it ends up at `index`, moving the following elements back by one.
    /// An `index` equal to the length appends.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is outside of `[-len, len]`.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([0, 1, 2]);
    /// arr.insert(1, 100).unwrap();
    /// arr.insert(-1, 200).unwrap();
    /// arr.insert(5, 300).unwrap();
    /// assert_eq!(&*arr, &[0, 100, 1, 200, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: isize, value: T) -> Result<(), IndexOutOfRange> {
        let index = resolve_bound(index, self.len)?;
        self.insert_at(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, moving the following elements forward by one.
    /// The capacity is halved if the remaining elements fill at most a quarter of it.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is outside of `[-len, len)`.
    pub fn remove(&mut self, index: isize) -> Result<T, IndexOutOfRange> {
        let index = resolve_index(index, self.len)?;
        Ok(self.remove_at(index))
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// Returns [`Empty`] if there are no elements.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2]);
    /// assert_eq!(arr.pop(), Ok(2));
    /// assert_eq!(arr.pop(), Ok(1));
    /// assert!(arr.pop().is_err());
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub fn pop(&mut self) -> Result<T, Empty> {
        match self.len.checked_sub(1) {
            Some(last) => Ok(self.remove_at(last)),
            None => Err(Empty),
        }
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// Returns [`Empty`] if there are no elements.
    pub fn pop_front(&mut self) -> Result<T, Empty> {
        if self.is_empty() {
            Err(Empty)
        } else {
            Ok(self.remove_at(0))
        }
    }

    /// Drops every element and releases the buffer, leaving length and capacity at 0.
    pub fn clear(&mut self) {
        // Reset len first, so that a panicking drop leaks rather than double drops.
        let len = mem::replace(&mut self.len, 0);
        let mut old_buf = mem::replace(&mut self.buf, Box::new_uninit_slice(0));

        for slot in &mut old_buf[..len] {
            // SAFETY: The first len slots of the old buffer are initialized and no longer reachable
            // through self, so each is dropped exactly once.
            unsafe { slot.assume_init_drop(); }
        }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The first len slots are initialized, MaybeUninit<T> has the same layout as T and
        // the borrow of self prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As for as_slice, with the unique borrow of self preventing aliasing.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }
}

impl<T> DynamicArray<T> {
    /// Resolves signed range bounds to a `start..end` pair of slice positions. The pair may be
    /// inverted, which callers treat as an empty selection.
    pub(crate) fn resolve_range<R: RangeBounds<isize>>(
        &self,
        range: &R,
    ) -> Result<(usize, usize), IndexOutOfRange> {
        let start = match range.start_bound() {
            Bound::Included(&i) => resolve_index(i, self.len)?,
            Bound::Excluded(&i) => resolve_index(i, self.len)? + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => resolve_index(i, self.len)? + 1,
            Bound::Excluded(&i) => resolve_bound(i, self.len)?,
            Bound::Unbounded => self.len,
        };
        Ok((start, end))
    }

    /// Inserts `value` at the already resolved `index` (which may equal len).
    pub(crate) fn insert_at(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);

        if self.len == self.cap() {
            self.grow();
        }

        let base = self.buf.as_mut_ptr();
        // SAFETY: index <= len < cap, so both the source range [index, len) and the destination
        // range [index + 1, len + 1) lie within the buffer. ptr::copy permits the overlap.
        unsafe { ptr::copy(base.add(index), base.add(index + 1), self.len - index); }

        // The slot at index still holds a bitwise duplicate of the moved value, which write
        // overwrites without dropping.
        self.buf[index].write(value);
        self.len += 1;
    }

    /// Removes the element at the already resolved `index` (which must be less than len) and
    /// applies the shrink policy.
    pub(crate) fn remove_at(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);

        // SAFETY: index < len, so the slot is initialized. Its bits are overwritten by the copy
        // below or fall outside of len, so the value is never read or dropped twice.
        let value = unsafe { self.buf[index].assume_init_read() };

        let base = self.buf.as_mut_ptr();
        // SAFETY: The source range [index + 1, len) and destination range [index, len - 1) both
        // lie within the buffer. ptr::copy permits the overlap.
        unsafe { ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1); }

        self.len -= 1;
        self.shrink();
        value
    }

    /// Doubles the capacity, or allocates a single slot if there are none.
    ///
    /// # Panics
    /// Panics if the new buffer's memory layout would exceed [`isize::MAX`] bytes.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, 1);
        self.realloc(new_cap);
    }

    /// Halves the capacity once if at most a quarter of it is in use, releasing the buffer entirely
    /// once the array is empty.
    pub(crate) fn shrink(&mut self) {
        if self.len == 0 {
            if self.cap() != 0 {
                self.realloc(0);
            }
        } else if self.len <= self.cap() / SHRINK_DIVISOR {
            self.realloc(self.cap() / GROWTH_FACTOR);
        }
    }

    /// Moves all elements into a new buffer with exactly `new_cap` slots.
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        let mut new_buf = Box::<[T]>::new_uninit_slice(new_cap);
        // SAFETY: Both buffers have at least len slots and are separate allocations. The values
        // are moved bitwise and the old buffer is then dropped as MaybeUninit, which never drops
        // its contents, so ownership transfers without duplication.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }
        self.buf = new_buf;
    }
}

/// Returns the capacity the policy assigns to an array built with exactly `len` elements.
pub(crate) const fn cap_for_len(len: usize) -> usize {
    if len == 0 { 0 } else { len.next_power_of_two() }
}

/// Resolves a signed `index` against `len`, accepting `[-len, len)`.
pub(crate) const fn resolve_index(index: isize, len: usize) -> Result<usize, IndexOutOfRange> {
    // Allocations never exceed isize::MAX bytes, so len fits in an isize for any non-ZST.
    let signed_len = len as isize;
    let resolved = if index < 0 { index + signed_len } else { index };

    if resolved >= 0 && resolved < signed_len {
        Ok(resolved as usize)
    } else {
        Err(IndexOutOfRange { index, len })
    }
}

/// Resolves a signed boundary `index` against `len`, accepting `[-len, len]`.
pub(crate) const fn resolve_bound(index: isize, len: usize) -> Result<usize, IndexOutOfRange> {
    let signed_len = len as isize;
    let resolved = if index < 0 { index + signed_len } else { index };

    if resolved >= 0 && resolved <= signed_len {
        Ok(resolved as usize)
    } else {
        Err(IndexOutOfRange { index, len })
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[..self.len] {
            // SAFETY: All slots below len are initialized and dropped exactly once here. The
            // buffer itself is then freed without touching its (MaybeUninit) contents.
            unsafe { slot.assume_init_drop(); }
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // Appending one at a time from empty lands on the smallest sufficient power of two.
        let mut arr = DynamicArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(value: &[T]) -> Self {
        value.iter().cloned().collect()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<isize> for DynamicArray<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of range, see [`DynamicArray::get`].
    fn index(&self, index: isize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T> IndexMut<isize> for DynamicArray<T> {
    /// # Panics
    /// Panics if `index` is out of range, see [`DynamicArray::get_mut`].
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        self.get_mut(index).throw()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = DynamicArray {
            buf: Box::new_uninit_slice(self.cap()),
            len: 0,
        };

        for value in self.iter() {
            arr.buf[arr.len].write(value.clone());
            arr.len += 1;
        }

        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        // Slice equality compares lengths before elements.
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}
