//! Growable contiguous vector with an explicit doubling growth policy.
//!
//! [`Vector`] owns a single heap buffer and tracks its logical length and
//! allocated capacity separately. When a push or insert finds the buffer full
//! the capacity becomes `max(1, capacity * 2)`: a new buffer is allocated, the
//! live elements are moved across, and the old buffer is released.
//!
//! # Invalidation
//!
//! Any operation that can reallocate or shift the buffer (`push_back`,
//! `insert`, `erase`, `resize`, `reserve`, `clear`, ...) takes `&mut self`.
//! Iterators and references into the vector borrow it, so the borrow checker
//! rejects code that would keep one alive across such a call.
//!
//! # Example
//!
//! ```
//! use primer_collections::Vector;
//!
//! let mut v: Vector<i32> = Vector::new();
//! v.push_back(3);
//! v.push_back(1);
//! v.push_back(2);
//!
//! assert_eq!(v.capacity(), 4); // 0 -> 1 -> 2 -> 4
//! assert_eq!(v.at(1), Ok(&1));
//! assert!(v.at(3).is_err());
//!
//! v.insert(0, 10).unwrap();
//! assert_eq!(v.as_slice(), &[10, 3, 1, 2]);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem::{self, ManuallyDrop};
use core::ops::{Index, IndexMut};
use core::ptr::{self, NonNull};
use core::slice;
use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use std::marker::PhantomData;

use crate::{Error, Result};

/// A growable, contiguous sequence container.
///
/// See the [module documentation](self) for the growth policy and the
/// invalidation rules.
pub struct Vector<T> {
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
    _marker: PhantomData<T>,
}

// Safety: Vector owns its elements, same rules as Vec<T>
unsafe impl<T: Send> Send for Vector<T> {}
unsafe impl<T: Sync> Sync for Vector<T> {}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

/// Allocates room for `cap` elements. Zero-sized requests never touch the
/// allocator.
fn allocate<T>(cap: usize) -> NonNull<T> {
    if cap == 0 || mem::size_of::<T>() == 0 {
        return NonNull::dangling();
    }

    let layout = Layout::array::<T>(cap).unwrap_or_else(|_| capacity_overflow());
    // Safety: layout has non-zero size
    let ptr = unsafe { alloc(layout) } as *mut T;
    NonNull::new(ptr).unwrap_or_else(|| handle_alloc_error(layout))
}

/// Releases a buffer obtained from `allocate::<T>(cap)`.
///
/// # Safety
///
/// `ptr` must come from `allocate::<T>(cap)` with the same `cap`, and must not
/// be used afterwards. Elements are not dropped.
unsafe fn deallocate<T>(ptr: NonNull<T>, cap: usize) {
    if cap == 0 || mem::size_of::<T>() == 0 {
        return;
    }

    unsafe {
        // Same layout as the successful allocation
        let layout = Layout::array::<T>(cap).unwrap_unchecked();
        dealloc(ptr.as_ptr() as *mut u8, layout);
    }
}

impl<T> Vector<T> {
    /// Creates an empty vector without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the requested size in bytes overflows `isize`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ptr: allocate(capacity),
            len: 0,
            cap: capacity,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the buffer can hold without
    /// reallocating.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Moves the live elements into a buffer of exactly `new_cap` slots.
    ///
    /// Callers drop any elements past `new_cap` first.
    pub(crate) fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        if new_cap == self.cap {
            return;
        }

        let new_ptr = allocate::<T>(new_cap);
        // Safety: both buffers hold at least `len` slots and are distinct
        // allocations; the old one is released without dropping the moved
        // elements.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            deallocate(self.ptr, self.cap);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            len = self.len,
            "vector buffer reallocated"
        );

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    #[inline]
    fn grow(&mut self) {
        let new_cap = if self.cap == 0 {
            1
        } else {
            self.cap
                .checked_mul(2)
                .unwrap_or_else(|| capacity_overflow())
        };
        self.reallocate(new_cap);
    }

    /// Grows the buffer to exactly `new_capacity` if it is currently smaller.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.cap {
            self.reallocate(new_capacity);
        }
    }

    /// Appends an element, growing the buffer if it is full.
    ///
    /// Amortized O(1).
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap {
            self.grow();
        }

        // Safety: len < cap after the grow above
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the vector is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }

        self.len -= 1;
        // Safety: slot `len` was initialized and is now outside the live range
        Ok(unsafe { self.ptr.as_ptr().add(self.len).read() })
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends. O(len - index).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len));
        }

        if self.len == self.cap {
            self.grow();
        }

        // Safety: index <= len < cap; the shifted range stays in bounds
        unsafe {
            let at = self.ptr.as_ptr().add(index);
            ptr::copy(at, at.add(1), self.len - index);
            at.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `(index, len)` one
    /// slot left. O(len - index).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn erase(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::out_of_range(index, self.len));
        }

        // Safety: index < len
        let value = unsafe {
            let at = self.ptr.as_ptr().add(index);
            let value = at.read();
            ptr::copy(at.add(1), at, self.len - index - 1);
            value
        };
        self.len -= 1;
        Ok(value)
    }

    /// Drops every element past `new_len`. Capacity is unchanged.
    ///
    /// No-op if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let tail_len = self.len - new_len;
        // Shrink first so a panicking destructor cannot cause a double drop
        self.len = new_len;
        // Safety: [new_len, new_len + tail_len) was initialized
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr().add(new_len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element and releases the buffer.
    ///
    /// Afterwards `len() == 0` and `capacity() == 0`.
    pub fn clear(&mut self) {
        self.truncate(0);
        // Safety: buffer came from allocate(cap); replaced immediately
        unsafe { deallocate(self.ptr, self.cap) };
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// Exchanges buffer, length and capacity with `other`. O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Bounds-checked shared access.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        self.get(index)
            .ok_or(Error::out_of_range(index, self.len))
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.get_mut(index).ok_or(Error::out_of_range(index, len))
    }

    /// Returns a reference to the element at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, if present.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. Anything else is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// Returns a mutable reference without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. Anything else is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the vector is empty.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(Error::EmptyContainer)
    }

    /// Returns the first element mutably.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the vector is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().first_mut().ok_or(Error::EmptyContainer)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the vector is empty.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(Error::EmptyContainer)
    }

    /// Returns the last element mutably.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the vector is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().last_mut().ok_or(Error::EmptyContainer)
    }

    /// The live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: [0, len) is initialized; ptr is dangling-but-aligned when len == 0
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice. This is the range handed to the
    /// sorting algorithms.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: as above, and &mut self guarantees exclusivity
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Iterates front to back; `.rev()` iterates back to front.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates mutably front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Default> Vector<T> {
    /// Sets the logical length to `new_len`.
    ///
    /// Growing past the capacity reallocates to exactly `new_len` slots and
    /// fills new slots with `T::default()`. Shrinking drops the tail and keeps
    /// the buffer.
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        if new_len > self.cap {
            self.reallocate(new_len);
        }

        while self.len < new_len {
            // Safety: len < new_len <= cap
            unsafe { self.ptr.as_ptr().add(self.len).write(T::default()) };
            self.len += 1;
        }
    }
}

impl<T: Clone> Vector<T> {
    /// Overwrites every element with a clone of `value`.
    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }

    /// Replaces the contents with `count` clones of `value`.
    pub fn assign(&mut self, count: usize, value: T) {
        self.clear();
        for _ in 0..count {
            self.push_back(value.clone());
        }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Safety: [0, len) is initialized; buffer came from allocate(cap)
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            deallocate(self.ptr, self.cap);
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Deep copy; the clone keeps the source's capacity.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.cap);
        for value in self.iter() {
            out.push_back(value.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    /// Lexicographic up to the shorter length, then by length.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`. Use [`Vector::at`] for a checked `Result`.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        let mut out = Self::with_capacity(N);
        out.extend(values);
        out
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        let mut out = Self::with_capacity(values.len());
        out.extend(values);
        out
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let me = ManuallyDrop::new(self);
        IntoIter {
            ptr: me.ptr,
            cap: me.cap,
            front: 0,
            back: me.len,
            _marker: PhantomData,
        }
    }
}

// =============================================================================
// Owning iterator
// =============================================================================

/// Owning iterator returned by `Vector::into_iter`.
///
/// Elements not yet yielded are dropped with the iterator.
pub struct IntoIter<T> {
    ptr: NonNull<T>,
    cap: usize,
    front: usize,
    back: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        // Safety: [front, back) is still initialized and owned by us
        let value = unsafe { self.ptr.as_ptr().add(self.front).read() };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // Safety: as in next()
        Some(unsafe { self.ptr.as_ptr().add(self.back).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Safety: only [front, back) is still live
        unsafe {
            let rest = ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr().add(self.front),
                self.back - self.front,
            );
            ptr::drop_in_place(rest);
            deallocate(self.ptr, self.cap);
        }
    }
}
