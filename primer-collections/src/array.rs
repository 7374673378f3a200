//! Fixed-length array whose length only changes through an explicit resize.
//!
//! [`Array`] shares [`Vector`]'s buffer but keeps `len == capacity` at all
//! times: there is no push, and every resize reallocates to exactly the new
//! length. It is the storage used by the matrix and N-D vector types.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::{Result, Vector, vector};

/// Heap array with a runtime length that changes only on resize.
///
/// # Example
///
/// ```
/// use primer_collections::Array;
///
/// let mut a: Array<i32> = Array::with_len(3);
/// a[0] = 5;
/// a.resize(5);
/// assert_eq!(a.as_slice(), &[5, 0, 0, 0, 0]);
/// assert!(a.at(5).is_err());
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Array<T> {
    inner: Vector<T>,
}

impl<T> Array<T> {
    /// Creates an empty array.
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: Vector::new(),
        }
    }

    /// Creates an array of `len` clones of `value`.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut inner = Vector::with_capacity(len);
        for _ in 0..len {
            inner.push_back(value.clone());
        }
        Self { inner }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the array has length zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Bounds-checked shared access.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        self.inner.at(index)
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `index >= len`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.inner.at_mut(index)
    }

    /// Returns a reference to the element at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Returns a mutable reference to the element at `index`, if present.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.inner.get_mut(index)
    }

    /// Returns a reference without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { self.inner.get_unchecked(index) }
    }

    /// Returns the first element, or [`Error::EmptyContainer`](crate::Error::EmptyContainer).
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.inner.front()
    }

    /// Returns the first element mutably, or [`Error::EmptyContainer`](crate::Error::EmptyContainer).
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.inner.front_mut()
    }

    /// Returns the last element, or [`Error::EmptyContainer`](crate::Error::EmptyContainer).
    #[inline]
    pub fn back(&self) -> Result<&T> {
        self.inner.back()
    }

    /// Returns the last element mutably, or [`Error::EmptyContainer`](crate::Error::EmptyContainer).
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.inner.back_mut()
    }

    /// Drops every element and releases the buffer.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Exchanges contents with `other` in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.inner.swap(&mut other.inner);
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }

    /// Iterates front to back.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Iterates mutably front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.inner.iter_mut()
    }

    fn shrink_to_len(mut inner: Vector<T>) -> Self {
        inner.reallocate(inner.len());
        Self { inner }
    }
}

impl<T: Default> Array<T> {
    /// Creates an array of `len` default values.
    pub fn with_len(len: usize) -> Self {
        let mut inner = Vector::with_capacity(len);
        inner.resize(len);
        Self { inner }
    }

    /// Reallocates to exactly `new_len` slots.
    ///
    /// Elements in `[0, min(len, new_len))` are kept; new slots hold
    /// `T::default()`.
    pub fn resize(&mut self, new_len: usize) {
        self.inner.truncate(new_len);
        self.inner.reallocate(new_len);
        self.inner.resize(new_len);
    }
}

impl<T: Clone> Array<T> {
    /// Overwrites every element with a clone of `value`.
    pub fn fill(&mut self, value: T) {
        self.inner.fill(value);
    }

    /// Resizes to `count` and sets every element to `value`.
    pub fn assign(&mut self, count: usize, value: T) {
        self.inner.truncate(count);
        self.inner.reallocate(count);
        self.inner.fill(value.clone());
        while self.inner.len() < count {
            self.inner.push_back(value.clone());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.inner[index]
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::shrink_to_len(iter.into_iter().collect())
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            inner: Vector::from(values),
        }
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            inner: Vector::from(values),
        }
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(array: Array<T>) -> Self {
        array.inner
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = vector::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn assert_exact(a: &Array<impl Sized>) {
        assert_eq!(a.inner.len(), a.inner.capacity());
    }

    #[test]
    fn with_len_is_default_filled() {
        let a: Array<u8> = Array::with_len(4);
        assert_eq!(a.as_slice(), &[0, 0, 0, 0]);
        assert_exact(&a);
    }

    #[test]
    fn from_elem() {
        let a = Array::from_elem(3, 'x');
        assert_eq!(a.as_slice(), &['x', 'x', 'x']);
        assert_exact(&a);
    }

    #[test]
    fn resize_reallocates_exactly() {
        let mut a = Array::from([1, 2, 3]);
        a.resize(5);
        assert_eq!(a.as_slice(), &[1, 2, 3, 0, 0]);
        assert_exact(&a);

        a.resize(2);
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_exact(&a);

        a.resize(0);
        assert!(a.is_empty());
        assert_exact(&a);
    }

    #[test]
    fn assign_resizes_and_fills() {
        let mut a = Array::from([1, 2]);
        a.assign(4, 9);
        assert_eq!(a.as_slice(), &[9, 9, 9, 9]);
        assert_exact(&a);

        a.assign(1, 3);
        assert_eq!(a.as_slice(), &[3]);
        assert_exact(&a);
    }

    #[test]
    fn indexed_writes_then_read_back() {
        let mut a: Array<i32> = Array::with_len(5);
        for (i, v) in [1000, -3000, 0, 57, -42].into_iter().enumerate() {
            a[i] = v;
        }
        assert_eq!(a.at(1), Ok(&-3000));
        assert_eq!(a.at(5), Err(Error::IndexOutOfRange { index: 5, len: 5 }));
    }

    #[test]
    fn empty_front_back() {
        let mut a: Array<u32> = Array::new();
        assert_eq!(a.front(), Err(Error::EmptyContainer));
        assert_eq!(a.back_mut(), Err(Error::EmptyContainer));
    }

    #[test]
    fn clear_releases() {
        let mut a = Array::from([1, 2, 3]);
        a.clear();
        assert!(a.is_empty());
        assert_exact(&a);
    }

    #[test]
    fn collect_is_exact() {
        let a: Array<u32> = (0..5).collect();
        assert_eq!(a.len(), 5);
        assert_exact(&a);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Array::from([1, 2, 3]);
        let b = Array::from([1, 2]);
        assert!(b < a);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn swap_twice_restores() {
        let mut a = Array::from([1, 2, 3]);
        let mut b = Array::from([4]);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[4]);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[4]);
    }
}
