//! Owned doubly linked list.
//!
//! [`List`] bundles a `slab::Slab` node pool with an [`IntrusiveList`] that
//! links the pooled nodes. Nodes are addressed by slab key rather than by
//! pointer, so the list needs no unsafe code for linking, and freed slots are
//! reused by later pushes.
//!
//! # Example
//!
//! ```
//! use primer_collections::List;
//!
//! let mut list = List::new();
//! list.push_back(0);
//! list.push_back(8);
//! list.push_back(-5);
//!
//! assert_eq!(list.remove(&8), Ok(8));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, -5]);
//! assert_eq!(list.len(), 2);
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use slab::Slab;

use crate::{Error, IntrusiveList, Key, Linked, Result, Storage, intrusive};

struct Node<T> {
    value: T,
    next: usize,
    prev: usize,
}

impl<T> Node<T> {
    #[inline]
    fn new(value: T) -> Self {
        Self {
            value,
            next: usize::NONE,
            prev: usize::NONE,
        }
    }
}

impl<T> Linked<usize> for Node<T> {
    #[inline]
    fn next(&self) -> usize {
        self.next
    }

    #[inline]
    fn prev(&self) -> usize {
        self.prev
    }

    #[inline]
    fn set_next(&mut self, key: usize) {
        self.next = key;
    }

    #[inline]
    fn set_prev(&mut self, key: usize) {
        self.prev = key;
    }
}

/// Doubly linked list that owns its elements.
///
/// Ends are O(1); positional access walks from whichever end is closer.
pub struct List<T> {
    nodes: Slab<Node<T>>,
    links: IntrusiveList<usize>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            nodes: Slab::new(),
            links: IntrusiveList::new(),
        }
    }

    /// Creates an empty list with node slots for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            links: IntrusiveList::new(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Appends an element. O(1).
    pub fn push_back(&mut self, value: T) {
        let key = self.nodes.insert(Node::new(value));
        self.links.push_back(&mut self.nodes, key);
    }

    /// Prepends an element. O(1).
    pub fn push_front(&mut self, value: T) {
        let key = self.nodes.insert(Node::new(value));
        self.links.push_front(&mut self.nodes, key);
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let key = self.links.pop_front(&mut self.nodes)?;
        Ok(self.nodes.remove(key).value)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let key = self.links.pop_back(&mut self.nodes)?;
        Ok(self.nodes.remove(key).value)
    }

    /// Returns the first element, or [`Error::EmptyContainer`].
    pub fn front(&self) -> Result<&T> {
        self.value(self.links.head()).ok_or(Error::EmptyContainer)
    }

    /// Returns the first element mutably, or [`Error::EmptyContainer`].
    pub fn front_mut(&mut self) -> Result<&mut T> {
        let head = self.links.head();
        self.value_mut(head).ok_or(Error::EmptyContainer)
    }

    /// Returns the last element, or [`Error::EmptyContainer`].
    pub fn back(&self) -> Result<&T> {
        self.value(self.links.tail()).ok_or(Error::EmptyContainer)
    }

    /// Returns the last element mutably, or [`Error::EmptyContainer`].
    pub fn back_mut(&mut self) -> Result<&mut T> {
        let tail = self.links.tail();
        self.value_mut(tail).ok_or(Error::EmptyContainer)
    }

    #[inline]
    fn value(&self, key: usize) -> Option<&T> {
        key.into_option()
            .and_then(|key| self.nodes.get(key))
            .map(|node| &node.value)
    }

    #[inline]
    fn value_mut(&mut self, key: usize) -> Option<&mut T> {
        key.into_option()
            .and_then(|key| self.nodes.get_mut(key))
            .map(|node| &mut node.value)
    }

    /// Finds the node at `position`, walking from the closer end.
    fn key_at(&self, position: usize) -> Option<usize> {
        let len = self.len();
        if position >= len {
            return None;
        }

        if position < len / 2 {
            let mut key = self.links.head();
            for _ in 0..position {
                key = self.nodes[key].next;
            }
            Some(key)
        } else {
            let mut key = self.links.tail();
            for _ in 0..(len - 1 - position) {
                key = self.nodes[key].prev;
            }
            Some(key)
        }
    }

    /// Returns the element at `position`. O(min(position, len - position)).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `position >= len`.
    pub fn at(&self, position: usize) -> Result<&T> {
        let key = self
            .key_at(position)
            .ok_or(Error::out_of_range(position, self.len()))?;
        Ok(&self.nodes[key].value)
    }

    /// Returns the element at `position` mutably.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `position >= len`.
    pub fn at_mut(&mut self, position: usize) -> Result<&mut T> {
        let key = self
            .key_at(position)
            .ok_or(Error::out_of_range(position, self.len()))?;
        Ok(&mut self.nodes[key].value)
    }

    /// Inserts `value` so that it ends up at `position`.
    ///
    /// `position == len` appends.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `position > len`.
    pub fn insert(&mut self, position: usize, value: T) -> Result<()> {
        let len = self.len();
        if position > len {
            return Err(Error::out_of_range(position, len));
        }
        if position == len {
            self.push_back(value);
            return Ok(());
        }

        let before = self
            .key_at(position)
            .ok_or(Error::out_of_range(position, len))?;
        let key = self.nodes.insert(Node::new(value));
        self.links.insert_before(&mut self.nodes, before, key);
        Ok(())
    }

    /// Removes and returns the element at `position`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `position >= len`.
    pub fn erase(&mut self, position: usize) -> Result<T> {
        let key = self
            .key_at(position)
            .ok_or(Error::out_of_range(position, self.len()))?;
        Ok(self.detach(key))
    }

    #[inline]
    fn detach(&mut self, key: usize) -> T {
        self.links.unlink(&mut self.nodes, key);
        self.nodes.remove(key).value
    }

    /// Removes and returns the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element matches; the list is unchanged.
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let key = self
            .links
            .find_by(&self.nodes, |node| node.value == *value)
            .ok_or(Error::NotFound)?;
        Ok(self.detach(key))
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Returns a cursor at the first element equal to `value`, or at the end
    /// sentinel if there is none. O(len).
    pub fn find(&self, value: &T) -> Cursor<'_, T>
    where
        T: PartialEq,
    {
        let mut cursor = self.cursor_front();
        while let Ok(current) = cursor.current() {
            if current == value {
                break;
            }
            cursor.move_next();
        }
        cursor
    }

    /// Reverses the list in place. O(len), no element moves.
    pub fn reverse(&mut self) {
        self.links.reverse(&mut self.nodes);
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len(), "list cleared");

        self.nodes.clear();
        self.links = IntrusiveList::new();
    }

    /// Exchanges contents with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Iterates front to back; `.rev()` iterates back to front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.links.iter(&self.nodes),
        }
    }

    /// Iterates mutably front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            front: self.links.head(),
            back: self.links.tail(),
            remaining: self.links.len(),
            nodes: &mut self.nodes,
            _marker: PhantomData,
        }
    }

    /// Read-only cursor at the first element (the end sentinel if empty).
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            current: self.links.head(),
            index: 0,
        }
    }

    /// Read-only cursor at the last element (the end sentinel if empty).
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            current: self.links.tail(),
            index: self.len().saturating_sub(1),
        }
    }

    /// Mutable cursor at the first element (the end sentinel if empty).
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            current: self.links.head(),
            index: 0,
            list: self,
        }
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len());
        out.extend(self.iter().cloned());
        out
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

// =============================================================================
// Cursors
// =============================================================================

/// Read-only bidirectional cursor.
///
/// A cursor sits either on an element or on the end sentinel, which lies
/// between the tail and the head. Moving next from the tail reaches the
/// sentinel and moving next again reaches the head; `move_prev` mirrors this.
/// Reading at the sentinel fails with [`Error::IndexOutOfRange`] whose
/// `index` equals the list length.
pub struct Cursor<'a, T> {
    list: &'a List<T>,
    current: usize,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Returns the current element.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] at the end sentinel.
    #[inline]
    pub fn current(&self) -> Result<&'a T> {
        let list: &'a List<T> = self.list;
        list.value(self.current)
            .ok_or(Error::out_of_range(self.index, list.len()))
    }

    /// Position of the current element, or `None` at the end sentinel.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.current.into_option().map(|_| self.index)
    }

    /// Returns `true` at the end sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Advances toward the tail, passing through the end sentinel.
    pub fn move_next(&mut self) {
        if self.current.is_some() {
            self.current = self.list.nodes[self.current].next;
            self.index += 1;
        } else {
            self.current = self.list.links.head();
            self.index = 0;
        }
    }

    /// Steps toward the head, passing through the end sentinel.
    pub fn move_prev(&mut self) {
        if self.current.is_some() {
            self.current = self.list.nodes[self.current].prev;
            self.index = if self.current.is_some() {
                self.index - 1
            } else {
                self.list.len()
            };
        } else {
            self.current = self.list.links.tail();
            self.index = self.list.len().saturating_sub(1);
        }
    }

    /// Peeks at the element after the current one without moving.
    pub fn peek_next(&self) -> Option<&'a T> {
        let list: &'a List<T> = self.list;
        let next = if self.current.is_some() {
            list.nodes[self.current].next
        } else {
            list.links.head()
        };
        list.value(next)
    }

    /// Peeks at the element before the current one without moving.
    pub fn peek_prev(&self) -> Option<&'a T> {
        let list: &'a List<T> = self.list;
        let prev = if self.current.is_some() {
            list.nodes[self.current].prev
        } else {
            list.links.tail()
        };
        list.value(prev)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
            index: self.index,
        }
    }
}

/// Cursor that can edit and remove elements while walking.
///
/// Follows the same sentinel rules as [`Cursor`].
///
/// # Example
///
/// ```
/// use primer_collections::List;
///
/// let mut list: List<u32> = (1..=6).collect();
/// let mut cursor = list.cursor_front_mut();
///
/// while let Ok(value) = cursor.current_mut() {
///     if *value % 2 == 0 {
///         cursor.remove_current().unwrap();
///     } else {
///         *value *= 10;
///         cursor.move_next();
///     }
/// }
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 30, 50]);
/// ```
pub struct CursorMut<'a, T> {
    list: &'a mut List<T>,
    current: usize,
    index: usize,
}

impl<T> CursorMut<'_, T> {
    /// Returns the current element.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] at the end sentinel.
    #[inline]
    pub fn current(&self) -> Result<&T> {
        self.list
            .value(self.current)
            .ok_or(Error::out_of_range(self.index, self.list.len()))
    }

    /// Returns the current element mutably.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] at the end sentinel.
    #[inline]
    pub fn current_mut(&mut self) -> Result<&mut T> {
        let len = self.list.len();
        self.list
            .value_mut(self.current)
            .ok_or(Error::out_of_range(self.index, len))
    }

    /// Position of the current element, or `None` at the end sentinel.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.current.into_option().map(|_| self.index)
    }

    /// Returns `true` at the end sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Advances toward the tail, passing through the end sentinel.
    pub fn move_next(&mut self) {
        if self.current.is_some() {
            self.current = self.list.nodes[self.current].next;
            self.index += 1;
        } else {
            self.current = self.list.links.head();
            self.index = 0;
        }
    }

    /// Steps toward the head, passing through the end sentinel.
    pub fn move_prev(&mut self) {
        if self.current.is_some() {
            self.current = self.list.nodes[self.current].prev;
            self.index = if self.current.is_some() {
                self.index - 1
            } else {
                self.list.len()
            };
        } else {
            self.current = self.list.links.tail();
            self.index = self.list.len().saturating_sub(1);
        }
    }

    /// Peeks at the element after the current one without moving.
    pub fn peek_next(&self) -> Option<&T> {
        let next = if self.current.is_some() {
            self.list.nodes[self.current].next
        } else {
            self.list.links.head()
        };
        self.list.value(next)
    }

    /// Removes the current element and moves to the one after it.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] at the end sentinel.
    pub fn remove_current(&mut self) -> Result<T> {
        if self.current.is_none() {
            return Err(Error::out_of_range(self.index, self.list.len()));
        }

        let key = self.current;
        self.current = self.list.nodes[key].next;
        Ok(self.list.detach(key))
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
pub struct Iter<'a, T> {
    inner: intrusive::Iter<'a, usize, Node<T>, Slab<Node<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|node| &node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|node| &node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over mutable references to list elements.
pub struct IterMut<'a, T> {
    nodes: &'a mut Slab<Node<T>>,
    front: usize,
    back: usize,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }

        // Safety: list invariants guarantee front is occupied while
        // elements remain
        let node = unsafe { Storage::get_unchecked_mut(&mut *self.nodes, self.front) };
        self.front = node.next;
        self.remaining -= 1;

        // Safety: each node is yielded exactly once, so the borrows never alias
        Some(unsafe { &mut *(&mut node.value as *mut T) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // Safety: as in next()
        let node = unsafe { Storage::get_unchecked_mut(&mut *self.nodes, self.back) };
        self.back = node.prev;
        self.remaining -= 1;

        Some(unsafe { &mut *(&mut node.value as *mut T) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator, front to back.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
