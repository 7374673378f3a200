//! Intrusive doubly linked list over caller-owned storage.
//!
//! Nodes embed their own prev/next links through the [`Linked`] trait. The
//! list stores only head, tail and length; it relinks nodes in whatever
//! [`Storage`] the caller passes in and never allocates or frees them.

use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::{Error, Key, Result, Storage};

/// Link capability for types that can sit in an [`IntrusiveList`].
///
/// Implementors embed prev/next keys directly in their struct, which makes
/// unlinking a known node O(1).
///
/// # Example
///
/// ```
/// use primer_collections::{Key, Linked};
///
/// struct Job {
///     id: u64,
///     next: u32,
///     prev: u32,
/// }
///
/// impl Linked<u32> for Job {
///     fn next(&self) -> u32 { self.next }
///     fn prev(&self) -> u32 { self.prev }
///     fn set_next(&mut self, key: u32) { self.next = key; }
///     fn set_prev(&mut self, key: u32) { self.prev = key; }
/// }
/// ```
pub trait Linked<K: Key> {
    /// Returns the next node's key, or `K::NONE` at the tail.
    fn next(&self) -> K;

    /// Returns the previous node's key, or `K::NONE` at the head.
    fn prev(&self) -> K;

    /// Sets the next node's key.
    fn set_next(&mut self, key: K);

    /// Sets the previous node's key.
    fn set_prev(&mut self, key: K);
}

#[inline]
fn node<T, S: Storage<T>>(storage: &S, key: S::Key) -> &T {
    storage.get(key).expect("invalid key")
}

#[inline]
fn node_mut<T, S: Storage<T>>(storage: &mut S, key: S::Key) -> &mut T {
    storage.get_mut(key).expect("invalid key")
}

/// A doubly linked list whose nodes live in external storage.
///
/// # Preconditions
///
/// A node must be unlinked before it is pushed or inserted. Linking a node
/// that already sits in this or another list corrupts both lists; the list
/// cannot detect it. Removing a linked node from the storage behind the
/// list's back has the same effect.
///
/// # Panics
///
/// Every method that takes a key panics if the key is not occupied in the
/// storage passed in.
///
/// # Example
///
/// ```
/// use primer_collections::{IntrusiveList, Key, Linked};
///
/// struct Node {
///     value: u64,
///     next: usize,
///     prev: usize,
/// }
///
/// impl Node {
///     fn new(value: u64) -> Self {
///         Self { value, next: usize::NONE, prev: usize::NONE }
///     }
/// }
///
/// impl Linked<usize> for Node {
///     fn next(&self) -> usize { self.next }
///     fn prev(&self) -> usize { self.prev }
///     fn set_next(&mut self, key: usize) { self.next = key; }
///     fn set_prev(&mut self, key: usize) { self.prev = key; }
/// }
///
/// let mut storage = slab::Slab::new();
/// let mut list: IntrusiveList<usize> = IntrusiveList::new();
///
/// let a = storage.insert(Node::new(1));
/// let b = storage.insert(Node::new(2));
/// let c = storage.insert(Node::new(3));
///
/// list.push_back(&mut storage, a);
/// list.push_back(&mut storage, b);
/// list.push_back(&mut storage, c);
///
/// // O(1) unlink from the middle; the node stays in storage
/// list.unlink(&mut storage, b);
/// assert_eq!(list.len(), 2);
/// assert_eq!(storage[b].value, 2);
///
/// let values: Vec<u64> = list.iter(&storage).map(|n| n.value).collect();
/// assert_eq!(values, vec![1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrusiveList<K: Key> {
    head: K,
    tail: K,
    len: usize,
}

impl<K: Key> Default for IntrusiveList<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> IntrusiveList<K> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: K::NONE,
            tail: K::NONE,
            len: 0,
        }
    }

    /// Returns the head node's key, or `K::NONE` if empty.
    #[inline]
    pub const fn head(&self) -> K {
        self.head
    }

    /// Returns the tail node's key, or `K::NONE` if empty.
    #[inline]
    pub const fn tail(&self) -> K {
        self.tail
    }

    /// Returns the number of linked nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no node is linked.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the key after `key`, or `K::NONE` at the tail.
    #[inline]
    pub fn next_key<T, S>(&self, storage: &S, key: K) -> K
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        node::<T, S>(storage, key).next()
    }

    /// Returns the key before `key`, or `K::NONE` at the head.
    #[inline]
    pub fn prev_key<T, S>(&self, storage: &S, key: K) -> K
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        node::<T, S>(storage, key).prev()
    }

    /// Links `key` at the back.
    #[inline]
    pub fn push_back<T, S>(&mut self, storage: &mut S, key: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        {
            let n = node_mut::<T, S>(storage, key);
            n.set_prev(self.tail);
            n.set_next(K::NONE);
        }

        if self.tail.is_some() {
            node_mut::<T, S>(storage, self.tail).set_next(key);
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
    }

    /// Links `key` at the front.
    #[inline]
    pub fn push_front<T, S>(&mut self, storage: &mut S, key: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        {
            let n = node_mut::<T, S>(storage, key);
            n.set_next(self.head);
            n.set_prev(K::NONE);
        }

        if self.head.is_some() {
            node_mut::<T, S>(storage, self.head).set_prev(key);
        } else {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
    }

    /// Unlinks the head and returns its key. The node stays in storage.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn pop_front<T, S>(&mut self, storage: &mut S) -> Result<K>
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        if self.head.is_none() {
            return Err(Error::EmptyContainer);
        }

        let key = self.head;
        self.unlink::<T, S>(storage, key);
        Ok(key)
    }

    /// Unlinks the tail and returns its key. The node stays in storage.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn pop_back<T, S>(&mut self, storage: &mut S) -> Result<K>
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        if self.tail.is_none() {
            return Err(Error::EmptyContainer);
        }

        let key = self.tail;
        self.unlink::<T, S>(storage, key);
        Ok(key)
    }

    /// Unlinks a node in O(1) and clears its links. The node stays in
    /// storage.
    ///
    /// `key` must be linked in this list.
    #[inline]
    pub fn unlink<T, S>(&mut self, storage: &mut S, key: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let (prev, next) = {
            let n = node::<T, S>(storage, key);
            (n.prev(), n.next())
        };

        if prev.is_some() {
            node_mut::<T, S>(storage, prev).set_next(next);
        } else {
            self.head = next;
        }

        if next.is_some() {
            node_mut::<T, S>(storage, next).set_prev(prev);
        } else {
            self.tail = prev;
        }

        let n = node_mut::<T, S>(storage, key);
        n.set_prev(K::NONE);
        n.set_next(K::NONE);

        self.len -= 1;
    }

    /// Links `key` directly after the linked node `after`.
    #[inline]
    pub fn insert_after<T, S>(&mut self, storage: &mut S, after: K, key: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let next = node::<T, S>(storage, after).next();

        {
            let n = node_mut::<T, S>(storage, key);
            n.set_prev(after);
            n.set_next(next);
        }

        node_mut::<T, S>(storage, after).set_next(key);

        if next.is_some() {
            node_mut::<T, S>(storage, next).set_prev(key);
        } else {
            self.tail = key;
        }

        self.len += 1;
    }

    /// Links `key` directly before the linked node `before`.
    #[inline]
    pub fn insert_before<T, S>(&mut self, storage: &mut S, before: K, key: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let prev = node::<T, S>(storage, before).prev();

        {
            let n = node_mut::<T, S>(storage, key);
            n.set_next(before);
            n.set_prev(prev);
        }

        node_mut::<T, S>(storage, before).set_prev(key);

        if prev.is_some() {
            node_mut::<T, S>(storage, prev).set_next(key);
        } else {
            self.head = key;
        }

        self.len += 1;
    }

    /// Returns the key of the first node matching `pred`, scanning from the
    /// head. O(len).
    pub fn find_by<T, S, F>(&self, storage: &S, mut pred: F) -> Option<K>
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
        F: FnMut(&T) -> bool,
    {
        let mut key = self.head;
        while key.is_some() {
            let n = node::<T, S>(storage, key);
            if pred(n) {
                return Some(key);
            }
            key = n.next();
        }
        None
    }

    /// Returns the key of the first node equal to `value`, or `None`.
    #[inline]
    pub fn find<T, S, V>(&self, storage: &S, value: &V) -> Option<K>
    where
        T: Linked<K> + PartialEq<V>,
        S: Storage<T, Key = K>,
        V: ?Sized,
    {
        self.find_by::<T, S, _>(storage, |n| n == value)
    }

    /// Unlinks the first node equal to `value` and returns its key.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no linked node matches. The list is unchanged.
    pub fn remove_value<T, S, V>(&mut self, storage: &mut S, value: &V) -> Result<K>
    where
        T: Linked<K> + PartialEq<V>,
        S: Storage<T, Key = K>,
        V: ?Sized,
    {
        let key = self.find::<T, S, V>(storage, value).ok_or(Error::NotFound)?;
        self.unlink::<T, S>(storage, key);
        Ok(key)
    }

    /// Reverses the list in place by swapping every node's links. O(len).
    pub fn reverse<T, S>(&mut self, storage: &mut S)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let mut key = self.head;
        while key.is_some() {
            let n = node_mut::<T, S>(storage, key);
            let (prev, next) = (n.prev(), n.next());
            n.set_prev(next);
            n.set_next(prev);
            key = next;
        }

        core::mem::swap(&mut self.head, &mut self.tail);

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, "intrusive list reversed");
    }

    /// Unlinks every node. Nothing is removed from storage.
    pub fn clear<T, S>(&mut self, storage: &mut S)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, "intrusive list cleared");

        let mut key = self.head;
        while key.is_some() {
            let n = node_mut::<T, S>(storage, key);
            key = n.next();
            n.set_prev(K::NONE);
            n.set_next(K::NONE);
        }

        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    /// Iterates linked nodes head to tail; `.rev()` walks tail to head.
    #[inline]
    pub fn iter<'a, T, S>(&self, storage: &'a S) -> Iter<'a, K, T, S>
    where
        T: Linked<K> + 'a,
        S: Storage<T, Key = K>,
    {
        Iter {
            storage,
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Iterates the keys of linked nodes head to tail.
    #[inline]
    pub fn keys<'a, T, S>(&self, storage: &'a S) -> Keys<'a, K, T, S>
    where
        T: Linked<K> + 'a,
        S: Storage<T, Key = K>,
    {
        Keys {
            inner: self.iter::<T, S>(storage),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over linked nodes, returned by [`IntrusiveList::iter`].
pub struct Iter<'a, K: Key, T, S> {
    storage: &'a S,
    front: K,
    back: K,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, K: Key, T, S> Iter<'a, K, T, S>
where
    T: Linked<K> + 'a,
    S: Storage<T, Key = K>,
{
    #[inline]
    fn step_front(&mut self) -> Option<(K, &'a T)> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.front;
        let n = node::<T, S>(self.storage, key);
        self.front = n.next();
        self.remaining -= 1;
        Some((key, n))
    }

    #[inline]
    fn step_back(&mut self) -> Option<(K, &'a T)> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.back;
        let n = node::<T, S>(self.storage, key);
        self.back = n.prev();
        self.remaining -= 1;
        Some((key, n))
    }
}

impl<'a, K: Key, T, S> Iterator for Iter<'a, K, T, S>
where
    T: Linked<K> + 'a,
    S: Storage<T, Key = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.step_front().map(|(_, n)| n)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: Key, T, S> DoubleEndedIterator for Iter<'a, K, T, S>
where
    T: Linked<K> + 'a,
    S: Storage<T, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.step_back().map(|(_, n)| n)
    }
}

impl<'a, K: Key, T, S> ExactSizeIterator for Iter<'a, K, T, S>
where
    T: Linked<K> + 'a,
    S: Storage<T, Key = K>,
{
}

impl<'a, K: Key, T, S> FusedIterator for Iter<'a, K, T, S>
where
    T: Linked<K> + 'a,
    S: Storage<T, Key = K>,
{
}

/// Iterator over the keys of linked nodes, returned by
/// [`IntrusiveList::keys`].
pub struct Keys<'a, K: Key, T, S> {
    inner: Iter<'a, K, T, S>,
}

impl<'a, K: Key, T, S> Iterator for Keys<'a, K, T, S>
where
    T: Linked<K> + 'a,
    S: Storage<T, Key = K>,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        self.inner.step_front().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: Key, T, S> DoubleEndedIterator for Keys<'a, K, T, S>
where
    T: Linked<K> + 'a,
    S: Storage<T, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<K> {
        self.inner.step_back().map(|(key, _)| key)
    }
}

impl<'a, K: Key, T, S> ExactSizeIterator for Keys<'a, K, T, S>
where
    T: Linked<K> + 'a,
    S: Storage<T, Key = K>,
{
}
