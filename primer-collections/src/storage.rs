//! Keyed storage that intrusive lists link through.
//!
//! An [`IntrusiveList`](crate::IntrusiveList) never owns its nodes. It only
//! needs to reach a node by key to read and rewrite the embedded links, so
//! the trait is limited to keyed access. Inserting into and removing from the
//! backing store is left to the caller, who knows its own slot policy.

use crate::{Key, Vector};

/// Storage whose elements are reachable through a stable key.
///
/// # Implementations
///
/// - `slab::Slab<T>`: slots stay put until removed, freed slots are reused
/// - [`Vector<T>`]: key is the position; only stable while the vector is not
///   erased from or inserted into
pub trait Storage<T> {
    /// Key type for this storage.
    type Key: Key;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns a reference without checking `key`.
    ///
    /// # Safety
    ///
    /// `key` must be valid and occupied.
    unsafe fn get_unchecked(&self, key: Self::Key) -> &T;

    /// Returns a mutable reference without checking `key`.
    ///
    /// # Safety
    ///
    /// `key` must be valid and occupied.
    unsafe fn get_unchecked_mut(&mut self, key: Self::Key) -> &mut T;
}

impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        slab::Slab::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        slab::Slab::get_mut(self, key)
    }

    #[inline]
    unsafe fn get_unchecked(&self, key: usize) -> &T {
        unsafe { slab::Slab::get_unchecked(self, key) }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: usize) -> &mut T {
        unsafe { slab::Slab::get_unchecked_mut(self, key) }
    }
}

impl<T> Storage<T> for Vector<T> {
    type Key = usize;

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        Vector::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        Vector::get_mut(self, key)
    }

    #[inline]
    unsafe fn get_unchecked(&self, key: usize) -> &T {
        unsafe { Vector::get_unchecked(self, key) }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: usize) -> &mut T {
        unsafe { Vector::get_unchecked_mut(self, key) }
    }
}
