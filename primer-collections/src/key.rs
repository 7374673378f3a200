//! Key trait for storage indices.
//!
//! Intrusive nodes store their neighbours as keys rather than pointers. A
//! reserved sentinel (`NONE`) stands in for "no neighbour", which keeps link
//! fields the size of the key itself instead of `Option<K>`.

/// A copyable key type with a sentinel "none" value.
///
/// # Example
///
/// ```
/// use primer_collections::Key;
///
/// let key: u32 = 42;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// ```
///
/// # Custom Key Types
///
/// ```
/// use primer_collections::Key;
///
/// #[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// struct TaskId(u32);
///
/// impl Key for TaskId {
///     const NONE: Self = TaskId(u32::MAX);
///
///     fn from_usize(val: usize) -> Self {
///         TaskId(val as u32)
///     }
///
///     fn as_usize(&self) -> usize {
///         self.0 as usize
///     }
/// }
///
/// assert!(TaskId::NONE.is_none());
/// assert_eq!(TaskId::from_usize(7).as_usize(), 7);
/// ```
pub trait Key: Copy + Eq {
    /// Sentinel value representing "no key".
    ///
    /// For the integer implementations this is `MAX`, which is never handed
    /// out as a real slot.
    const NONE: Self;

    /// Creates a key from a `usize` slot number.
    fn from_usize(val: usize) -> Self;

    /// Returns the key as a `usize` slot number.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Converts the sentinel into `None`.
    #[inline]
    fn into_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }

                #[inline]
                fn as_usize(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u8, u16, u32, u64, usize);
