//! Classic in-place comparison sorts over slices.
//!
//! Every algorithm comes in two forms: `*_sort(v)` for `T: PartialOrd`, and
//! `*_sort_by(v, is_less)` taking a strict "less than" comparator. All of
//! them sort any contiguous range, so a container's `as_mut_slice()` (or a
//! sub-slice of it) is the range to hand over.
//!
//! | Algorithm | Best | Average | Worst | Extra space | Stable |
//! |-----------|------|---------|-------|-------------|--------|
//! | [`selection_sort`] | n² | n² | n² | 1 | no |
//! | [`insertion_sort`] | n | n² | n² | 1 | yes |
//! | [`bubble_sort`] | n | n² | n² | 1 | yes |
//! | [`merge_sort`] | n log n | n log n | n log n | n | yes |
//! | [`quick_sort`] | n log n | n log n | n² | log n | no |
//!
//! Empty and single-element ranges are no-ops for every algorithm.
//!
//! # Runtime Selection
//!
//! ```
//! use primer_sort::Algorithm;
//!
//! let algorithm: Algorithm = "merge".parse().unwrap();
//! assert!(algorithm.is_stable());
//!
//! let mut v = vec![3, 1, 2];
//! algorithm.sort(&mut v);
//! assert_eq!(v, [1, 2, 3]);
//! ```
//!
//! # Feature Flags
//!
//! - `tracing` (default) - emit a `debug!` event when [`Algorithm::sort_by`]
//!   dispatches

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::{bubble_sort, bubble_sort_by};
pub use insertion::{insertion_sort, insertion_sort_by};
pub use merge::{merge_sort, merge_sort_by};
pub use quick::{quick_sort, quick_sort_by};
pub use selection::{selection_sort, selection_sort_by};

/// One of the five sorting algorithms, chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`selection_sort`]
    Selection,
    /// [`insertion_sort`]
    Insertion,
    /// [`bubble_sort`]
    Bubble,
    /// [`merge_sort`]
    Merge,
    /// [`quick_sort`]
    Quick,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Lowercase name, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Bubble => "bubble",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Whether equal elements keep their relative input order.
    pub const fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Insertion | Algorithm::Bubble | Algorithm::Merge
        )
    }

    /// Sorts `v` ascending.
    ///
    /// `Clone` is required because merge sort copies through temporary
    /// buffers.
    #[inline]
    pub fn sort<T: PartialOrd + Clone>(self, v: &mut [T]) {
        self.sort_by(v, |a, b| a.lt(b));
    }

    /// Sorts `v` by the strict ordering `is_less`.
    pub fn sort_by<T, F>(self, v: &mut [T], is_less: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(algorithm = self.name(), len = v.len(), "sorting");

        match self {
            Algorithm::Selection => selection_sort_by(v, is_less),
            Algorithm::Insertion => insertion_sort_by(v, is_less),
            Algorithm::Bubble => bubble_sort_by(v, is_less),
            Algorithm::Merge => merge_sort_by(v, is_less),
            Algorithm::Quick => quick_sort_by(v, is_less),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort algorithm {0:?}, expected one of: selection, insertion, bubble, merge, quick")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parses a lowercase name; surrounding whitespace and ASCII case are
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseAlgorithmError(name.to_owned()))
    }
}
