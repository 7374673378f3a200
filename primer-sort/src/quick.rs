//! Quicksort with a Lomuto partition.
//!
//! The pivot is always the last element of the range. On already sorted or
//! reverse-sorted input every partition is maximally lopsided and the sort
//! degrades to O(n²) comparisons. Only the smaller side is recursed into,
//! which keeps stack depth at O(log n) even then.

use core::mem;

/// Sorts `v` ascending with quicksort.
///
/// Average O(n log n), worst O(n²). Not stable.
#[inline]
pub fn quick_sort<T: PartialOrd>(v: &mut [T]) {
    quick_sort_by(v, |a, b| a.lt(b));
}

/// Sorts `v` with quicksort, ordering by `is_less`.
pub fn quick_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    sort(v, &mut is_less);
}

fn sort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot = partition(v, is_less);
        let (left, rest) = mem::take(&mut v).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            sort(left, is_less);
            v = right;
        } else {
            sort(right, is_less);
            v = left;
        }
    }
}

/// Lomuto partition around the last element.
///
/// Elements not greater than the pivot are swapped to the front in scan
/// order; the pivot then lands at the returned index, which is its final
/// position.
pub(crate) fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;
    let mut store = 0;

    for j in 0..last {
        // v[j] <= pivot
        if !is_less(&v[last], &v[j]) {
            v.swap(store, j);
            store += 1;
        }
    }

    v.swap(store, last);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_duplicates() {
        let mut v = [3, 6, 1, 3, 9, 0, 3, 2];
        quick_sort(&mut v);
        assert_eq!(v, [0, 1, 2, 3, 3, 3, 6, 9]);
    }

    #[test]
    fn partition_places_pivot() {
        let mut v = [7, 2, 9, 1, 5];
        let p = partition(&mut v, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(p, 2);
        assert_eq!(v[p], 5);
        assert!(v[..p].iter().all(|&x| x <= 5));
        assert!(v[p + 1..].iter().all(|&x| x > 5));
    }

    #[test]
    fn sorted_input_is_quadratic() {
        let n = 200usize;
        let mut v: Vec<usize> = (0..n).collect();
        let mut comparisons = 0usize;
        quick_sort_by(&mut v, |a, b| {
            comparisons += 1;
            a < b
        });
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(comparisons, n * (n - 1) / 2);
    }

    #[test]
    fn large_sorted_input_does_not_overflow_stack() {
        let mut v: Vec<u32> = (0..5_000).rev().collect();
        quick_sort(&mut v);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut empty: [i32; 0] = [];
        quick_sort(&mut empty);

        let mut one = [1];
        quick_sort(&mut one);
        assert_eq!(one, [1]);
    }
}
