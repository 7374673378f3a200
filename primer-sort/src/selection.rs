//! Selection sort.

/// Sorts `v` ascending with selection sort.
///
/// O(n²) comparisons, at most n - 1 swaps. Not stable.
///
/// ```
/// let mut v = [1000, -3000, 0, 57, -42];
/// primer_sort::selection_sort(&mut v);
/// assert_eq!(v, [-3000, -42, 0, 57, 1000]);
/// ```
#[inline]
pub fn selection_sort<T: PartialOrd>(v: &mut [T]) {
    selection_sort_by(v, |a, b| a.lt(b));
}

/// Sorts `v` with selection sort, ordering by `is_less`.
///
/// For each position, the minimum of the unsorted tail is swapped into place.
pub fn selection_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }
        if min != i {
            v.swap(i, min);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_mixed_signs() {
        let mut v = [1000, -3000, 0, 57, -42];
        selection_sort(&mut v);
        assert_eq!(v, [-3000, -42, 0, 57, 1000]);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut empty: [u8; 0] = [];
        selection_sort(&mut empty);

        let mut one = [7];
        selection_sort(&mut one);
        assert_eq!(one, [7]);
    }

    #[test]
    fn descending_comparator() {
        let mut v = [3, 1, 4, 1, 5, 9, 2, 6];
        selection_sort_by(&mut v, |a, b| a > b);
        assert_eq!(v, [9, 6, 5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn comparisons_do_not_depend_on_input() {
        for input in [[5, 4, 3, 2, 1], [1, 2, 3, 4, 5], [3, 3, 3, 3, 3]] {
            let mut v = input;
            let mut comparisons = 0;
            selection_sort_by(&mut v, |a, b| {
                comparisons += 1;
                a < b
            });
            assert!(v.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(comparisons, 10);
        }
    }
}
