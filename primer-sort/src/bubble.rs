//! Bubble sort.

/// Sorts `v` ascending with bubble sort.
///
/// O(n²) worst and average case, O(n) when already sorted. Stable.
#[inline]
pub fn bubble_sort<T: PartialOrd>(v: &mut [T]) {
    bubble_sort_by(v, |a, b| a.lt(b));
}

/// Sorts `v` with bubble sort, ordering by `is_less`.
///
/// Makes adjacent-pair passes until one performs no swap. Each pass settles
/// the largest remaining element, so the scanned range shrinks by one.
pub fn bubble_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut end = v.len();
    loop {
        let mut swapped = false;
        for i in 1..end {
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i, i - 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_reverse_input() {
        let mut v = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        bubble_sort(&mut v);
        assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn single_pass_when_sorted() {
        let mut v = [1, 2, 3, 4, 5];
        let mut comparisons = 0;
        bubble_sort_by(&mut v, |a, b| {
            comparisons += 1;
            a < b
        });
        assert_eq!(comparisons, 4);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut empty: Vec<String> = Vec::new();
        bubble_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = [String::from("x")];
        bubble_sort(&mut one);
        assert_eq!(one, [String::from("x")]);
    }

    #[test]
    fn equal_keys_keep_order() {
        let mut v = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        bubble_sort_by(&mut v, |a, b| a.0 < b.0);
        assert_eq!(v, [(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }
}
