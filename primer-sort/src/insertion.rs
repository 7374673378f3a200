//! Insertion sort.

/// Sorts `v` ascending with insertion sort.
///
/// O(n²) worst case, O(n) on already sorted input. Stable.
#[inline]
pub fn insertion_sort<T: PartialOrd>(v: &mut [T]) {
    insertion_sort_by(v, |a, b| a.lt(b));
}

/// Sorts `v` with insertion sort, ordering by `is_less`.
///
/// Each key moves left only past predecessors that are strictly greater, so
/// equal elements keep their input order.
pub fn insertion_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_input() {
        let mut v = [5, 2, 4, 6, 1, 3];
        insertion_sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn sorted_input_is_linear() {
        let mut v: Vec<u32> = (0..100).collect();
        let mut comparisons = 0;
        insertion_sort_by(&mut v, |a, b| {
            comparisons += 1;
            a < b
        });
        assert_eq!(comparisons, 99);
    }

    #[test]
    fn equal_keys_keep_order() {
        let mut v = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        insertion_sort_by(&mut v, |a, b| a.0 < b.0);
        assert_eq!(v, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn floats() {
        let mut v = [2.5, -1.0, 0.0, 10.25];
        insertion_sort(&mut v);
        assert_eq!(v, [-1.0, 0.0, 2.5, 10.25]);
    }
}
