//! Top-down merge sort.

/// Sorts `v` ascending with merge sort.
///
/// O(n log n) comparisons in every case. Each merge clones its two halves
/// into temporary buffers, so O(n) auxiliary space per level. Stable.
#[inline]
pub fn merge_sort<T: PartialOrd + Clone>(v: &mut [T]) {
    merge_sort_by(v, |a, b| a.lt(b));
}

/// Sorts `v` with merge sort, ordering by `is_less`.
pub fn merge_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    sort(v, &mut is_less);
}

fn sort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return;
    }

    let mid = v.len() / 2;
    sort(&mut v[..mid], is_less);
    sort(&mut v[mid..], is_less);
    merge(v, mid, is_less);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]`.
///
/// On ties the left run wins, which is what keeps the sort stable.
fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut left = v[..mid].to_vec().into_iter().peekable();
    let mut right = v[mid..].to_vec().into_iter().peekable();

    for slot in v.iter_mut() {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => is_less(r, l),
            (None, Some(_)) => true,
            _ => false,
        };

        let next = if take_right { right.next() } else { left.next() };
        if let Some(value) = next {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_odd_and_even_lengths() {
        let mut odd = [5, 1, 4, 2, 3];
        merge_sort(&mut odd);
        assert_eq!(odd, [1, 2, 3, 4, 5]);

        let mut even = [8, 7, 6, 5, 4, 3, 2, 1];
        merge_sort(&mut even);
        assert_eq!(even, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn ties_favour_left_run() {
        let mut v = [(1, 0), (0, 1), (1, 2), (0, 3), (1, 4), (0, 5)];
        merge_sort_by(&mut v, |a, b| a.0 < b.0);
        assert_eq!(v, [(0, 1), (0, 3), (0, 5), (1, 0), (1, 2), (1, 4)]);
    }

    #[test]
    fn merge_interleaves_runs() {
        let mut v = [1, 4, 7, 2, 3, 8];
        merge(&mut v, 3, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [1, 2, 3, 4, 7, 8]);
    }

    #[test]
    fn strings() {
        let mut v = ["pear", "apple", "fig", "banana"].map(String::from);
        merge_sort(&mut v);
        assert_eq!(v, ["apple", "banana", "fig", "pear"].map(String::from));
    }
}
