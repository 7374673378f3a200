//! Property tests for primer-collections
//!
//! Containers are checked against the standard library equivalents.

use std::collections::VecDeque;

use primer_collections::{Array, Error, List, Vector};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ============================================================
// Vector properties
// ============================================================

proptest! {
    #[test]
    fn vector_push_back_then_at(values in proptest::collection::vec(any::<i64>(), 0..200)) {
        let mut v = Vector::new();
        for &x in &values {
            v.push_back(x);
        }

        prop_assert_eq!(v.len(), values.len());
        for (i, x) in values.iter().enumerate() {
            prop_assert_eq!(v.at(i), Ok(x));
        }
        prop_assert_eq!(
            v.at(values.len()),
            Err(Error::IndexOutOfRange { index: values.len(), len: values.len() })
        );
    }

    #[test]
    fn vector_capacity_is_power_of_two(n in 1usize..500) {
        let v: Vector<u8> = (0..n).map(|i| i as u8).collect();
        prop_assert!(v.capacity().is_power_of_two());
        prop_assert!(v.capacity() >= n);
        prop_assert!(v.capacity() < 2 * n);
    }

    #[test]
    fn vector_resize_round_trip(
        values in proptest::collection::vec(any::<i32>(), 0..64),
        k in 0usize..128,
    ) {
        let mut v = Vector::from(values.clone());
        let original = v.len();

        v.resize(k);
        prop_assert_eq!(v.len(), k);
        let keep = original.min(k);
        prop_assert_eq!(&v.as_slice()[..keep], &values[..keep]);

        v.resize(original);
        prop_assert_eq!(v.len(), original);
        prop_assert_eq!(&v.as_slice()[..keep], &values[..keep]);
    }

    #[test]
    fn vector_swap_is_involution(
        a in proptest::collection::vec(any::<i32>(), 0..32),
        b in proptest::collection::vec(any::<i32>(), 0..32),
    ) {
        let mut va = Vector::from(a.clone());
        let mut vb = Vector::from(b.clone());

        va.swap(&mut vb);
        prop_assert_eq!(va.as_slice(), b.as_slice());
        va.swap(&mut vb);
        prop_assert_eq!(va.as_slice(), a.as_slice());
        prop_assert_eq!(vb.as_slice(), b.as_slice());
    }

    #[test]
    fn vector_ordering_matches_slices(
        a in proptest::collection::vec(0i32..4, 0..6),
        b in proptest::collection::vec(0i32..4, 0..6),
    ) {
        let va = Vector::from(a.clone());
        let vb = Vector::from(b.clone());
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        prop_assert_eq!(va == vb, a == b);
    }

    #[test]
    fn vector_insert_erase_match_vec(
        values in proptest::collection::vec(any::<i16>(), 0..32),
        index in 0usize..40,
        x in any::<i16>(),
    ) {
        let mut v = Vector::from(values.clone());
        let mut expected = values.clone();

        let inserted = v.insert(index, x);
        if index <= expected.len() {
            prop_assert_eq!(inserted, Ok(()));
            expected.insert(index, x);
        } else {
            prop_assert!(inserted.is_err());
        }
        prop_assert_eq!(v.as_slice(), expected.as_slice());

        let erased = v.erase(index);
        if index < expected.len() {
            prop_assert_eq!(erased, Ok(expected.remove(index)));
        } else {
            prop_assert!(erased.is_err());
        }
        prop_assert_eq!(v.as_slice(), expected.as_slice());
    }
}

// ============================================================
// Array properties
// ============================================================

proptest! {
    #[test]
    fn array_resize_keeps_prefix(
        values in proptest::collection::vec(any::<u32>(), 0..64),
        k in 0usize..128,
    ) {
        let mut a = Array::from(values.clone());
        a.resize(k);

        let keep = values.len().min(k);
        prop_assert_eq!(a.len(), k);
        prop_assert_eq!(&a.as_slice()[..keep], &values[..keep]);
        prop_assert!(a.as_slice()[keep..].iter().all(|&x| x == 0));
    }
}

// ============================================================
// List properties
// ============================================================

proptest! {
    #[test]
    fn list_push_front_pop_front_identity(
        values in proptest::collection::vec(any::<i32>(), 0..32),
        x in any::<i32>(),
    ) {
        let mut list: List<i32> = values.iter().copied().collect();
        let before = list.clone();

        list.push_front(x);
        prop_assert_eq!(list.pop_front(), Ok(x));
        prop_assert_eq!(list, before);
    }

    #[test]
    fn list_forward_is_reverse_of_backward(values in proptest::collection::vec(any::<u8>(), 0..64)) {
        let list: List<u8> = values.iter().copied().collect();

        let forward: Vec<u8> = list.iter().copied().collect();
        let mut backward: Vec<u8> = list.iter().rev().copied().collect();
        backward.reverse();

        prop_assert_eq!(&forward, &values);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn list_reverse_twice_restores(values in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut list: List<u8> = values.iter().copied().collect();
        list.reverse();
        let reversed: Vec<u8> = list.iter().copied().collect();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(reversed, expected);

        list.reverse();
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), values);
    }

    #[test]
    fn list_remove_first_match(
        values in proptest::collection::vec(0u8..8, 0..32),
        target in 0u8..8,
    ) {
        let mut list: List<u8> = values.iter().copied().collect();
        let mut expected = values.clone();

        match expected.iter().position(|&v| v == target) {
            Some(pos) => {
                expected.remove(pos);
                prop_assert_eq!(list.remove(&target), Ok(target));
            }
            None => prop_assert_eq!(list.remove(&target), Err(Error::NotFound)),
        }
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected);
    }
}

// ============================================================
// Randomized model checks
// ============================================================

#[test]
fn list_matches_vecdeque_under_random_ops() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut list = List::new();
    let mut model = VecDeque::new();

    for _ in 0..10_000 {
        match rng.random_range(0..7) {
            0 => {
                let x: i32 = rng.random();
                list.push_back(x);
                model.push_back(x);
            }
            1 => {
                let x: i32 = rng.random();
                list.push_front(x);
                model.push_front(x);
            }
            2 => assert_eq!(list.pop_front().ok(), model.pop_front()),
            3 => assert_eq!(list.pop_back().ok(), model.pop_back()),
            4 => {
                let pos = rng.random_range(0..=model.len());
                let x: i32 = rng.random();
                list.insert(pos, x).unwrap();
                model.insert(pos, x);
            }
            5 if !model.is_empty() => {
                let pos = rng.random_range(0..model.len());
                assert_eq!(list.erase(pos).ok(), model.remove(pos));
            }
            _ => {
                list.reverse();
                model.make_contiguous().reverse();
            }
        }

        assert_eq!(list.len(), model.len());
    }

    assert!(list.iter().eq(model.iter()));
}

#[test]
fn vector_matches_vec_under_random_ops() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut v = Vector::new();
    let mut model = Vec::new();

    for _ in 0..10_000 {
        match rng.random_range(0..4) {
            0 | 1 => {
                let x: u64 = rng.random();
                v.push_back(x);
                model.push(x);
            }
            2 => assert_eq!(v.pop_back().ok(), model.pop()),
            _ => {
                let idx = rng.random_range(0..=model.len());
                let x: u64 = rng.random();
                v.insert(idx, x).unwrap();
                model.insert(idx, x);
            }
        }
    }

    assert_eq!(v.as_slice(), model.as_slice());
}
