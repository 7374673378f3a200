//! Property tests for primer-linalg
//!
//! Integer elements are kept small so products and determinants stay exact.

use primer_linalg::{Error, Matrix, VectorNd};
use primer_sort::Algorithm;
use proptest::prelude::*;

fn matrix(max_size: usize) -> impl Strategy<Value = Matrix<i64>> {
    (0..=max_size).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(-9i64..=9, n), n)
            .prop_map(|rows| Matrix::from_rows(&rows).unwrap())
    })
}

fn pair(max_size: usize) -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (0..=max_size).prop_flat_map(|n| {
        let square = move || {
            proptest::collection::vec(proptest::collection::vec(-9i64..=9, n), n)
                .prop_map(|rows| Matrix::from_rows(&rows).unwrap())
        };
        (square(), square())
    })
}

fn vec3() -> impl Strategy<Value = VectorNd<i64>> {
    proptest::array::uniform3(-100i64..=100).prop_map(VectorNd::from)
}

// ============================================================
// Matrix properties
// ============================================================

proptest! {
    #[test]
    fn transpose_is_an_involution(m in matrix(6)) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn identity_is_neutral(m in matrix(6)) {
        let id = Matrix::identity(m.size());
        prop_assert_eq!(m.checked_mul(&id).unwrap(), m.clone());
        prop_assert_eq!(id.checked_mul(&m).unwrap(), m);
    }

    #[test]
    fn add_then_sub_restores((a, b) in pair(5)) {
        prop_assert_eq!(a.checked_add(&b).unwrap().checked_sub(&b).unwrap(), a);
    }

    #[test]
    fn transpose_reverses_products((a, b) in pair(4)) {
        let lhs = a.checked_mul(&b).unwrap().transpose();
        let rhs = b.transpose().checked_mul(&a.transpose()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn determinant_of_transpose(m in matrix(5)) {
        prop_assert_eq!(m.transpose().determinant(), m.determinant());
    }

    #[test]
    fn determinant_is_multiplicative((a, b) in pair(4)) {
        let product = a.checked_mul(&b).unwrap();
        prop_assert_eq!(product.determinant(), a.determinant() * b.determinant());
    }

    #[test]
    fn adjugate_times_matrix_is_scaled_identity(m in matrix(4)) {
        let expected = Matrix::identity(m.size()).scale(m.determinant());
        prop_assert_eq!(m.checked_mul(&m.adjugate()).unwrap(), expected);
    }

    #[test]
    fn mismatched_sizes_are_rejected(a in matrix(4), b in matrix(4)) {
        prop_assume!(a.size() != b.size());
        let err = Error::DimensionMismatch { expected: a.size(), found: b.size() };
        prop_assert_eq!(a.checked_add(&b), Err(err));
        prop_assert_eq!(a.checked_mul(&b), Err(err));
    }
}

// ============================================================
// Vector properties
// ============================================================

proptest! {
    #[test]
    fn cross_is_orthogonal(a in vec3(), b in vec3()) {
        let c = a.cross(&b).unwrap();
        prop_assert_eq!(c.dot(&a).unwrap(), 0);
        prop_assert_eq!(c.dot(&b).unwrap(), 0);
    }

    #[test]
    fn cross_is_anticommutative(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.cross(&b).unwrap(), b.cross(&a).unwrap().scale(-1));
    }

    #[test]
    fn dot_is_symmetric(values in proptest::collection::vec((-1000i64..1000, -1000i64..1000), 0..32)) {
        let (xs, ys): (Vec<_>, Vec<_>) = values.into_iter().unzip();
        let (a, b) = (VectorNd::from(xs), VectorNd::from(ys));
        prop_assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
    }

    #[test]
    fn reversed_twice_is_identity(values in proptest::collection::vec(any::<i32>(), 0..32)) {
        let v = VectorNd::from(values);
        prop_assert_eq!(v.reversed().reversed(), v);
    }

    #[test]
    fn sorting_components_keeps_norm(values in proptest::collection::vec(-1.0e3f64..1.0e3, 1..32)) {
        let v = VectorNd::from(values);
        let mut sorted = v.clone();
        Algorithm::Merge.sort(sorted.as_mut_slice());

        prop_assert!(sorted.as_slice().windows(2).all(|w| w[0] <= w[1]));
        prop_assert!((sorted.norm() - v.norm()).abs() <= 1e-9 * v.norm().max(1.0));
    }

    #[test]
    fn normalized_has_unit_length(values in proptest::collection::vec(-1.0e3f64..1.0e3, 1..16)) {
        let v = VectorNd::from(values);
        prop_assume!(v.norm() > 1e-6);
        let unit = v.normalized().unwrap();
        prop_assert!((unit.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn projection_residual_is_orthogonal(
        a in proptest::array::uniform3(-100.0f64..100.0),
        b in proptest::array::uniform3(-100.0f64..100.0),
    ) {
        let (a, b) = (VectorNd::from(a), VectorNd::from(b));
        prop_assume!(b.norm() > 1e-3);

        let residual = a.checked_sub(&a.projection(&b).unwrap()).unwrap();
        prop_assert!(residual.dot(&b).unwrap().abs() <= 1e-6 * a.norm().max(1.0) * b.norm());
    }
}
