//! N-dimensional numeric vectors.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use num_traits::{Float, Num};
use primer_collections::Array;

use crate::{Error, Result};

/// A fixed-dimension vector backed by an [`Array`].
///
/// ```
/// use primer_linalg::VectorNd;
///
/// let a = VectorNd::from([1, 2, 3]);
/// let b = VectorNd::from([4, 5, 6]);
/// assert_eq!(a.dot(&b), Ok(32));
/// assert_eq!(a.cross(&b), Ok(VectorNd::from([-3, 6, -3])));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct VectorNd<T> {
    data: Array<T>,
}

impl<T> VectorNd<T> {
    /// Number of components.
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for the zero-dimensional vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Component `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= dim`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.data.at(index)
    }

    /// Component `index`, mutably.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= dim`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.data.at_mut(index)
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    /// Iterates the components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    fn check_same_dim(&self, other: &Self) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                found: other.dim(),
            });
        }
        Ok(())
    }
}

impl<T: Default> VectorNd<T> {
    /// Creates a vector of `dim` default (zero) components.
    pub fn new(dim: usize) -> Self {
        Self {
            data: Array::with_len(dim),
        }
    }
}

impl<T: Clone> VectorNd<T> {
    /// Copies the components out of `values`.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: Array::from(values),
        }
    }

    /// Returns a copy with the components in reverse order.
    pub fn reversed(&self) -> Self {
        self.iter().rev().cloned().collect()
    }
}

impl<T: Copy + Num> VectorNd<T> {
    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        self.check_same_dim(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    /// Inner product.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_same_dim(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Cross product. Only defined in three dimensions.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] with `expected: 3` if either operand is
    /// not three-dimensional.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        for v in [self, other] {
            if v.dim() != 3 {
                return Err(Error::DimensionMismatch {
                    expected: 3,
                    found: v.dim(),
                });
            }
        }

        let (a, b) = (self.as_slice(), other.as_slice());
        Ok(Self::from([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Component-wise difference.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        self.iter().map(|&x| x * scalar).collect()
    }

    /// Divides every component by `scalar`.
    ///
    /// # Errors
    ///
    /// [`Error::DivideByZero`] if `scalar` is zero.
    pub fn checked_div(&self, scalar: T) -> Result<Self> {
        if scalar.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self.iter().map(|&x| x / scalar).collect())
    }
}

impl<T: Float> VectorNd<T> {
    /// Euclidean length.
    pub fn norm(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
    }

    /// Scales `self` to unit length in place.
    ///
    /// # Errors
    ///
    /// [`Error::DivideByZero`] if the norm is zero; `self` is unchanged.
    pub fn normalize(&mut self) -> Result<()> {
        let norm = self.norm();
        if norm.is_zero() {
            return Err(Error::DivideByZero);
        }
        for x in self.data.iter_mut() {
            *x = *x / norm;
        }
        Ok(())
    }

    /// Returns a unit-length copy.
    ///
    /// # Errors
    ///
    /// [`Error::DivideByZero`] if the norm is zero.
    pub fn normalized(&self) -> Result<Self> {
        let mut out = self.clone();
        out.normalize()?;
        Ok(out)
    }

    /// Projection of `self` onto `onto`: `onto · (self·onto / onto·onto)`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the dimensions differ, or
    /// [`Error::DivideByZero`] if `onto` is the zero vector.
    pub fn projection(&self, onto: &Self) -> Result<Self> {
        let num = self.dot(onto)?;
        let den = onto.dot(onto)?;
        if den.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(onto.scale(num / den))
    }
}

impl<T> FromIterator<T> for VectorNd<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for VectorNd<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            data: Array::from(values),
        }
    }
}

impl<T> From<Vec<T>> for VectorNd<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            data: Array::from(values),
        }
    }
}

impl<T> Index<usize> for VectorNd<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for VectorNd<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Copy + Num> Mul<T> for &VectorNd<T> {
    type Output = VectorNd<T>;

    #[inline]
    fn mul(self, scalar: T) -> VectorNd<T> {
        self.scale(scalar)
    }
}

impl<'a, T> IntoIterator for &'a VectorNd<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for VectorNd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VectorNd").field(&self.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for VectorNd<T> {
    /// `(x, y, z)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &VectorNd<f64>, b: &[f64]) -> bool {
        a.dim() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-12)
    }

    #[test]
    fn new_is_zeroed() {
        let v: VectorNd<f32> = VectorNd::new(4);
        assert_eq!(v.dim(), 4);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn checked_access() {
        let mut v = VectorNd::from([1, 2, 3]);
        assert_eq!(v.get(2), Ok(&3));
        assert_eq!(v.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        *v.get_mut(0).unwrap() = 10;
        v[1] = 20;
        assert_eq!(v.as_slice(), &[10, 20, 3]);
    }

    #[test]
    fn dot_product() {
        let a = VectorNd::from([1, 2, 3]);
        let b = VectorNd::from([4, 5, 6]);
        assert_eq!(a.dot(&b), Ok(32));
        assert_eq!(
            a.dot(&VectorNd::from([1, 2])),
            Err(Error::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn cross_product() {
        let a = VectorNd::from([1, 2, 3]);
        let b = VectorNd::from([4, 5, 6]);
        assert_eq!(a.cross(&b), Ok(VectorNd::from([-3, 6, -3])));
        assert_eq!(b.cross(&a), Ok(VectorNd::from([3, -6, 3])));

        let x = VectorNd::from([1, 0, 0]);
        let y = VectorNd::from([0, 1, 0]);
        assert_eq!(x.cross(&y), Ok(VectorNd::from([0, 0, 1])));
    }

    #[test]
    fn cross_requires_three_dimensions() {
        let a = VectorNd::from([1, 2]);
        let b = VectorNd::from([1, 2, 3]);
        let err = Err(Error::DimensionMismatch {
            expected: 3,
            found: 2,
        });
        assert_eq!(a.cross(&b), err);
        assert_eq!(b.cross(&a), err);
    }

    #[test]
    fn add_sub_scale() {
        let a = VectorNd::from([1, 2, 3]);
        let b = VectorNd::from([4, 5, 6]);
        assert_eq!(a.checked_add(&b), Ok(VectorNd::from([5, 7, 9])));
        assert_eq!(b.checked_sub(&a), Ok(VectorNd::from([3, 3, 3])));
        assert_eq!(a.scale(2), VectorNd::from([2, 4, 6]));
        assert_eq!(&a * 0, VectorNd::new(3));
        assert!(a.checked_add(&VectorNd::from([1])).is_err());
    }

    #[test]
    fn divide_by_scalar() {
        let a = VectorNd::from([2.0, 4.0, 6.0]);
        assert_eq!(a.checked_div(2.0), Ok(VectorNd::from([1.0, 2.0, 3.0])));
        assert_eq!(a.checked_div(0.0), Err(Error::DivideByZero));
    }

    #[test]
    fn norm_and_normalize() {
        let mut v = VectorNd::from([3.0, 4.0]);
        assert_eq!(v.norm(), 5.0);

        v.normalize().unwrap();
        assert!(close(&v, &[0.6, 0.8]));
        assert!((v.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_vector_fails() {
        let mut v: VectorNd<f64> = VectorNd::new(3);
        assert_eq!(v.normalize(), Err(Error::DivideByZero));
        assert_eq!(v, VectorNd::new(3));
        assert_eq!(v.normalized(), Err(Error::DivideByZero));
    }

    #[test]
    fn projection_onto_axis() {
        let v = VectorNd::from([3.0, 4.0, 5.0]);
        let x = VectorNd::from([2.0, 0.0, 0.0]);
        assert!(close(&v.projection(&x).unwrap(), &[3.0, 0.0, 0.0]));

        let zero = VectorNd::new(3);
        assert_eq!(v.projection(&zero), Err(Error::DivideByZero));
        assert!(matches!(
            v.projection(&VectorNd::from([1.0])),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn reversed_copy() {
        let v = VectorNd::from([1, 2, 3, 4]);
        assert_eq!(v.reversed(), VectorNd::from([4, 3, 2, 1]));
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn formatting() {
        let v = VectorNd::from([1, -2, 3]);
        assert_eq!(v.to_string(), "(1, -2, 3)");
        assert_eq!(format!("{v:?}"), "VectorNd([1, -2, 3])");
        assert_eq!(VectorNd::<i32>::new(0).to_string(), "()");
    }
}
