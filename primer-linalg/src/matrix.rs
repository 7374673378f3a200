//! Square matrices stored row-major in an [`Array`].
//!
//! Element `(row, col)` lives at offset `row * size + col`. Arithmetic
//! between matrices checks that both operands have the same size and reports
//! [`Error::DimensionMismatch`] otherwise.
//!
//! The determinant, cofactor, adjugate and inverse routines use plain
//! cofactor expansion, which is O(n!) in the matrix size. They are meant for
//! the small matrices of teaching examples and are not a substitute for an
//! LU-based solver.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use num_traits::{Float, Num};
use primer_collections::Array;

use crate::{Error, Result};

/// A `size × size` matrix.
///
/// # Example
///
/// ```
/// use primer_linalg::Matrix;
///
/// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
/// let t = m.transpose();
/// assert_eq!(t, Matrix::from_rows(&[[1, 3], [2, 4]]).unwrap());
/// assert_eq!(m.determinant(), -2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    size: usize,
    data: Array<T>,
}

impl<T> Matrix<T> {
    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` for the 0 × 0 matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// All elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// All elements in row-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    /// Iterates elements in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: self.size,
            });
        }
        if col >= self.size {
            return Err(Error::IndexOutOfRange {
                index: col,
                len: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    #[inline]
    fn check_same_size(&self, other: &Self) -> Result<()> {
        if self.size != other.size {
            return Err(Error::DimensionMismatch {
                expected: self.size,
                found: other.size,
            });
        }
        Ok(())
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `row` or `col` is not below `size`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let offset = self.offset(row, col)?;
        Ok(&self.data[offset])
    }

    /// Returns the element at `(row, col)` mutably.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `row` or `col` is not below `size`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `row` or `col` is not below `size`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Returns row `row` as a slice.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `row >= size`.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.size {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: self.size,
            });
        }
        let start = row * self.size;
        Ok(&self.data.as_slice()[start..start + self.size])
    }

    /// Iterates the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks_exact panics on 0, and an empty matrix has no rows anyway
        self.data.as_slice().chunks_exact(self.size.max(1))
    }
}

impl<T: Default> Matrix<T> {
    /// Creates a `size × size` matrix of `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    pub fn new(size: usize) -> Self {
        let len = size.checked_mul(size).expect("matrix size overflow");
        Self {
            size,
            data: Array::with_len(len),
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a `size × size` matrix with every element set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    pub fn from_elem(size: usize, value: T) -> Self {
        let len = size.checked_mul(size).expect("matrix size overflow");
        Self {
            size,
            data: Array::from_elem(len, value),
        }
    }

    /// Builds a matrix from its rows.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if some row's length differs from the
    /// number of rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if let Some(bad) = rows.iter().map(|r| r.as_ref().len()).find(|&len| len != size) {
            return Err(Error::DimensionMismatch {
                expected: size,
                found: bad,
            });
        }

        let data = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().cloned())
            .collect();
        Ok(Self { size, data })
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let n = self.size;
        let data = (0..n * n)
            .map(|i| self.data[(i % n) * n + i / n].clone())
            .collect();
        Self { size: n, data }
    }

    /// Returns the `(size - 1) × (size - 1)` matrix left after deleting
    /// `row` and `col`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `row` or `col` is not below `size`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        self.offset(row, col)?;

        let n = self.size;
        let data = (0..n)
            .filter(|&r| r != row)
            .flat_map(|r| {
                (0..n)
                    .filter(move |&c| c != col)
                    .map(move |c| self.data[r * n + c].clone())
            })
            .collect();
        Ok(Self { size: n - 1, data })
    }
}

impl<T: Copy + Num> Matrix<T> {
    /// Creates a `size × size` matrix of zeros.
    pub fn zeros(size: usize) -> Self {
        Self::from_elem(size, T::zero())
    }

    /// Creates the `size × size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size);
        for i in 0..size {
            m.data[i * size + i] = T::one();
        }
        m
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        self.check_same_size(other)?;
        let data = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self {
            size: self.size,
            data,
        })
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the sizes differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the sizes differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Matrix product, O(n³).
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the sizes differ.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        self.check_same_size(other)?;

        let n = self.size;
        let mut out = Self::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let mut acc = T::zero();
                for k in 0..n {
                    acc = acc + self.data[i * n + k] * other.data[k * n + j];
                }
                out.data[i * n + j] = acc;
            }
        }
        Ok(out)
    }

    /// Multiplies every element by `scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        Self {
            size: self.size,
            data: self.iter().map(|&x| x * scalar).collect(),
        }
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// The empty matrix has determinant one.
    pub fn determinant(&self) -> T {
        let n = self.size;
        match n {
            0 => T::one(),
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            _ => {
                let mut det = T::zero();
                for col in 0..n {
                    let term = self.data[col] * self.minor_determinant(0, col);
                    det = if col % 2 == 0 { det + term } else { det - term };
                }
                det
            }
        }
    }

    /// Determinant of the minor at `(row, col)`; both are in range.
    fn minor_determinant(&self, row: usize, col: usize) -> T {
        self.minor(row, col)
            .map(|m| m.determinant())
            .unwrap_or_else(|_| T::zero())
    }

    /// Signed minor `(-1)^(row + col) · det(minor(row, col))`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `row` or `col` is not below `size`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        let det = self.minor(row, col)?.determinant();
        Ok(if (row + col) % 2 == 0 {
            det
        } else {
            T::zero() - det
        })
    }

    /// Matrix of all cofactors.
    pub fn cofactor_matrix(&self) -> Self {
        let n = self.size;
        let data = (0..n * n)
            .map(|i| {
                let (row, col) = (i / n, i % n);
                let det = self.minor_determinant(row, col);
                if (row + col) % 2 == 0 {
                    det
                } else {
                    T::zero() - det
                }
            })
            .collect();
        Self { size: n, data }
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transpose()
    }
}

impl<T: Float> Matrix<T> {
    /// Inverse as `adjugate / determinant`.
    ///
    /// # Errors
    ///
    /// [`Error::DivideByZero`] if the determinant is zero.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self.adjugate().scale(det.recip()))
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range. [`Matrix::get`] is the
    /// checked form.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.size && col < self.size,
            "matrix index ({row}, {col}) out of range for size {}",
            self.size
        );
        &self.data[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.size && col < self.size,
            "matrix index ({row}, {col}) out of range for size {}",
            self.size
        );
        &mut self.data[row * self.size + col]
    }
}

impl<T: Copy + Num> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn mul(self, scalar: T) -> Matrix<T> {
        self.scale(scalar)
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// One row per line, elements separated by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
