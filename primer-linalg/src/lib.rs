//! Small dense linear algebra on top of `primer-collections`.
//!
//! - [`Matrix`] - square `size × size` matrix, row-major
//! - [`VectorNd`] - N-dimensional vector
//!
//! Element types are any [`num_traits::Num`] + `Copy` scalar. Operations
//! that need square roots or reciprocals (norms, normalization, projection,
//! matrix inverse) additionally require [`num_traits::Float`].
//!
//! Operations whose operands must agree in size return
//! [`Error::DimensionMismatch`] instead of panicking, and divisions by zero
//! return [`Error::DivideByZero`]. The error type is shared with
//! `primer-collections`.
//!
//! ```
//! use primer_linalg::{Matrix, VectorNd};
//!
//! let rot = Matrix::from_rows(&[[0.0, -1.0], [1.0, 0.0]])?;
//! let inv = rot.inverse()?;
//! assert_eq!(rot.checked_mul(&inv)?, Matrix::identity(2));
//!
//! let mut v = VectorNd::from([3.0, 4.0]);
//! assert_eq!(v.norm(), 5.0);
//! v.normalize()?;
//! # Ok::<(), primer_linalg::Error>(())
//! ```

#![warn(missing_docs)]

pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use primer_collections::{Error, Result};
pub use vector::VectorNd;
