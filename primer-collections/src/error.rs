//! Error types shared by every primer crate.

/// Failure kinds reported by containers and the numeric layer.
///
/// Every variant is recoverable by the immediate caller; nothing is retried
/// internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Indexed access outside the valid bound.
    ///
    /// Also returned when reading through a cursor parked on the end sentinel,
    /// in which case `index == len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index (or row/column for matrices).
        index: usize,
        /// The exclusive bound it was checked against.
        len: usize,
    },

    /// Pop, front or back on a container with no elements.
    #[error("container is empty")]
    EmptyContainer,

    /// Binary operation between differently sized operands.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Size required by the left operand or the operation.
        expected: usize,
        /// Size actually supplied.
        found: usize,
    },

    /// Division by zero, or normalising/projecting against a zero vector.
    #[error("division by zero")]
    DivideByZero,

    /// Remove-by-value found no matching element.
    #[error("value not found")]
    NotFound,
}

/// `Result` alias with [`Error`] as the error type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    #[inline]
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }
}
