// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Error type shared by the checked math APIs.
//!
//! Only the `try_*`/`checked_*` entry points and the fallible matrix
//! accessors return these. The plain operators keep the silent policies
//! (division by zero is a no-op, zero-length normalization is a no-op, and
//! out-of-domain transcendentals yield NaN).

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type MathResult<T> = Result<T, MathError>;

/// Failure conditions reported by the checked math APIs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// Inversion was requested for a matrix whose determinant magnitude is at
    /// or below the singularity threshold.
    #[error("singular matrix: |det| = {determinant} <= {threshold}")]
    SingularMatrix {
        /// Determinant of the rejected matrix, widened to `f64`.
        determinant: f64,
        /// Threshold the determinant was compared against.
        threshold: f64,
    },
    /// Matrix element access outside the matrix dimension.
    #[error("index ({row}, {col}) out of range for a {dim}x{dim} matrix")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Matrix dimension.
        dim: usize,
    },
    /// Division by exactly zero.
    #[error("division by zero")]
    ZeroDivisor,
    /// Normalization of a zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
    /// Normalization of a zero-magnitude quaternion.
    #[error("cannot normalize a zero-magnitude quaternion")]
    DegenerateQuaternion,
}
