use core::fmt;

/// Errors from matrix construction, access and linear algebra operations.
///
/// Only precondition violations are reported through this type: shape
/// mismatches, out-of-range indices, and "must be square / symmetric"
/// requirements. Numerical degeneracy (a singular matrix handed to the LU
/// decomposition, a Jacobi sweep budget running out) is *not* an error —
/// it surfaces as flags and NaN sentinels on the decomposition structs.
///
/// ```
/// use densemat::{Matrix, MatrixError};
///
/// let rect = Matrix::<f64>::zeros(2, 3);
/// assert_eq!(
///     rect.lu().unwrap_err(),
///     MatrixError::NotSquare { nrows: 2, ncols: 3 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// An element index is outside the matrix bounds.
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// The operation requires a square matrix.
    NotSquare { nrows: usize, ncols: usize },
    /// The operation requires an exactly symmetric matrix.
    NotSymmetric,
    /// The linear system has fewer equations than unknowns.
    Underdetermined { nrows: usize, ncols: usize },
    /// Matrix is singular and cannot be inverted.
    Singular,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds {
                row,
                col,
                nrows,
                ncols,
            } => {
                write!(
                    f,
                    "index ({row}, {col}) out of bounds for {nrows}x{ncols} matrix"
                )
            }
            Self::DimensionMismatch { expected, got } => {
                write!(
                    f,
                    "dimension mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, got.0, got.1
                )
            }
            Self::NotSquare { nrows, ncols } => {
                write!(f, "matrix is not square ({nrows}x{ncols})")
            }
            Self::NotSymmetric => write!(f, "matrix is not symmetric"),
            Self::Underdetermined { nrows, ncols } => {
                write!(
                    f,
                    "underdetermined system: {nrows} equations, {ncols} unknowns"
                )
            }
            Self::Singular => write!(f, "matrix is singular"),
        }
    }
}

impl std::error::Error for MatrixError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = MatrixError::DimensionMismatch {
            expected: (2, 2),
            got: (2, 3),
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected 2x2, got 2x3");

        let e = MatrixError::NotSquare { nrows: 3, ncols: 4 };
        assert_eq!(e.to_string(), "matrix is not square (3x4)");

        let e = MatrixError::IndexOutOfBounds {
            row: 5,
            col: 0,
            nrows: 2,
            ncols: 2,
        };
        assert_eq!(e.to_string(), "index (5, 0) out of bounds for 2x2 matrix");
    }
}
