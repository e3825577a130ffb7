use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::traits::RealScalar;

/// Collaborator for overdetermined systems.
///
/// [`solve_linear`] hands the least-squares fallback to an implementation
/// of this trait rather than carrying its own minimizer. The coefficient
/// matrix arrives pre-transposed (one column per equation).
pub trait LeastSquaresSolver<T> {
    fn solve_least_squares(&self, at: &Matrix<T>, b: &[T]) -> Result<Vec<T>>;
}

/// Solve `Ax = b`, dispatching on the shape of `A`.
///
/// - Square: LU decomposition and back-substitution.
/// - More rows than columns (overdetermined): delegated to the
///   least-squares collaborator on `(Aᵀ, b)`; use with care, the result
///   minimizes the residual rather than satisfying every equation.
/// - Fewer rows than columns: [`MatrixError::Underdetermined`], explicitly
///   unsupported.
pub fn solve_linear<T: RealScalar>(
    a: &Matrix<T>,
    b: &[T],
    lsq: &impl LeastSquaresSolver<T>,
) -> Result<Vec<T>> {
    if a.is_square() {
        return a.solve(b);
    }
    if a.nrows() > a.ncols() {
        if b.len() != a.nrows() {
            return Err(MatrixError::DimensionMismatch {
                expected: (a.nrows(), 1),
                got: (b.len(), 1),
            });
        }
        return lsq.solve_least_squares(&a.transpose(), b);
    }
    Err(MatrixError::Underdetermined {
        nrows: a.nrows(),
        ncols: a.ncols(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Normal-equations solver: x = (A^T A)^-1 A^T b, written against the
    // transposed matrix this module hands out.
    struct NormalEquations;

    impl LeastSquaresSolver<f64> for NormalEquations {
        fn solve_least_squares(&self, at: &Matrix<f64>, b: &[f64]) -> Result<Vec<f64>> {
            let ata = at * &at.transpose();
            let atb = at * &Matrix::column_matrix(b);
            ata.solve(atb.as_slice())
        }
    }

    #[test]
    fn square_uses_lu() {
        let a = Matrix::from_rows(2, 2, &[3.0_f64, 2.0, 1.0, 4.0]);
        let x = solve_linear(&a, &[7.0, 9.0], &NormalEquations).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn overdetermined_delegates_to_least_squares() {
        // consistent 3x2 system: x = [1, 2]
        let a = Matrix::from_rows(3, 2, &[1.0_f64, 0.0, 0.0, 1.0, 1.0, 1.0]);
        let b = [1.0, 2.0, 3.0];
        let x = solve_linear(&a, &b, &NormalEquations).unwrap();
        assert_eq!(x.len(), 2);
        assert!((x[0] - 1.0).abs() < 1e-10);
        assert!((x[1] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn overdetermined_length_mismatch() {
        let a = Matrix::<f64>::zeros(3, 2);
        assert_eq!(
            solve_linear(&a, &[1.0, 2.0], &NormalEquations),
            Err(MatrixError::DimensionMismatch {
                expected: (3, 1),
                got: (2, 1),
            })
        );
    }

    #[test]
    fn underdetermined_rejected() {
        let a = Matrix::<f64>::zeros(2, 3);
        assert_eq!(
            solve_linear(&a, &[1.0, 2.0], &NormalEquations),
            Err(MatrixError::Underdetermined { nrows: 2, ncols: 3 })
        );
    }
}
