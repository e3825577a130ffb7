use log::warn;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::traits::RealScalar;

/// Tuning knobs for the LU factorization.
///
/// `zero_pivot_substitute` replaces an exactly zero pivot so that the
/// factorization can continue instead of dividing by zero; the result is
/// numerically degraded and the decomposition is flagged singular.
/// `suppress_diagnostics` silences the warning logged when a singular
/// matrix is encountered; it never changes control flow.
#[derive(Debug, Clone, Copy)]
pub struct LuConfig<T> {
    pub zero_pivot_substitute: T,
    pub suppress_diagnostics: bool,
}

impl<T: RealScalar> Default for LuConfig<T> {
    fn default() -> Self {
        Self {
            zero_pivot_substitute: T::from_f64(1.0e-100),
            suppress_diagnostics: false,
        }
    }
}

/// LU factorization of a square matrix, with implicitly scaled partial
/// pivoting (Crout's method).
///
/// Stores the packed L/U factors (unit lower triangle implicit), the row
/// permutation record and the swap-parity sign. A structurally singular
/// input does **not** produce an error: the decomposition is returned with
/// [`is_singular`](Self::is_singular) set, NaN factors where the
/// degeneracy was caught up front, and NaN determinants. Callers that need
/// strict correctness must check the flag.
///
/// # Example
///
/// ```
/// use densemat::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
/// let lu = a.lu().unwrap();
///
/// let x = lu.solve(&[4.0, 11.0]).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
///
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// assert!(!lu.is_singular());
/// ```
#[derive(Debug, Clone)]
pub struct LuDecomposition<T> {
    lu: Matrix<T>,
    perm: Vec<usize>,
    sign: T,
    singular: bool,
}

impl<T: RealScalar> LuDecomposition<T> {
    /// Factor a square matrix with the default configuration.
    ///
    /// Errors only if the matrix is not square; singularity is reported
    /// through [`is_singular`](Self::is_singular) instead.
    pub fn new(a: &Matrix<T>) -> Result<Self> {
        Self::with_config(a, LuConfig::default())
    }

    /// Factor a square matrix with an explicit configuration.
    pub fn with_config(a: &Matrix<T>, config: LuConfig<T>) -> Result<Self> {
        if !a.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: a.nrows(),
                ncols: a.ncols(),
            });
        }
        let n = a.nrows();
        let mut lu = a.clone();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut sign = T::one();
        let mut singular = false;

        // Per-row reciprocal of the largest magnitude, for implicit
        // scaling of the pivot search. A row with no nonzero element makes
        // the matrix singular outright: NaN-fill and stop.
        let mut vv = vec![T::zero(); n];
        for i in 0..n {
            let mut big = T::zero();
            for j in 0..n {
                let mag = lu[(i, j)].abs();
                if mag > big {
                    big = mag;
                }
            }
            if big == T::zero() {
                if !config.suppress_diagnostics {
                    warn!(
                        "LU decomposition of a singular matrix (row {i} is all zero); \
                         NaN factors returned and singular flag set"
                    );
                }
                for k in 0..n {
                    for j in 0..n {
                        lu[(k, j)] = T::nan();
                    }
                }
                return Ok(Self {
                    lu,
                    perm,
                    sign,
                    singular: true,
                });
            }
            vv[i] = T::one() / big;
        }

        for j in 0..n {
            for i in 0..j {
                let mut sum = lu[(i, j)];
                for k in 0..i {
                    sum = sum - lu[(i, k)] * lu[(k, j)];
                }
                lu[(i, j)] = sum;
            }

            let mut big = T::zero();
            let mut imax = j;
            for i in j..n {
                let mut sum = lu[(i, j)];
                for k in 0..j {
                    sum = sum - lu[(i, k)] * lu[(k, j)];
                }
                lu[(i, j)] = sum;
                let scaled = vv[i] * sum.abs();
                if scaled >= big {
                    big = scaled;
                    imax = i;
                }
            }

            if j != imax {
                lu.swap_rows(j, imax);
                sign = -sign;
                vv[imax] = vv[j];
            }
            // perm records the swap partner chosen at step j, not a final
            // destination index: solve replays these swaps in order.
            perm[j] = imax;

            if big == T::zero() && !singular {
                singular = true;
                if !config.suppress_diagnostics {
                    warn!(
                        "LU decomposition found no usable pivot in column {j}; \
                         matrix is singular, substituting {:?} and continuing",
                        config.zero_pivot_substitute
                    );
                }
            }
            if lu[(j, j)] == T::zero() {
                lu[(j, j)] = config.zero_pivot_substitute;
            }
            if j != n - 1 {
                let inv_pivot = T::one() / lu[(j, j)];
                for i in (j + 1)..n {
                    lu[(i, j)] = lu[(i, j)] * inv_pivot;
                }
            }
        }

        Ok(Self {
            lu,
            perm,
            sign,
            singular,
        })
    }

    /// Whether the factorization found the matrix singular (an all-zero
    /// row, or a pivot column with no nonzero candidate).
    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// The packed L/U factor matrix (unit lower-triangle diagonal implicit).
    pub fn factors(&self) -> &Matrix<T> {
        &self.lu
    }

    /// The row-swap record: `permutation()[j]` is the row exchanged with
    /// row `j` at elimination step `j`. Replay in order to permute a
    /// right-hand side; do not index with it directly.
    pub fn permutation(&self) -> &[usize] {
        &self.perm
    }

    /// `+1` for an even number of row swaps, `-1` for odd.
    pub fn sign(&self) -> T {
        self.sign
    }

    /// The unit lower-triangular factor as its own matrix.
    pub fn l(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        Matrix::from_fn(n, n, |i, j| {
            if i == j {
                T::one()
            } else if i > j {
                self.lu[(i, j)]
            } else {
                T::zero()
            }
        })
    }

    /// The upper-triangular factor as its own matrix.
    pub fn u(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        Matrix::from_fn(n, n, |i, j| if i <= j { self.lu[(i, j)] } else { T::zero() })
    }

    /// Solve `Ax = b` using the stored factors.
    ///
    /// Errors if `b` does not have length `n`. A singular decomposition
    /// yields NaN or meaningless entries rather than an error.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>> {
        let n = self.lu.nrows();
        if b.len() != n {
            return Err(MatrixError::DimensionMismatch {
                expected: (n, 1),
                got: (b.len(), 1),
            });
        }
        let mut x = b.to_vec();

        // Replay the recorded swaps in order; each step only touches
        // indices >= i, so this is safe to do as a separate pass.
        for i in 0..n {
            x.swap(i, self.perm[i]);
        }

        // Forward elimination against the implicit unit lower triangle
        for i in 0..n {
            let mut sum = x[i];
            for j in 0..i {
                sum = sum - self.lu[(i, j)] * x[j];
            }
            x[i] = sum;
        }

        // Back substitution against the upper triangle
        for i in (0..n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum = sum - self.lu[(i, j)] * x[j];
            }
            x[i] = sum / self.lu[(i, i)];
        }

        Ok(x)
    }

    /// Inverse via one solve per identity column.
    ///
    /// A singular decomposition yields a NaN/garbage-filled matrix; check
    /// [`is_singular`](Self::is_singular) first when that matters.
    pub fn inverse(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        let mut inv = Matrix::zeros(n, n);
        let mut e = vec![T::zero(); n];

        for col in 0..n {
            if col > 0 {
                e[col - 1] = T::zero();
            }
            e[col] = T::one();
            // length always matches; the factors are n x n
            if let Ok(x) = self.solve(&e) {
                for row in 0..n {
                    inv[(row, col)] = x[row];
                }
            }
        }

        inv
    }

    /// Determinant: swap sign times the product of the pivoted diagonal.
    ///
    /// NaN when the decomposition is flagged singular.
    pub fn det(&self) -> T {
        if self.singular {
            return T::nan();
        }
        let n = self.lu.nrows();
        let mut d = self.sign;
        for i in 0..n {
            d = d * self.lu[(i, i)];
        }
        d
    }

    /// Natural log of the determinant, as `ln(sign) + Σ ln(U[i][i])`.
    ///
    /// Avoids the overflow/underflow that [`det`](Self::det) suffers on
    /// large matrices. An odd number of row swaps makes `ln(sign)` NaN;
    /// that is preserved rather than corrected, since the real-valued log
    /// of a negative determinant is genuinely undefined. NaN when flagged
    /// singular.
    pub fn ln_det(&self) -> T {
        if self.singular {
            return T::nan();
        }
        let n = self.lu.nrows();
        let mut d = self.sign.ln();
        for i in 0..n {
            d = d + self.lu[(i, i)].ln();
        }
        d
    }
}

// ── Convenience methods on square matrices ──────────────────────────

impl<T: RealScalar> Matrix<T> {
    /// LU decomposition with implicitly scaled partial pivoting.
    pub fn lu(&self) -> Result<LuDecomposition<T>> {
        LuDecomposition::new(self)
    }

    /// LU decomposition with an explicit configuration.
    pub fn lu_with_config(&self, config: LuConfig<T>) -> Result<LuDecomposition<T>> {
        LuDecomposition::with_config(self, config)
    }

    /// Solve `Ax = b` for `x` via LU decomposition.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(3, 3, &[
    ///     2.0_f64, 1.0, -1.0,
    ///     -3.0, -1.0, 2.0,
    ///     -2.0, 1.0, 2.0,
    /// ]);
    /// let x = a.solve(&[8.0, -11.0, -3.0]).unwrap();
    /// assert!((x[0] - 2.0).abs() < 1e-12);
    /// assert!((x[1] - 3.0).abs() < 1e-12);
    /// assert!((x[2] - (-1.0)).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>> {
        self.lu()?.solve(b)
    }

    /// Matrix inverse.
    ///
    /// 1x1 and 2x2 matrices use closed forms and report an exactly zero
    /// determinant as [`MatrixError::Singular`]; larger matrices go
    /// through the LU factorization, whose singular path yields NaN
    /// entries instead of an error.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let inv = a.inverse().unwrap();
    /// let id = &a * &inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Matrix<T>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows(),
                ncols: self.ncols(),
            });
        }
        let n = self.nrows();
        match n {
            1 => {
                let a = self[(0, 0)];
                if a == T::zero() {
                    return Err(MatrixError::Singular);
                }
                Ok(Matrix::fill(1, 1, T::one() / a))
            }
            2 => {
                let (a, b) = (self[(0, 0)], self[(0, 1)]);
                let (c, d) = (self[(1, 0)], self[(1, 1)]);
                let det = a * d - b * c;
                if det == T::zero() {
                    return Err(MatrixError::Singular);
                }
                Ok(Matrix::from_vec(
                    2,
                    2,
                    vec![d / det, -b / det, -c / det, a / det],
                ))
            }
            _ => Ok(self.lu()?.inverse()),
        }
    }

    /// Determinant: closed form for 2x2, otherwise via LU.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[4.0_f64, 3.0, 6.0, 3.0]);
    /// assert_eq!(a.det().unwrap(), -6.0);
    /// ```
    pub fn det(&self) -> Result<T> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows(),
                ncols: self.ncols(),
            });
        }
        if self.nrows() == 2 {
            return Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]);
        }
        Ok(self.lu()?.det())
    }

    /// Natural log of the determinant; see [`LuDecomposition::ln_det`].
    pub fn ln_det(&self) -> Result<T> {
        Ok(self.lu()?.ln_det())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_2x2() {
        // 3x + 2y = 7
        // x + 4y = 9
        let a = Matrix::from_rows(2, 2, &[3.0_f64, 2.0, 1.0, 4.0]);
        let x = a.solve(&[7.0, 9.0]).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn solve_3x3() {
        let a = Matrix::from_rows(
            3,
            3,
            &[2.0_f64, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0],
        );
        let x = a.solve(&[8.0, -11.0, -3.0]).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
        assert!((x[2] - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn solve_verify_residual() {
        let a = Matrix::from_rows(
            4,
            4,
            &[
                1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 2.0, 6.0, 4.0, 1.0, 3.0, 1.0, 9.0, 2.0,
            ],
        );
        let b = [10.0, 26.0, 13.0, 15.0];
        let x = a.solve(&b).unwrap();

        for i in 0..4 {
            let mut row_sum = 0.0;
            for j in 0..4 {
                row_sum += a[(i, j)] * x[j];
            }
            assert!(
                (row_sum - b[i]).abs() < 1e-10,
                "residual[{}] = {}",
                i,
                row_sum - b[i]
            );
        }
    }

    #[test]
    fn solve_length_mismatch() {
        let a = Matrix::from_rows(2, 2, &[3.0_f64, 2.0, 1.0, 4.0]);
        let lu = a.lu().unwrap();
        assert_eq!(
            lu.solve(&[1.0, 2.0, 3.0]),
            Err(MatrixError::DimensionMismatch {
                expected: (2, 1),
                got: (3, 1),
            })
        );
    }

    #[test]
    fn not_square() {
        let rect = Matrix::<f64>::zeros(2, 3);
        assert_eq!(
            rect.lu().unwrap_err(),
            MatrixError::NotSquare { nrows: 2, ncols: 3 }
        );
        assert!(rect.det().is_err());
        assert!(rect.inverse().is_err());
    }

    #[test]
    fn det_2x2_closed_form() {
        let a = Matrix::from_rows(2, 2, &[4.0_f64, 3.0, 6.0, 3.0]);
        assert_eq!(a.det().unwrap(), -6.0);
        // LU agrees with the closed form
        assert!((a.lu().unwrap().det() - (-6.0)).abs() < 1e-12);
    }

    #[test]
    fn det_3x3() {
        let a = Matrix::from_rows(
            3,
            3,
            &[6.0_f64, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0],
        );
        assert!((a.det().unwrap() - (-306.0)).abs() < 1e-10);
    }

    #[test]
    fn det_matches_cofactor_expansion_4x4() {
        let a = Matrix::from_rows(
            4,
            4,
            &[
                1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 2.0, 6.0, 4.0, 1.0, 3.0, 1.0, 9.0, 2.0,
            ],
        );

        fn cofactor_det(m: &Matrix<f64>) -> f64 {
            let n = m.nrows();
            if n == 1 {
                return m[(0, 0)];
            }
            let mut det = 0.0;
            let mut sign = 1.0;
            for j in 0..n {
                let rows: Vec<usize> = (1..n).collect();
                let cols: Vec<usize> = (0..n).filter(|&c| c != j).collect();
                let minor = m.select(&rows, &cols).unwrap();
                det += sign * m[(0, j)] * cofactor_det(&minor);
                sign = -sign;
            }
            det
        }

        let expected = cofactor_det(&a);
        assert!((a.det().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn inverse_2x2_closed_form() {
        let a = Matrix::from_rows(2, 2, &[4.0_f64, 3.0, 6.0, 3.0]);
        let inv = a.inverse().unwrap();
        assert!((inv[(0, 0)] - (-0.5)).abs() < 1e-12);
        assert!((inv[(0, 1)] - 0.5).abs() < 1e-12);
        assert!((inv[(1, 0)] - 1.0).abs() < 1e-12);
        assert!((inv[(1, 1)] - (-2.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn inverse_1x1() {
        let a = Matrix::fill(1, 1, 4.0_f64);
        assert_eq!(a.inverse().unwrap()[(0, 0)], 0.25);

        let z = Matrix::fill(1, 1, 0.0_f64);
        assert_eq!(z.inverse().unwrap_err(), MatrixError::Singular);
    }

    #[test]
    fn inverse_2x2_singular() {
        let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
        assert_eq!(a.inverse().unwrap_err(), MatrixError::Singular);
    }

    #[test]
    fn inverse_3x3_times_self_is_identity() {
        let a = Matrix::from_rows(
            3,
            3,
            &[1.0_f64, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0],
        );
        let inv = a.inverse().unwrap();
        let id = &a * &inv;
        assert!(id.is_nearly_identity(1e-10));
    }

    #[test]
    fn identity_inverse_and_det() {
        let id = Matrix::<f64>::eye(4);
        assert_eq!(id.inverse().unwrap(), id);
        assert_eq!(id.det().unwrap(), 1.0);
        assert!(!id.is_singular().unwrap());
    }

    #[test]
    fn zero_row_is_flagged_and_nan_filled() {
        let a = Matrix::from_rows(
            3,
            3,
            &[1.0_f64, 2.0, 3.0, 0.0, 0.0, 0.0, 4.0, 5.0, 6.0],
        );
        let lu = a.lu_with_config(LuConfig {
            suppress_diagnostics: true,
            ..LuConfig::default()
        })
        .unwrap();
        assert!(lu.is_singular());
        for i in 0..3 {
            for j in 0..3 {
                assert!(lu.factors()[(i, j)].is_nan());
            }
        }
        assert!(lu.det().is_nan());
    }

    #[test]
    fn duplicate_rows_flagged_singular() {
        let a = Matrix::from_rows(
            3,
            3,
            &[1.0_f64, 2.0, 3.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        );
        let lu = a.lu_with_config(LuConfig {
            suppress_diagnostics: true,
            ..LuConfig::default()
        })
        .unwrap();
        assert!(lu.is_singular());
        assert!(lu.det().is_nan());
    }

    #[test]
    fn factors_reassemble_with_permutation() {
        let a = Matrix::from_rows(
            3,
            3,
            &[2.0_f64, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0],
        );
        let lu = a.lu().unwrap();

        // L*U equals A with the recorded swaps replayed on its rows
        let mut pa = a.clone();
        for (j, &partner) in lu.permutation().iter().enumerate() {
            pa.swap_rows(j, partner);
        }
        let reassembled = lu.l() * lu.u();
        for i in 0..3 {
            for j in 0..3 {
                assert!((reassembled[(i, j)] - pa[(i, j)]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn ln_det_matches_log_of_det() {
        // positive determinant with an even number of swaps
        let a = Matrix::from_rows(
            3,
            3,
            &[4.0_f64, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0],
        );
        let det = a.det().unwrap();
        assert!(det > 0.0);
        let ln_det = a.ln_det().unwrap();
        assert!((ln_det - det.ln()).abs() < 1e-10);
    }

    #[test]
    fn ln_det_negative_sign_is_nan() {
        let lu = Matrix::from_rows(2, 2, &[0.0_f64, 1.0, 1.0, 0.0])
            .lu()
            .unwrap();
        assert_eq!(lu.sign(), -1.0);
        assert!(lu.ln_det().is_nan());
    }

    #[test]
    fn ln_det_avoids_overflow() {
        // det would overflow f64: (1e300)^2 = 1e600
        let a = Matrix::from_diag(&[1.0e300_f64, 1.0e300]);
        let ln_det = a.ln_det().unwrap();
        assert!((ln_det - 2.0 * 1.0e300_f64.ln()).abs() < 1e-6);
    }
}
