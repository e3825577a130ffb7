use crate::error::Result;
use crate::traits::RealScalar;

use super::Matrix;

// ── Exact structural predicates ─────────────────────────────────────

impl<T: RealScalar> Matrix<T> {
    /// Check if the matrix is symmetric (`A == A^T`, exact comparison).
    ///
    /// ```
    /// use densemat::Matrix;
    /// let sym = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 3.0]);
    /// assert!(sym.is_symmetric());
    /// ```
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.nrows;
        for i in 0..n {
            for j in (i + 1)..n {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }

    /// Check if every element is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == T::zero())
    }

    /// Check if the matrix is exactly the identity.
    pub fn is_identity(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                let expected = if i == j { T::one() } else { T::zero() };
                if self[(i, j)] != expected {
                    return false;
                }
            }
        }
        true
    }

    /// Check if all off-diagonal elements are exactly zero.
    pub fn is_diagonal(&self) -> bool {
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                if i != j && self[(i, j)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Check if all elements below the diagonal are exactly zero.
    pub fn is_upper_triangular(&self) -> bool {
        for i in 0..self.nrows {
            for j in 0..i.min(self.ncols) {
                if self[(i, j)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Check if all elements above the diagonal are exactly zero.
    pub fn is_lower_triangular(&self) -> bool {
        for i in 0..self.nrows {
            for j in (i + 1)..self.ncols {
                if self[(i, j)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Check if all elements more than one position off the diagonal are
    /// exactly zero.
    pub fn is_tridiagonal(&self) -> bool {
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                let band = i.abs_diff(j);
                if band > 1 && self[(i, j)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }
}

// ── Tolerance variants ──────────────────────────────────────────────

impl<T: RealScalar> Matrix<T> {
    /// Symmetry check with an absolute tolerance on each mirrored pair.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0 + 1e-12, 3.0]);
    /// assert!(!m.is_symmetric());
    /// assert!(m.is_nearly_symmetric(1e-10));
    /// ```
    pub fn is_nearly_symmetric(&self, tolerance: T) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.nrows;
        for i in 0..n {
            for j in (i + 1)..n {
                if (self[(i, j)] - self[(j, i)]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }

    /// Zero check with an absolute tolerance per element.
    pub fn is_nearly_zero(&self, tolerance: T) -> bool {
        self.data.iter().all(|&x| x.abs() <= tolerance)
    }

    /// Identity check with an absolute tolerance per element.
    pub fn is_nearly_identity(&self, tolerance: T) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                let expected = if i == j { T::one() } else { T::zero() };
                if (self[(i, j)] - expected).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

// ── Singularity ─────────────────────────────────────────────────────

impl<T: RealScalar> Matrix<T> {
    /// Check whether the LU factorization flags the matrix as singular
    /// (a row with no nonzero element).
    ///
    /// Errors if the matrix is not square. Note that this catches the
    /// degenerate case only; an ill-conditioned or rank-deficient matrix
    /// without a zero row will still factor. Use
    /// [`Matrix::is_nearly_singular`] to screen for those.
    pub fn is_singular(&self) -> Result<bool> {
        Ok(self.lu()?.is_singular())
    }

    /// Check whether `|det(A)| <= threshold`.
    ///
    /// A flagged-singular factorization yields a NaN determinant, which
    /// compares false against any threshold, so exactly singular matrices
    /// are reported through the comparison with the flag consulted first.
    pub fn is_nearly_singular(&self, threshold: T) -> Result<bool> {
        let lu = self.lu()?;
        if lu.is_singular() {
            return Ok(true);
        }
        Ok(lu.det().abs() <= threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric() {
        let sym = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 3.0]);
        assert!(sym.is_symmetric());

        let asym = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert!(!asym.is_symmetric());

        let rect = Matrix::<f64>::zeros(2, 3);
        assert!(!rect.is_symmetric());
    }

    #[test]
    fn nearly_symmetric() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0 + 1e-12, 3.0]);
        assert!(!m.is_symmetric());
        assert!(m.is_nearly_symmetric(1e-10));
        assert!(!m.is_nearly_symmetric(1e-14));
    }

    #[test]
    fn zero_and_identity() {
        assert!(Matrix::<f64>::zeros(2, 3).is_zero());
        assert!(!Matrix::<f64>::eye(2).is_zero());

        assert!(Matrix::<f64>::eye(3).is_identity());
        assert!(!Matrix::<f64>::zeros(3, 3).is_identity());
        assert!(!Matrix::<f64>::zeros(2, 3).is_identity());
    }

    #[test]
    fn nearly_zero_and_identity() {
        let m = Matrix::fill(2, 2, 1e-12_f64);
        assert!(m.is_nearly_zero(1e-10));
        assert!(!m.is_nearly_zero(1e-14));

        let mut id = Matrix::<f64>::eye(2);
        id[(0, 1)] = 1e-12;
        assert!(id.is_nearly_identity(1e-10));
        assert!(!id.is_identity());
    }

    #[test]
    fn diagonal_and_triangular() {
        let d = Matrix::from_diag(&[1.0, 2.0, 3.0]);
        assert!(d.is_diagonal());
        assert!(d.is_upper_triangular());
        assert!(d.is_lower_triangular());
        assert!(d.is_tridiagonal());

        let u = Matrix::from_rows(2, 2, &[1.0, 2.0, 0.0, 3.0]);
        assert!(u.is_upper_triangular());
        assert!(!u.is_lower_triangular());
        assert!(!u.is_diagonal());

        let l = u.transpose();
        assert!(l.is_lower_triangular());
        assert!(!l.is_upper_triangular());
    }

    #[test]
    fn tridiagonal() {
        let m = Matrix::from_rows(
            3,
            3,
            &[2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0],
        );
        assert!(m.is_tridiagonal());

        let mut off = m.clone();
        off[(0, 2)] = 5.0;
        assert!(!off.is_tridiagonal());
    }

    #[test]
    fn singular() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 0.0, 0.0]);
        assert!(m.is_singular().unwrap());

        let ok = Matrix::from_rows(2, 2, &[4.0_f64, 3.0, 6.0, 3.0]);
        assert!(!ok.is_singular().unwrap());

        let rect = Matrix::<f64>::zeros(2, 3);
        assert!(rect.is_singular().is_err());
    }

    #[test]
    fn nearly_singular() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, 1.0, 1.0, 1.0 + 1e-13]);
        assert!(m.is_nearly_singular(1e-10).unwrap());

        let ok = Matrix::from_rows(2, 2, &[4.0_f64, 3.0, 6.0, 3.0]);
        assert!(!ok.is_nearly_singular(1e-10).unwrap());

        // flagged-singular matrices report true despite the NaN determinant
        let sing = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 0.0, 0.0]);
        assert!(sing.is_nearly_singular(1e-10).unwrap());
    }
}
