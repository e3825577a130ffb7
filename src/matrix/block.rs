use crate::error::{MatrixError, Result};
use crate::traits::RealScalar;

use super::Matrix;

impl<T: RealScalar> Matrix<T> {
    /// Extract the contiguous sub-matrix with rows `r0..=r1` and columns
    /// `c0..=c1` (inclusive corners).
    ///
    /// Errors if the corners are out of order or out of bounds.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// let b = m.submatrix(1, 1, 2, 2).unwrap();
    /// assert_eq!(b[(0, 0)], 4.0);
    /// assert_eq!(b[(1, 1)], 8.0);
    /// ```
    pub fn submatrix(&self, r0: usize, c0: usize, r1: usize, c1: usize) -> Result<Self> {
        if r1 < r0 || c1 < c0 || r1 >= self.nrows || c1 >= self.ncols {
            return Err(MatrixError::IndexOutOfBounds {
                row: r1,
                col: c1,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(Matrix::from_fn(r1 - r0 + 1, c1 - c0 + 1, |r, c| {
            self[(r0 + r, c0 + c)]
        }))
    }

    /// Build a matrix from explicit (possibly repeated, possibly reordered)
    /// row and column index lists.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// let s = m.select(&[2, 0], &[1, 1]).unwrap();
    /// assert_eq!(s[(0, 0)], 7.0);
    /// assert_eq!(s[(1, 1)], 1.0);
    /// ```
    pub fn select(&self, rows: &[usize], cols: &[usize]) -> Result<Self> {
        for &r in rows {
            if r >= self.nrows {
                return Err(MatrixError::IndexOutOfBounds {
                    row: r,
                    col: 0,
                    nrows: self.nrows,
                    ncols: self.ncols,
                });
            }
        }
        for &c in cols {
            if c >= self.ncols {
                return Err(MatrixError::IndexOutOfBounds {
                    row: 0,
                    col: c,
                    nrows: self.nrows,
                    ncols: self.ncols,
                });
            }
        }
        Ok(Matrix::from_fn(rows.len(), cols.len(), |r, c| {
            self[(rows[r], cols[c])]
        }))
    }

    /// Write a sub-matrix into self with its top-left corner at `(i, j)`.
    ///
    /// Errors if the block extends beyond the matrix bounds.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::<f64>::zeros(3, 3);
    /// let patch = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.set_submatrix(1, 1, &patch).unwrap();
    /// assert_eq!(m[(1, 1)], 1.0);
    /// assert_eq!(m[(2, 2)], 4.0);
    /// ```
    pub fn set_submatrix(&mut self, i: usize, j: usize, src: &Matrix<T>) -> Result<()> {
        if i + src.nrows > self.nrows || j + src.ncols > self.ncols {
            return Err(MatrixError::IndexOutOfBounds {
                row: i + src.nrows - 1,
                col: j + src.ncols - 1,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        for r in 0..src.nrows {
            for c in 0..src.ncols {
                self[(i + r, j + c)] = src[(r, c)];
            }
        }
        Ok(())
    }

    /// Borrow row `i` as a slice of the underlying storage.
    ///
    /// Panics if `i` is out of bounds.
    pub fn row_slice(&self, i: usize) -> &[T] {
        assert!(
            i < self.nrows,
            "row {} out of bounds for {}x{} matrix",
            i,
            self.nrows,
            self.ncols,
        );
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Copy of row `i`; errors if `i` is out of bounds.
    pub fn row_copy(&self, i: usize) -> Result<Vec<T>> {
        if i >= self.nrows {
            return Err(MatrixError::IndexOutOfBounds {
                row: i,
                col: 0,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(self.row_slice(i).to_vec())
    }

    /// Copy of column `j`; errors if `j` is out of bounds.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.column_copy(1).unwrap(), vec![2.0, 4.0]);
    /// ```
    pub fn column_copy(&self, j: usize) -> Result<Vec<T>> {
        if j >= self.ncols {
            return Err(MatrixError::IndexOutOfBounds {
                row: 0,
                col: j,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok((0..self.nrows).map(|i| self[(i, j)]).collect())
    }

    /// Extract the diagonal (length `min(nrows, ncols)`).
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.diag(), vec![1.0, 4.0]);
    /// ```
    pub fn diag(&self) -> Vec<T> {
        let n = self.nrows.min(self.ncols);
        (0..n).map(|i| self[(i, i)]).collect()
    }

    /// Create a square diagonal matrix from a slice.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_diag(&[2.0, 3.0]);
    /// assert_eq!(m[(0, 0)], 2.0);
    /// assert_eq!(m[(1, 1)], 3.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_diag(values: &[T]) -> Self {
        let n = values.len();
        let mut m = Self::zeros(n, n);
        for (i, &v) in values.iter().enumerate() {
            m[(i, i)] = v;
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat4x5() -> Matrix<f64> {
        Matrix::from_fn(4, 5, |i, j| (i * 5 + j) as f64)
    }

    #[test]
    fn submatrix_extract() {
        let m = mat4x5();
        let b = m.submatrix(1, 1, 2, 3).unwrap();
        assert_eq!(b.shape(), (2, 3));
        assert_eq!(b[(0, 0)], 6.0);
        assert_eq!(b[(0, 2)], 8.0);
        assert_eq!(b[(1, 0)], 11.0);
        assert_eq!(b[(1, 2)], 13.0);
    }

    #[test]
    fn submatrix_full() {
        let m = mat4x5();
        let full = m.submatrix(0, 0, 3, 4).unwrap();
        assert_eq!(full, m);
    }

    #[test]
    fn submatrix_single() {
        let m = mat4x5();
        let s = m.submatrix(2, 3, 2, 3).unwrap();
        assert_eq!(s.shape(), (1, 1));
        assert_eq!(s[(0, 0)], 13.0);
    }

    #[test]
    fn submatrix_out_of_bounds() {
        let m = mat4x5();
        assert!(m.submatrix(3, 3, 4, 4).is_err());
        assert!(m.submatrix(2, 2, 1, 4).is_err());
    }

    #[test]
    fn select_reorders_and_repeats() {
        let m = mat4x5();
        let s = m.select(&[2, 0, 2], &[4, 0]).unwrap();
        assert_eq!(s.shape(), (3, 2));
        assert_eq!(s[(0, 0)], 14.0);
        assert_eq!(s[(1, 1)], 0.0);
        assert_eq!(s[(2, 0)], 14.0);

        assert!(m.select(&[4], &[0]).is_err());
        assert!(m.select(&[0], &[5]).is_err());
    }

    #[test]
    fn set_submatrix_basic() {
        let mut m = Matrix::<f64>::zeros(4, 4);
        let patch = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        m.set_submatrix(1, 1, &patch).unwrap();
        assert_eq!(m[(1, 1)], 1.0);
        assert_eq!(m[(2, 2)], 4.0);
        assert_eq!(m[(0, 0)], 0.0);

        assert!(m.set_submatrix(3, 3, &patch).is_err());
    }

    #[test]
    fn submatrix_roundtrip() {
        let m = mat4x5();
        let b = m.submatrix(1, 2, 2, 4).unwrap();
        let mut m2 = mat4x5();
        m2.set_submatrix(1, 2, &b).unwrap();
        assert_eq!(m, m2);
    }

    #[test]
    fn row_and_column_copies() {
        let m = mat4x5();
        assert_eq!(m.row_copy(1).unwrap(), vec![5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m.column_copy(2).unwrap(), vec![2.0, 7.0, 12.0, 17.0]);
        assert!(m.row_copy(4).is_err());
        assert!(m.column_copy(5).is_err());
    }

    #[test]
    fn diag_and_from_diag() {
        let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j + 1) as f64);
        assert_eq!(m.diag(), vec![1.0, 5.0, 9.0]);

        let d = Matrix::from_diag(&[1.0, 5.0, 9.0]);
        assert_eq!(d[(1, 1)], 5.0);
        assert_eq!(d[(0, 1)], 0.0);

        // rectangular diag runs to the shorter dimension
        let r = mat4x5();
        assert_eq!(r.diag().len(), 4);
    }
}
