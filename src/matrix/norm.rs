use crate::traits::RealScalar;

use super::Matrix;

// ── Norms ───────────────────────────────────────────────────────────

impl<T: RealScalar> Matrix<T> {
    /// Frobenius norm (square root of the sum of squared elements).
    ///
    /// Accumulated with `hypot` so intermediate squares cannot overflow
    /// even when elements are near the type's limits.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        let mut norm = T::zero();
        for &x in &self.data {
            norm = norm.hypot(x);
        }
        norm
    }

    /// Infinity norm (maximum absolute row sum).
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
    /// assert!((m.norm_inf() - 7.0).abs() < 1e-12);
    /// ```
    pub fn norm_inf(&self) -> T {
        let mut max = T::zero();
        for i in 0..self.nrows {
            let mut row_sum = T::zero();
            for j in 0..self.ncols {
                row_sum = row_sum + self[(i, j)].abs();
            }
            if row_sum > max {
                max = row_sum;
            }
        }
        max
    }

    /// One norm (maximum absolute column sum).
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
    /// assert!((m.norm_one() - 6.0).abs() < 1e-12);
    /// ```
    pub fn norm_one(&self) -> T {
        let mut max = T::zero();
        for j in 0..self.ncols {
            let mut col_sum = T::zero();
            for i in 0..self.nrows {
                col_sum = col_sum + self[(i, j)].abs();
            }
            if col_sum > max {
                max = col_sum;
            }
        }
        max
    }
}

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: RealScalar> Matrix<T> {
    /// Sum of diagonal elements (runs to the shorter dimension when the
    /// matrix is rectangular).
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// Sum of all elements.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.sum(), 10.0);
    /// ```
    pub fn sum(&self) -> T {
        let mut s = T::zero();
        for &x in &self.data {
            s = s + x;
        }
        s
    }

    /// Arithmetic mean of all elements.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(self.nrows * self.ncols)
    }

    /// Per-row sums, one entry per row.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.row_sums(), vec![6.0, 15.0]);
    /// ```
    pub fn row_sums(&self) -> Vec<T> {
        (0..self.nrows)
            .map(|i| {
                let mut s = T::zero();
                for j in 0..self.ncols {
                    s = s + self[(i, j)];
                }
                s
            })
            .collect()
    }

    /// Per-column sums, one entry per column.
    pub fn column_sums(&self) -> Vec<T> {
        (0..self.ncols)
            .map(|j| {
                let mut s = T::zero();
                for i in 0..self.nrows {
                    s = s + self[(i, j)];
                }
                s
            })
            .collect()
    }
}

// ── Map ─────────────────────────────────────────────────────────────

impl<T: RealScalar> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]);
    /// let r = m.map(|x| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map(&self, f: impl Fn(T) -> T) -> Self {
        let data = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Element-wise absolute value.
    pub fn abs(&self) -> Self {
        self.map(|x| x.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frobenius_norm() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn frobenius_norm_large_elements() {
        // naive sum-of-squares would overflow to infinity here
        let big = 1.0e200_f64;
        let m = Matrix::from_rows(1, 2, &[big, big]);
        let expected = big * 2.0_f64.sqrt();
        assert!((m.frobenius_norm() - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn norm_inf() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
        assert!((m.norm_inf() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn norm_one() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
        assert!((m.norm_one() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn trace() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.trace(), 5.0);

        let rect = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(rect.trace(), 6.0);
    }

    #[test]
    fn sum_and_mean() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.sum(), 10.0);
        assert_eq!(m.mean(), 2.5);
    }

    #[test]
    fn row_column_sums() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.row_sums(), vec![6.0, 15.0]);
        assert_eq!(m.column_sums(), vec![5.0, 7.0, 9.0]);
    }

    #[test]
    fn map() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let doubled = m.map(|x| x * 2.0);
        assert_eq!(doubled[(0, 0)], 2.0);
        assert_eq!(doubled[(1, 1)], 8.0);
    }

    #[test]
    fn abs() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, -3.0, 4.0]);
        let a = m.abs();
        assert_eq!(a[(0, 1)], 2.0);
        assert_eq!(a[(1, 0)], 3.0);
    }
}
