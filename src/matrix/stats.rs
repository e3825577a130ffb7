use crate::traits::RealScalar;

use super::Matrix;

/// Descriptive statistics of a sample.
///
/// Variance is the unbiased sample variance (divisor `n - 1`); a
/// single-element sample has zero variance. The standard error is
/// `standard_deviation / sqrt(n)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicStats<T> {
    pub mean: T,
    pub median: T,
    pub variance: T,
    pub standard_deviation: T,
    pub standard_error: T,
    pub min: T,
    pub max: T,
}

impl<T: RealScalar> BasicStats<T> {
    /// Compute the statistics of a non-empty sample.
    ///
    /// Panics if the sample is empty.
    ///
    /// ```
    /// use densemat::BasicStats;
    /// let s = BasicStats::of(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    /// assert_eq!(s.mean, 5.0);
    /// assert_eq!(s.median, 4.5);
    /// assert_eq!(s.min, 2.0);
    /// assert_eq!(s.max, 9.0);
    /// ```
    pub fn of(sample: &[T]) -> Self {
        assert!(!sample.is_empty(), "statistics of an empty sample");
        let n = T::from_usize(sample.len());

        let mut sum = T::zero();
        let mut min = sample[0];
        let mut max = sample[0];
        for &x in sample {
            sum = sum + x;
            if x < min {
                min = x;
            }
            if x > max {
                max = x;
            }
        }
        let mean = sum / n;

        let variance = if sample.len() < 2 {
            T::zero()
        } else {
            let mut ss = T::zero();
            for &x in sample {
                let d = x - mean;
                ss = ss + d * d;
            }
            ss / (n - T::one())
        };
        let standard_deviation = variance.sqrt();
        let standard_error = standard_deviation / n.sqrt();

        let mut sorted = sample.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 1 {
            sorted[mid]
        } else {
            (sorted[mid - 1] + sorted[mid]) / T::from_f64(2.0)
        };

        BasicStats {
            mean,
            median,
            variance,
            standard_deviation,
            standard_error,
            min,
            max,
        }
    }
}

impl<T: RealScalar> Matrix<T> {
    /// Descriptive statistics of each row, one entry per row.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let stats = m.row_stats();
    /// assert_eq!(stats[0].mean, 2.0);
    /// assert_eq!(stats[1].mean, 5.0);
    /// ```
    pub fn row_stats(&self) -> Vec<BasicStats<T>> {
        (0..self.nrows())
            .map(|i| BasicStats::of(self.row_slice(i)))
            .collect()
    }

    /// Descriptive statistics of each column, one entry per column.
    pub fn column_stats(&self) -> Vec<BasicStats<T>> {
        (0..self.ncols())
            .map(|j| {
                let col: Vec<T> = (0..self.nrows()).map(|i| self[(i, j)]).collect();
                BasicStats::of(&col)
            })
            .collect()
    }
}
