use log::warn;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::traits::RealScalar;

/// Tuning knobs for the Jacobi eigen-decomposition.
///
/// `max_iterations` bounds the number of sweeps; `suppress_diagnostics`
/// silences the warning logged when the sweep budget runs out without
/// convergence. Neither changes what is returned.
#[derive(Debug, Clone, Copy)]
pub struct JacobiConfig {
    pub max_iterations: usize,
    pub suppress_diagnostics: bool,
}

impl Default for JacobiConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            suppress_diagnostics: false,
        }
    }
}

/// Eigen-decomposition of a symmetric matrix by the cyclic Jacobi method.
///
/// Plane rotations zero the off-diagonal pairs sweep by sweep until the
/// matrix is diagonal; the accumulated rotations form the eigenvector
/// matrix. Eigenvalues are kept both in computation order and sorted
/// descending, with the eigenvector columns permuted to match and the
/// pre-sort index of each sorted eigenvalue recorded.
///
/// Exceeding the sweep budget is not an error: the best-effort estimate is
/// returned with [`converged`](Self::converged) false and a diagnostic
/// logged.
///
/// # Example
///
/// ```
/// use densemat::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, -1.0, -1.0, 2.0]);
/// let eig = a.symmetric_eigen().unwrap();
/// assert!((eig.sorted_eigenvalues()[0] - 3.0).abs() < 1e-10);
/// assert!((eig.sorted_eigenvalues()[1] - 1.0).abs() < 1e-10);
/// assert!(eig.converged());
/// ```
#[derive(Debug, Clone)]
pub struct SymmetricEigen<T> {
    eigenvalues: Vec<T>,
    eigenvectors: Matrix<T>,
    sorted_eigenvalues: Vec<T>,
    sorted_eigenvectors: Matrix<T>,
    sort_indices: Vec<usize>,
    rotations: usize,
    converged: bool,
}

impl<T: RealScalar> SymmetricEigen<T> {
    /// Decompose a symmetric matrix with the default configuration.
    ///
    /// Errors if the matrix is not square or not exactly symmetric.
    pub fn new(a: &Matrix<T>) -> Result<Self> {
        Self::with_config(a, JacobiConfig::default())
    }

    /// Decompose a symmetric matrix with an explicit configuration.
    pub fn with_config(a: &Matrix<T>, config: JacobiConfig) -> Result<Self> {
        if !a.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: a.nrows(),
                ncols: a.ncols(),
            });
        }
        if !a.is_symmetric() {
            return Err(MatrixError::NotSymmetric);
        }
        let n = a.nrows();

        let mut amat = a.clone();
        let mut v = Matrix::<T>::eye(n);
        // d tracks the evolving diagonal; b and z buffer the per-sweep
        // corrections so rounding does not accumulate within a sweep
        let mut d: Vec<T> = (0..n).map(|p| amat[(p, p)]).collect();
        let mut b = d.clone();
        let mut z = vec![T::zero(); n];

        let mut rotations = 0usize;
        let mut converged = false;

        for sweep in 1..=config.max_iterations {
            let mut off_diagonal_sum = T::zero();
            for p in 0..n.saturating_sub(1) {
                for q in (p + 1)..n {
                    off_diagonal_sum = off_diagonal_sum + amat[(p, q)].abs();
                }
            }
            if off_diagonal_sum == T::zero() {
                converged = true;
                break;
            }

            let threshold = if sweep < 4 {
                T::from_f64(0.2) * off_diagonal_sum / T::from_usize(n * n)
            } else {
                T::zero()
            };

            for p in 0..n - 1 {
                for q in (p + 1)..n {
                    let scaled_off_diagonal = T::from_f64(100.0) * amat[(p, q)].abs();
                    // after four sweeps, entries negligible against both
                    // diagonals are zeroed without a rotation
                    if sweep > 4
                        && d[p].abs() + scaled_off_diagonal == d[p].abs()
                        && d[q].abs() + scaled_off_diagonal == d[q].abs()
                    {
                        amat[(p, q)] = T::zero();
                    } else if amat[(p, q)].abs() > threshold {
                        let mut diff = d[q] - d[p];
                        // stable tangent: solve t^2 + 2t·cot(2φ) - 1 = 0
                        // for the smaller root
                        let t = if diff.abs() + scaled_off_diagonal == diff.abs() {
                            amat[(p, q)] / diff
                        } else {
                            let cot2 = T::from_f64(0.5) * diff / amat[(p, q)];
                            let mut t = T::one() / (cot2.abs() + (T::one() + cot2 * cot2).sqrt());
                            if cot2 < T::zero() {
                                t = -t;
                            }
                            t
                        };
                        let c = T::one() / (T::one() + t * t).sqrt();
                        let s = t * c;
                        let tau = s / (T::one() + c);
                        diff = t * amat[(p, q)];
                        z[p] = z[p] - diff;
                        z[q] = z[q] + diff;
                        d[p] = d[p] - diff;
                        d[q] = d[q] + diff;
                        amat[(p, q)] = T::zero();
                        for j in 0..p {
                            rotate(&mut amat, tau, s, j, p, j, q);
                        }
                        for j in (p + 1)..q {
                            rotate(&mut amat, tau, s, p, j, j, q);
                        }
                        for j in (q + 1)..n {
                            rotate(&mut amat, tau, s, p, j, q, j);
                        }
                        for j in 0..n {
                            rotate(&mut v, tau, s, j, p, j, q);
                        }
                        rotations += 1;
                    }
                }
            }

            for p in 0..n {
                b[p] = b[p] + z[p];
                d[p] = b[p];
                z[p] = T::zero();
            }
        }

        if !converged && !config.suppress_diagnostics {
            warn!(
                "Jacobi eigen-decomposition did not converge within {} sweeps; \
                 current estimate returned",
                config.max_iterations
            );
        }

        let (sorted_eigenvalues, sorted_eigenvectors, sort_indices) = eigen_sort(&d, &v);

        Ok(Self {
            eigenvalues: d,
            eigenvectors: v,
            sorted_eigenvalues,
            sorted_eigenvectors,
            sort_indices,
            rotations,
            converged,
        })
    }

    /// Eigenvalues in computation order.
    pub fn eigenvalues(&self) -> &[T] {
        &self.eigenvalues
    }

    /// Eigenvectors in computation order, one per column, matching
    /// [`eigenvalues`](Self::eigenvalues).
    pub fn eigenvectors(&self) -> &Matrix<T> {
        &self.eigenvectors
    }

    /// Eigenvalues sorted descending.
    pub fn sorted_eigenvalues(&self) -> &[T] {
        &self.sorted_eigenvalues
    }

    /// Eigenvector columns permuted to match
    /// [`sorted_eigenvalues`](Self::sorted_eigenvalues).
    pub fn sorted_eigenvectors(&self) -> &Matrix<T> {
        &self.sorted_eigenvectors
    }

    /// For each sorted eigenvalue, its index in the unsorted order. With
    /// exactly repeated eigenvalues the first matching index is recorded.
    pub fn eigenvalue_indices(&self) -> &[usize] {
        &self.sort_indices
    }

    /// Number of plane rotations applied.
    pub fn rotation_count(&self) -> usize {
        self.rotations
    }

    /// Whether the off-diagonal sum reached zero within the sweep budget.
    pub fn converged(&self) -> bool {
        self.converged
    }
}

// One Jacobi plane rotation applied to the element pair (i,j), (k,l).
fn rotate<T: RealScalar>(m: &mut Matrix<T>, tau: T, s: T, i: usize, j: usize, k: usize, l: usize) {
    let a = m[(i, j)];
    let b = m[(k, l)];
    m[(i, j)] = a - s * (b + a * tau);
    m[(k, l)] = b + s * (a - b * tau);
}

// Straight selection sort, descending, permuting eigenvector columns to
// match and recording the pre-sort index of each entry.
fn eigen_sort<T: RealScalar>(d: &[T], v: &Matrix<T>) -> (Vec<T>, Matrix<T>, Vec<usize>) {
    let n = d.len();
    let mut sorted = d.to_vec();
    let mut vectors = v.clone();

    for i in 0..n.saturating_sub(1) {
        let mut largest = sorted[i];
        let mut k = i;
        for j in (i + 1)..n {
            if sorted[j] >= largest {
                largest = sorted[j];
                k = j;
            }
        }
        if k != i {
            sorted[k] = sorted[i];
            sorted[i] = largest;
            for row in 0..n {
                let tmp = vectors[(row, i)];
                vectors[(row, i)] = vectors[(row, k)];
                vectors[(row, k)] = tmp;
            }
        }
    }

    let indices = sorted
        .iter()
        .map(|&val| d.iter().position(|&orig| orig == val).unwrap_or(0))
        .collect();

    (sorted, vectors, indices)
}

impl<T: RealScalar> Matrix<T> {
    /// Jacobi eigen-decomposition; the matrix must be exactly symmetric.
    pub fn symmetric_eigen(&self) -> Result<SymmetricEigen<T>> {
        SymmetricEigen::new(self)
    }

    /// Jacobi eigen-decomposition with an explicit configuration.
    pub fn symmetric_eigen_with_config(&self, config: JacobiConfig) -> Result<SymmetricEigen<T>> {
        SymmetricEigen::with_config(self, config)
    }
}
