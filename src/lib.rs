//! # densemat
//!
//! Dense real-matrix engine: runtime-dimensioned matrices with LU
//! decomposition (implicitly scaled partial pivoting), linear-system
//! solving, inversion, determinants, and the cyclic Jacobi
//! eigen-decomposition for symmetric matrices.
//!
//! ## Quick start
//!
//! ```
//! use densemat::Matrix;
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::from_rows(3, 3, &[
//!     2.0_f64, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]);
//! let x = a.solve(&[8.0, -11.0, -3.0]).unwrap(); // x = [2, 3, -1]
//!
//! // Eigen-decompose a symmetric matrix
//! let s = Matrix::from_rows(2, 2, &[2.0_f64, -1.0, -1.0, 2.0]);
//! let eig = s.symmetric_eigen().unwrap();
//! assert!((eig.sorted_eigenvalues()[0] - 3.0).abs() < 1e-10);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated [`Matrix<T>`] with runtime dimensions,
//!   `Vec<T>` row-major storage. Arithmetic (operator and checked `Result`
//!   forms), indexing, sub-matrix access, norms, aggregation, descriptive
//!   statistics, and structural predicates.
//!
//! - [`linalg`] — [`LuDecomposition`] (solve / inverse / determinant /
//!   log-determinant), [`SymmetricEigen`] (cyclic Jacobi), and
//!   [`solve_linear`] which dispatches overdetermined systems to a
//!   [`LeastSquaresSolver`] collaborator. Convenience methods on
//!   `Matrix`: `a.solve(&b)`, `a.inverse()`, `a.det()`,
//!   `a.symmetric_eigen()`.
//!
//! - [`traits`] — [`RealScalar`], the `f32`/`f64` element trait all
//!   algorithms are written against.
//!
//! ## Failure model
//!
//! Precondition violations (shape mismatches, non-square or non-symmetric
//! input, out-of-range indices, underdetermined systems) fail fast with
//! [`MatrixError`]. Numerical degeneracy does not: a singular matrix
//! handed to the LU factorization comes back flagged with NaN sentinels,
//! and a Jacobi run that exhausts its sweep budget returns its best
//! estimate unconverged. Both log a suppressible `warn` diagnostic through
//! the [`log`] facade.

pub mod linalg;
pub mod matrix;
pub mod traits;

mod error;

pub use error::{MatrixError, Result};
pub use linalg::{
    solve_linear, JacobiConfig, LeastSquaresSolver, LuConfig, LuDecomposition, SymmetricEigen,
};
pub use matrix::{BasicStats, Matrix};
pub use traits::RealScalar;
