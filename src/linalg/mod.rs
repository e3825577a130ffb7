//! Linear-algebra decompositions and solvers.
//!
//! - [`LuDecomposition`]: LU factorization with implicitly scaled partial
//!   pivoting; solve, inverse, determinant and log-determinant.
//! - [`SymmetricEigen`]: cyclic Jacobi eigen-decomposition of symmetric
//!   matrices.
//! - [`solve_linear`]: shape-dispatched linear solving, delegating
//!   overdetermined systems to a [`LeastSquaresSolver`].

mod jacobi;
mod lu;
mod solve;

pub use jacobi::{JacobiConfig, SymmetricEigen};
pub use lu::{LuConfig, LuDecomposition};
pub use solve::{solve_linear, LeastSquaresSolver};
