//! Dense-free linear solvers used by the finite-difference discretizers.

pub mod tridiagonal;
pub use tridiagonal::{thomas_solve, TridiagonalError};
