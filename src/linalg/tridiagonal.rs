//! Thomas algorithm for tridiagonal systems.
//!
//! Shared by the finite-difference BVP and the Crank–Nicolson heat solver.

use crate::errors::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TridiagonalError {
    #[error("tridiagonal system has no rows")]
    EmptySystem,

    #[error("dimension mismatch: sub={sub}, diag={diag}, sup={sup}, rhs={rhs}")]
    DimensionMismatch { sub: usize, diag: usize, sup: usize, rhs: usize },

    #[error("zero pivot at row {row}, system is singular for the Thomas sweep")]
    SingularPivot { row: usize },
}
impl TridiagonalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TridiagonalError::EmptySystem
            | TridiagonalError::DimensionMismatch { .. } => ErrorKind::Domain,
            TridiagonalError::SingularPivot { .. }       => ErrorKind::Convergence,
        }
    }
}


/// Solves `A x = rhs` for tridiagonal `A` by forward sweep and back substitution.
///
/// ┌ `sub`  - sub-diagonal, length `n` (`sub[0]` unused)
/// ├ `diag` - main diagonal, length `n`
/// ├ `sup`  - super-diagonal, length `n` (`sup[n - 1]` unused)
/// └ `rhs`  - right-hand side, length `n`
///
/// # Errors
/// ┌ [`TridiagonalError::EmptySystem`]       - `n == 0`
/// ├ [`TridiagonalError::DimensionMismatch`] - slice lengths disagree
/// └ [`TridiagonalError::SingularPivot`]     - a pivot is zero or non-finite
///
/// No pivoting is performed. Diagonally dominant systems (every matrix the
/// `pde` module builds) never hit a zero pivot.
pub fn thomas_solve(
    sub  : &[f64],
    diag : &[f64],
    sup  : &[f64],
    rhs  : &[f64],
) -> Result<Vec<f64>, TridiagonalError> {
    let n = rhs.len();
    if n == 0 {
        return Err(TridiagonalError::EmptySystem);
    }
    if sub.len() != n || diag.len() != n || sup.len() != n {
        return Err(TridiagonalError::DimensionMismatch {
            sub  : sub.len(),
            diag : diag.len(),
            sup  : sup.len(),
            rhs  : n,
        });
    }

    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    // forward sweep
    let pivot = checked_pivot(diag[0], 0)?;
    c_prime[0] = sup[0] / pivot;
    d_prime[0] = rhs[0] / pivot;

    for i in 1..n {
        let pivot = checked_pivot(diag[i] - sub[i] * c_prime[i - 1], i)?;
        if i < n - 1 {
            c_prime[i] = sup[i] / pivot;
        }
        d_prime[i] = (rhs[i] - sub[i] * d_prime[i - 1]) / pivot;
    }

    // back substitution
    let mut x = d_prime;
    for i in (0..n - 1).rev() {
        x[i] -= c_prime[i] * x[i + 1];
    }

    Ok(x)
}

#[inline]
fn checked_pivot(p: f64, row: usize) -> Result<f64, TridiagonalError> {
    if p == 0.0 || !p.is_finite() {
        return Err(TridiagonalError::SingularPivot { row });
    }
    Ok(p)
}
