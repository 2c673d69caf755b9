//! Finite-difference solution of linear two-point boundary value problems.
//!
//! Solves
//!
//! ```text
//! y'' + p(x) y' + q(x) y = r(x),   y(a) = y_a,   y(b) = y_b
//! ```
//!
//! on `n` interior nodes `x_i = a + i h`, `h = (b - a) / (n + 1)`. Central
//! differences for `y''` and `y'` give one tridiagonal row per node:
//!
//! ```text
//! (1 - h p_i / 2) y_{i-1} + (-2 + h² q_i) y_i + (1 + h p_i / 2) y_{i+1} = h² r_i
//! ```
//!
//! The boundary terms of the first and last rows move to the right-hand
//! side, and the system is solved with [`thomas_solve`]. Truncation error is
//! `O(h²)`.

use crate::linalg::thomas_solve;
use crate::pde::errors::PdeError;
use crate::pde::report::BvpReport;

const ALGORITHM_NAME: &str = "finite_difference_bvp";


/// Coefficient functions of `y'' + p(x) y' + q(x) y = r(x)`.
#[derive(Debug, Clone, Copy)]
pub struct LinearBvp<P, Q, R> {
    pub p: P,
    pub q: Q,
    pub r: R,
}

impl<P, Q, R> LinearBvp<P, Q, R>
where
    P: Fn(f64) -> f64,
    Q: Fn(f64) -> f64,
    R: Fn(f64) -> f64,
{
    pub fn new(p: P, q: Q, r: R) -> Self {
        Self { p, q, r }
    }
}

/// Dirichlet condition `y(x) = value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub x     : f64,
    pub value : f64,
}

impl Boundary {
    pub fn new(x: f64, value: f64) -> Self {
        Self { x, value }
    }
}


#[inline]
fn eval_checked<G>(g: &G, x: f64) -> Result<f64, PdeError> where G: Fn(f64) -> f64 {
    let value = g(x);
    if !value.is_finite() {
        return Err(PdeError::NonFiniteEvaluation { x, value });
    }
    Ok(value)
}


/// Solves a linear two-point BVP with second-order central differences.
///
/// # Arguments
///
/// ┌ `coefficients`  - [`LinearBvp`] with `p`, `q`, `r`
/// ├ `boundary_low`  - `y(a)`
/// ├ `boundary_high` - `y(b)`
/// └ `n`             - number of interior nodes, at least 1
///
/// # Returns
///
/// [`BvpReport`] over the `n + 2` nodes `a, a + h, .., b`.
///
/// # Errors
///
/// ┌ [`PdeError::InvalidGridSize`]     - `n < 1`
/// ├ [`PdeError::InvalidDomain`]       - `a`, `b` non-finite or `a >= b`
/// ├ [`PdeError::NonFiniteBoundary`]   - boundary value NaN/inf
/// ├ [`PdeError::NonFiniteEvaluation`] - `p`, `q` or `r` returned NaN/inf
/// └ [`PdeError::Linear`]              - the tridiagonal sweep hit a zero pivot
pub fn finite_difference_bvp<P, Q, R>(
    coefficients  : LinearBvp<P, Q, R>,
    boundary_low  : Boundary,
    boundary_high : Boundary,
    n             : usize,
) -> Result<BvpReport, PdeError>
where
    P: Fn(f64) -> f64,
    Q: Fn(f64) -> f64,
    R: Fn(f64) -> f64,
{
    if n < 1 {
        return Err(PdeError::InvalidGridSize { got: n, min: 1 });
    }

    let a = boundary_low.x;
    let b = boundary_high.x;
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(PdeError::InvalidDomain { a, b });
    }
    for v in [boundary_low.value, boundary_high.value] {
        if !v.is_finite() {
            return Err(PdeError::NonFiniteBoundary { got: v });
        }
    }

    let h  = (b - a) / (n + 1) as f64;
    let h2 = h * h;

    let mut sub  = vec![0.0; n];
    let mut diag = vec![0.0; n];
    let mut sup  = vec![0.0; n];
    let mut rhs  = vec![0.0; n];

    for k in 0..n {
        let xi = a + (k + 1) as f64 * h;
        let p  = eval_checked(&coefficients.p, xi)?;
        let q  = eval_checked(&coefficients.q, xi)?;
        let r  = eval_checked(&coefficients.r, xi)?;

        sub[k]  = 1.0 - 0.5 * h * p;
        diag[k] = -2.0 + h2 * q;
        sup[k]  = 1.0 + 0.5 * h * p;
        rhs[k]  = h2 * r;
    }

    // boundary contributions
    rhs[0]     -= sub[0] * boundary_low.value;
    rhs[n - 1] -= sup[n - 1] * boundary_high.value;

    let interior = thomas_solve(&sub, &diag, &sup, &rhs)?;

    let mut x = Vec::with_capacity(n + 2);
    let mut y = Vec::with_capacity(n + 2);
    x.push(a);
    y.push(boundary_low.value);
    for (k, yk) in interior.into_iter().enumerate() {
        x.push(a + (k + 1) as f64 * h);
        y.push(yk);
    }
    x.push(b);
    y.push(boundary_high.value);

    Ok(BvpReport {
        algorithm_name : ALGORITHM_NAME,
        h,
        x,
        y,
    })
}
