//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial).
//!
//! For `n` distinct nodes the unique polynomial of degree `n - 1` is
//!
//! ```text
//! P(x) = Σ_i y_i · L_i(x),   L_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)
//! ```
//!
//! Each basis factor is evaluated as a ratio, so `P(x_i) = y_i` exactly.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{first_duplicate, impl_common_cfg, non_finite_idx, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LagrangeCfg::new`] then setters.
///
/// # Defaults
/// - Minimum allowed spacing between any two nodes;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
/// - Extrapolation allowed; [`LagrangeCfg::set_extrapolate`] with `false`
///   turns queries outside the node range into [`InterpolationError::OutOfBounds`].
#[derive(Debug, Clone, Copy)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for LagrangeCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Weighted sum of the Lagrange basis polynomials at `xq`.
#[inline]
fn basis_sum(x: &[f64], y: &[f64], xq: f64) -> f64 {
    let n = x.len();
    let mut result = 0.0;

    for i in 0..n {
        let mut term = y[i];
        for j in 0..n {
            if j != i {
                term *= (xq - x[j]) / (x[i] - x[j]);
            }
        }
        result += term;
    }

    result
}


/// Lagrange polynomial over borrowed nodes, usable through [`Interpolator`].
#[derive(Debug, Clone, Copy)]
pub struct Lagrange<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> Lagrange<'a> {
    /// Validates the nodes (non-empty, finite, equal length, pairwise distinct).
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Result<Self, InterpolationError> {
        let cfg = LagrangeCfg::new().set_x(x)?.set_y(y)?;
        cfg.common.validate()?;
        Ok(Self { x, y })
    }

    /// Degree of the interpolating polynomial, `n - 1`.
    pub fn degree(&self) -> usize { self.x.len() - 1 }
}

impl Interpolator for Lagrange<'_> {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        if !x.is_finite() {
            return Err(InterpolationError::NonFiniteQuery { got: x });
        }
        Ok(basis_sum(self.x, self.y, x))
    }
}


/// Performs Lagrange interpolation over the data in [`LagrangeCfg`].
///
/// # Behavior
/// - Validates the nodes (see [`CommonCfg::validate`]).
/// - For each evaluation point `xq` in `cfg.common.x_eval()` evaluates the
///   basis-polynomial sum.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::EmptyInput`], [`InterpolationError::UnequalLength`],
///   [`InterpolationError::DuplicateX`] from validation.
/// - [`InterpolationError::OutOfBounds`] if extrapolation is disabled and an
///   evaluation point lies outside the node range.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::Lagrange,
        x.len(),
        evals.len(),
    );
    report.evaluated.reserve(evals.len());

    let (x_min, x_max) = cfg.common.x_range();
    for &xq in evals {
        if !cfg.common.extrapolate() && (xq < x_min || xq > x_max) {
            return Err(InterpolationError::OutOfBounds {
                got: xq,
                x_min,
                x_max
            });
        }

        report.evaluated.push(basis_sum(x, y, xq));
    }

    Ok(report)
}


/// Value at `x` of the unique polynomial through `points`.
///
/// Convenience form over `(x_i, y_i)` pairs; extrapolation is allowed.
/// Unlike [`LagrangeCfg`], no minimum node spacing applies: only nodes that
/// coincide exactly are rejected, so `[(0, 0), (5e-13, 1)]` is accepted.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] if `points` is empty.
/// - [`InterpolationError::NonFiniteVec`] / [`InterpolationError::NonFiniteQuery`]
///   for NaN or inf inputs.
/// - [`InterpolationError::DuplicateX`] if two nodes are equal (basis undefined).
pub fn lagrange_interpolate(points: &[(f64, f64)], x: f64) -> Result<f64, InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
    for v in [&xs, &ys] {
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
    }
    if let Some((x1, x2)) = first_duplicate(&xs, 0.0) {
        return Err(InterpolationError::DuplicateX { x1, x2 });
    }

    Lagrange { x: &xs, y: &ys }.eval(x)
}
