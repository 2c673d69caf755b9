//! Bisection method

use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{
    RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil, IterationRecord
};
use super::tolerances::{
    DynamicTolerance, bisection_theoretical_iter, bracket_half_width, bracket_midpoint, min_width_tol
};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::signs::opposite_sign;
use crate::errors::ErrorKind;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange  { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}
impl BisectionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BisectionError::RootFinding(e)       => e.kind(),
            BisectionError::Tolerance(e)         => e.kind(),
            BisectionError::NoSignChange { .. }
            | BisectionError::InvalidBounds { .. } => ErrorKind::Domain,
        }
    }
}


/// Bisection configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Construction
/// - Use [`BisectionCfg::new`] then optional setters
///   (`set_abs_fx`, `set_abs_x`, `set_rel_x`, `set_max_iter`).
///
/// # Defaults
/// - If `max_iter` is `None`, [`bisection`] uses the theoretical number of
///   halvings for the initial bracket and the smallest width tolerance
///   `abs_x + rel_x`, capped at [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for BisectionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BisectionCfg);


#[inline]
fn eval_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, BisectionError> where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }

    Ok(fx)
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that `func` is continuous on `[a, b]` and that
/// `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the search interval. Must be finite and greater than `a`.
/// └ `cfg`  - [`BisectionCfg`]
///    Defaults:
///    ├ cfg.abs_fx = 1e-12
///    ├ cfg.abs_x  = 0.0
///    └ cfg.rel_x  = 4 * machine_epsilon
///
/// # Returns
///
/// [`RootFindingReport`] with:
/// ├ `root`                : midpoint of the last bracket examined
/// ├ `f_root`              : function value at `root`
/// ├ `iterations`          : number of halvings, 0 if a bound is already a root
/// ├ `evaluations`         : number of function evaluations
/// ├ `termination_reason`  : [`TerminationReason::ToleranceReached`] or [`TerminationReason::IterationLimit`]
/// ├ `tolerance_satisfied` : `AbsFxReached`, `WidthTolReached` or `ToleranceNotReached`
/// ├ `stencil`             : [`Stencil::Bracket`] holding the bracket `root` was taken from
/// ├ `algorithm_name`      : "bisection"
/// └ `history`             : one [`IterationRecord`] per midpoint
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBounds`] - `a` or `b` is NaN/inf or `a >= b`.
/// ├ [`BisectionError::NoSignChange`]  - `func(a)` and `func(b)` do not have opposite signs.
/// │
/// ├ Propagated via [`BisectionError::RootFinding`]
/// │  └ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN/inf.
/// └ Propagated via [`BisectionError::Tolerance`]
///    └ [`ToleranceError::InvalidTolerance`] - computed width tolerance <= 0 or non-finite.
///
/// # Notes
/// ├ Width test is on the half-width `(b - a) / 2` around the midpoint, so the
/// │ reported root is within `width_tol` of a true root.
/// ├ With `abs_x = tol`, `rel_x = 0` the loop ends within `ceil(log2((b - a) / tol))` iterations.
/// └ Midpoint and half-width are formed as `a/2 + b/2` and `b/2 - a/2`, so brackets
///   wider than `f64::MAX` (e.g. `[-1e308, 1e308]`) are handled.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let algo_name = ALGORITHM.algorithm_name();
    let abs_fx    = cfg.common.abs_fx();
    let abs_x     = cfg.common.abs_x();
    let rel_x     = cfg.common.rel_x();

    let theoretical_iters = bisection_theoretical_iter(a, b, min_width_tol(abs_x, rel_x))?;
    let num_iter = cfg.common.resolve_max_iter(
        theoretical_iters.min(GLOBAL_MAX_ITER_FALLBACK)
    );

    let mut evals = 0;
    let mut history = Vec::new();

    // immediate bounds are roots
    let mut fa = eval_checked(&mut func, a, &mut evals)?;
    if fa.abs() <= abs_fx {
        history.push(IterationRecord { iteration: 0, estimate: a, residual: fa });
        return Ok(RootFindingReport {
            root                : a,
            f_root              : fa,
            iterations          : 0,
            evaluations         : evals,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
            stencil             : Stencil::bracket(a, b),
            algorithm_name      : algo_name,
            history,
        });
    }
    let fb = eval_checked(&mut func, b, &mut evals)?;
    if fb.abs() <= abs_fx {
        history.push(IterationRecord { iteration: 0, estimate: b, residual: fb });
        return Ok(RootFindingReport {
            root                : b,
            f_root              : fb,
            iterations          : 0,
            evaluations         : evals,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
            stencil             : Stencil::bracket(a, b),
            algorithm_name      : algo_name,
            history,
        });
    }

    if !opposite_sign(fa, fb) {
        return Err(BisectionError::NoSignChange { a, b });
    }

    history.reserve(num_iter);

    // algorithm
    let mut midpoint = a;       // gets overwritten
    let mut fm       = fa;      // gets overwritten
    for iter in 1..=num_iter {
        midpoint = bracket_midpoint(a, b);
        fm       = eval_checked(&mut func, midpoint, &mut evals)?;
        history.push(IterationRecord { iteration: iter, estimate: midpoint, residual: fm });

        // check for abs fx tolerance
        if fm.abs() <= abs_fx {
            return Ok(RootFindingReport {
                root                : midpoint,
                f_root              : fm,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
                stencil             : Stencil::bracket(a, b),
                algorithm_name      : algo_name,
                history,
            });
        }

        // check for half-width tolerance around the midpoint
        let width_tol = ALGORITHM.calculate_tolerance(
            &DynamicTolerance::width(a, b),
            abs_x,
            rel_x
        )?;
        if bracket_half_width(a, b) <= width_tol {
            return Ok(RootFindingReport {
                root                : midpoint,
                f_root              : fm,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::WidthTolReached,
                stencil             : Stencil::bracket(a, b),
                algorithm_name      : algo_name,
                history,
            });
        }

        // shrink interval
        if opposite_sign(fa, fm) {
            b = midpoint;
        } else {
            a  = midpoint;
            fa = fm;
        }
    }

    Ok(RootFindingReport {
        root                : midpoint,
        f_root              : fm,
        iterations          : num_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil             : Stencil::bracket(a, b),
        algorithm_name      : algo_name,
        history,
    })
}
