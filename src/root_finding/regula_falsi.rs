//! Regula falsi (false position) method and its endpoint-rescaling variants.

use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{
    RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil, IterationRecord
};
use super::tolerances::{DynamicTolerance, bracket_half_width, bracket_midpoint};
use super::errors::{AlgorithmError, RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::signs::opposite_sign;
use crate::errors::ErrorKind;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum RegulaFalsiError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange  { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}
impl RegulaFalsiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegulaFalsiError::RootFinding(e)        => e.kind(),
            RegulaFalsiError::Tolerance(e)          => e.kind(),
            RegulaFalsiError::Algorithm(e)          => e.kind(),
            RegulaFalsiError::NoSignChange { .. }
            | RegulaFalsiError::InvalidBounds { .. } => ErrorKind::Domain,
        }
    }
}


/// Regula falsi configuration.
///
/// # Fields
/// - `common`  : [`CommonCfg`] with tolerances and optional `max_iter`.
/// - `variant` : which false-position update to use ([`BracketFamily`]).
///     - `RegulaFalsiPure`           : classic; retained endpoint may stagnate
///     - `RegulaFalsiIllinois`       : halves the retained endpoint's f-value
///     - `RegulaFalsiPegasus`        : scales it by `f_prev / (f_prev + f_new)`
///     - `RegulaFalsiAndersonBjorck` : scales it by `1 - f_new / f_prev` (or halves)
///
/// # Defaults
/// - `variant` is `RegulaFalsiPure`.
/// - If `max_iter` is `None`, [`Algorithm::default_max_iter`] of the variant.
#[derive(Debug, Copy, Clone)]
pub struct RegulaFalsiCfg {
    common: CommonCfg,
    variant: BracketFamily,
}
impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            variant: BracketFamily::RegulaFalsiPure,
        }
    }

    /// Selects the false-position variant; [`BracketFamily::Bisection`] is rejected.
    pub fn set_variant(mut self, v: BracketFamily) -> Result<Self, AlgorithmError> {
        if !v.is_regula_falsi() {
            return Err(AlgorithmError::IncompatibleAlgorithm {
                algorithm: Algorithm::Bracket(v)
            });
        }
        self.variant = v;
        Ok(self)
    }

    pub fn variant(&self) -> BracketFamily { self.variant }
}
impl Default for RegulaFalsiCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(RegulaFalsiCfg);


/// Secant intercept of the line through `(a, fa)` and `(b, fb)`.
///
/// Falls back to the midpoint when the denominator is degenerate or the
/// intercept leaves the open interval `(a, b)`.
#[inline]
fn next_sol_estimate((a, fa): (f64, f64), (b, fb): (f64, f64)) -> f64 {
    let denom = fb - fa;
    let scale = fa.abs().max(fb.abs()).max(1.0);

    if denom.abs() <= f64::EPSILON * scale {
        return bracket_midpoint(a, b);
    }

    let x = ((a * fb) - (b * fa)) / denom;
    if a < x && x < b { x } else { bracket_midpoint(a, b) }
}

#[inline]
fn eval_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, RegulaFalsiError> where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }

    Ok(fx)
}

/// Rescales the retained endpoint value `f_keep` after the same side was
/// replaced twice in a row. `f_new` is the new estimate's value, `f_prev` the
/// value of the endpoint it replaces.
#[inline]
fn rescale_retained(variant: BracketFamily, f_keep: f64, f_new: f64, f_prev: f64) -> f64 {
    match variant {
        BracketFamily::RegulaFalsiIllinois       => f_keep * 0.5,
        BracketFamily::RegulaFalsiPegasus        => f_keep * f_prev / (f_prev + f_new),
        BracketFamily::RegulaFalsiAndersonBjorck => {
            let ratio = 1.0 - f_new / f_prev;
            if ratio <= 0.0 { f_keep * 0.5 } else { f_keep * ratio }
        },
        BracketFamily::RegulaFalsiPure | BracketFamily::Bisection => f_keep,
    }
}


/// Finds a root of a function using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Same preconditions as bisection: `func` continuous on `[a, b]` and a sign
/// change between `func(a)` and `func(b)`.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the search interval. Must be finite and greater than `a`.
/// └ `cfg`  - [`RegulaFalsiCfg`]
///
/// # Returns
///
/// [`RootFindingReport`] with:
/// ├ `termination_reason`  : `ToleranceReached` or `IterationLimit`
/// ├ `tolerance_satisfied` : which test fired
/// │  ├ `AbsFxReached`    : |f(x_n)| <= abs_fx
/// │  ├ `WidthTolReached` : b - a <= width tolerance
/// │  └ `StepSizeReached` : |x_n - x_{n-1}| <= width tolerance of the pair
/// ├ `stencil`             : [`Stencil::Bracket`] of the final interval
/// ├ `algorithm_name`      : variant-specific, e.g. "regula_falsi_illinois"
/// └ `history`             : one [`IterationRecord`] per secant estimate
///
/// # Errors
///
/// ┌ [`RegulaFalsiError::InvalidBounds`] - `a` or `b` is NaN/inf or `a >= b`.
/// ├ [`RegulaFalsiError::NoSignChange`]  - no sign change over `[a, b]`.
/// ├ Propagated via [`RegulaFalsiError::RootFinding`]
/// │  └ [`RootFindingError::NonFiniteEvaluation`]
/// └ Propagated via [`RegulaFalsiError::Tolerance`]
///    └ [`ToleranceError::InvalidTolerance`]
///
/// # Notes
/// ├ The pure variant keeps one endpoint fixed on convex/concave functions,
/// │ so the width test may never fire; the step test still terminates it.
/// └ Degenerate secant steps are replaced by a bisection step internally.
pub fn regula_falsi<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: RegulaFalsiCfg
) -> Result<RootFindingReport, RegulaFalsiError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(RegulaFalsiError::InvalidBounds { a, b });
    }

    let variant   = cfg.variant;
    let algorithm = Algorithm::Bracket(variant);
    let algo_name = algorithm.algorithm_name();

    let abs_fx   = cfg.common.abs_fx();
    let abs_x    = cfg.common.abs_x();
    let rel_x    = cfg.common.rel_x();
    let num_iter = cfg.common.resolve_max_iter(
        algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK)
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

    let mut fb = eval_checked(&mut func, b, &mut evals)?;
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
        return Err(RegulaFalsiError::NoSignChange { a, b });
    }

    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Side { Left, Right }
    let mut last_side: Option<Side> = None;

    let mut sol_estimate = a;     // gets overwritten
    let mut fsol         = fa;    // gets overwritten
    let mut prev_estimate: Option<f64> = None;

    for iter in 1..=num_iter {
        sol_estimate = next_sol_estimate((a, fa), (b, fb));
        fsol         = eval_checked(&mut func, sol_estimate, &mut evals)?;
        history.push(IterationRecord { iteration: iter, estimate: sol_estimate, residual: fsol });

        // check for abs fx tolerance
        if fsol.abs() <= abs_fx {
            return Ok(RootFindingReport {
                root                : sol_estimate,
                f_root              : fsol,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
                stencil             : Stencil::bracket(a, b),
                algorithm_name      : algo_name,
                history,
            });
        }

        // shrink interval; rescale the retained endpoint when the same
        // side is replaced twice in a row
        if opposite_sign(fa, fsol) {
            if last_side == Some(Side::Right) {
                fa = rescale_retained(variant, fa, fsol, fb);
            }
            b  = sol_estimate;
            fb = fsol;
            last_side = Some(Side::Right);
        } else {
            if last_side == Some(Side::Left) {
                fb = rescale_retained(variant, fb, fsol, fa);
            }
            a  = sol_estimate;
            fa = fsol;
            last_side = Some(Side::Left);
        }

        // check for interval width tolerance
        let width_tol = algorithm.calculate_tolerance(
            &DynamicTolerance::width(a, b),
            abs_x,
            rel_x
        )?;
        if bracket_half_width(a, b) <= 0.5 * width_tol {
            return Ok(RootFindingReport {
                root                : sol_estimate,
                f_root              : fsol,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::WidthTolReached,
                stencil             : Stencil::bracket(a, b),
                algorithm_name      : algo_name,
                history,
            });
        }

        // check step between consecutive estimates
        if let Some(prev) = prev_estimate {
            let (lo, hi) = if prev < sol_estimate { (prev, sol_estimate) } else { (sol_estimate, prev) };
            let step_tol = algorithm.calculate_tolerance(
                &DynamicTolerance::width(lo, hi),
                abs_x,
                rel_x
            )?;
            if hi - lo <= step_tol {
                return Ok(RootFindingReport {
                    root                : sol_estimate,
                    f_root              : fsol,
                    iterations          : iter,
                    evaluations         : evals,
                    termination_reason  : TerminationReason::ToleranceReached,
                    tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                    stencil             : Stencil::bracket(a, b),
                    algorithm_name      : algo_name,
                    history,
                });
            }
        }
        prev_estimate = Some(sol_estimate);
    }

    Ok(RootFindingReport {
        root                : sol_estimate,
        f_root              : fsol,
        iterations          : num_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil             : Stencil::bracket(a, b),
        algorithm_name      : algo_name,
        history,
    })
}
