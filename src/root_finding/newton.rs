//! Newton-Raphson method
//!
//! `x_{n+1} = x_n - f(x_n) / f'(x_n)`, with `f'` either supplied by the
//! caller or estimated by a central difference. Every step passes through
//! [`newton_step`], which enforces the derivative floor and the step cap.

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{
    RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil, IterationRecord
};
use super::tolerances::DynamicTolerance;
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use crate::errors::ErrorKind;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);

/// Smallest accepted `|f'(x)|` before a step is refused.
pub const DEFAULT_MIN_DERIVATIVE: f64 = 1e-10;


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("invalid max step, must be > 0 or f64::INFINITY. got {step}")]
    InvalidMaxStep { step: f64 },

    #[error("invalid derivative floor: must be finite and >= 0. got {got}")]
    InvalidMinDerivative { got: f64 },

    #[error("step non-finite at x={x}, step={step}")]
    StepNotFinite { x: f64, step: f64 },

    #[error("derivative vanished at x={x}: |f'(x)|={dfx} below {min}")]
    DerivativeTooSmall { x: f64, dfx: f64, min: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },
}
impl NewtonError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NewtonError::RootFinding(e) => e.kind(),
            NewtonError::Tolerance(e)   => e.kind(),
            NewtonError::InvalidGuess { .. }           => ErrorKind::Domain,
            NewtonError::InvalidMaxStep { .. }
            | NewtonError::InvalidMinDerivative { .. } => ErrorKind::Configuration,
            NewtonError::DerivativeNotFinite { .. }    => ErrorKind::Evaluation,
            NewtonError::StepNotFinite { .. }
            | NewtonError::DerivativeTooSmall { .. }   => ErrorKind::Convergence,
        }
    }
}


/// Newton configuration.
///
/// # Fields
/// - `common`         : [`CommonCfg`] with tolerances and optional `max_iter`.
/// - `max_step`       : cap on `|x_{n+1} - x_n|` (default: ∞).
/// - `min_derivative` : `|f'(x)|` floor below which the step is refused
///   (default: [`DEFAULT_MIN_DERIVATIVE`]).
///
/// # Defaults
/// - If `max_iter` is unset, [`newton`] uses [`Algorithm::default_max_iter`]
///   for [`OpenFamily::Newton`].
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
    max_step: f64,
    min_derivative: f64,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            max_step: f64::INFINITY,
            min_derivative: DEFAULT_MIN_DERIVATIVE,
        }
    }

    /// Must be `> 0`; `f64::INFINITY` disables the cap.
    pub fn set_max_step(mut self, v: f64) -> Result<Self, NewtonError> {
        if v.is_nan() || v <= 0.0 {
            return Err(NewtonError::InvalidMaxStep { step: v });
        }
        self.max_step = v;
        Ok(self)
    }

    /// Must be finite and `>= 0`; `0` only refuses an exactly zero derivative.
    pub fn set_min_derivative(mut self, v: f64) -> Result<Self, NewtonError> {
        if !v.is_finite() || v < 0.0 {
            return Err(NewtonError::InvalidMinDerivative { got: v });
        }
        self.min_derivative = v;
        Ok(self)
    }

    pub fn max_step(&self) -> f64 { self.max_step }
    pub fn min_derivative(&self) -> f64 { self.min_derivative }
}
impl Default for NewtonCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);


#[inline]
fn eval_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }

    Ok(fx)
}


/// Where `f'(x)` comes from.
enum Slope<G> {
    Analytic(G),
    CentralDifference,
}

impl<G> Slope<G> where G: FnMut(f64) -> f64 {
    fn at<F>(&mut self, f: &mut F, x: f64, evals: &mut usize) -> Result<f64, NewtonError>
    where F: FnMut(f64) -> f64 {
        let dfx = match self {
            Slope::Analytic(df)      => { *evals += 1; df(x) },
            Slope::CentralDifference => central_difference(f, x, evals)?,
        };
        if !dfx.is_finite() {
            return Err(NewtonError::DerivativeNotFinite { x, dfx });
        }

        Ok(dfx)
    }
}

/// `(f(x + h) - f(x - h)) / (2h)` with `h = eps^{1/3} max(|x|, 1)`.
///
/// The quotient uses the spacing actually represented, `(x + h) - (x - h)`.
/// Near `±f64::MAX` the stencil leaves the finite range and the step is
/// refused with [`NewtonError::StepNotFinite`].
fn central_difference<F>(f: &mut F, x: f64, evals: &mut usize) -> Result<f64, NewtonError>
where F: FnMut(f64) -> f64 {
    let h  = f64::EPSILON.cbrt() * x.abs().max(1.0);
    let xp = x + h;
    let xm = x - h;
    if !(xp.is_finite() && xm.is_finite()) {
        return Err(NewtonError::StepNotFinite { x, step: h });
    }

    let fp = eval_checked(f, xp, evals)?;
    let fm = eval_checked(f, xm, evals)?;
    Ok((fp - fm) / (xp - xm))
}


/// Next iterate from `x`: refuses `|f'(x)| < min_derivative`, clips the
/// raw step `-f/f'` to `±max_step`.
#[inline]
fn newton_step(x: f64, fx: f64, dfx: f64, cfg: &NewtonCfg) -> Result<f64, NewtonError> {
    if dfx.abs() < cfg.min_derivative {
        return Err(NewtonError::DerivativeTooSmall { x, dfx, min: cfg.min_derivative });
    }

    let step = (-fx / dfx).clamp(-cfg.max_step, cfg.max_step);
    let x_next = x + step;
    if !x_next.is_finite() {
        return Err(NewtonError::StepNotFinite { x, step });
    }

    Ok(x_next)
}


/// Bookkeeping shared by every exit of the iteration.
struct Trace {
    evals   : usize,
    history : Vec<IterationRecord>,
}

impl Trace {
    fn record(&mut self, iteration: usize, estimate: f64, residual: f64) {
        self.history.push(IterationRecord { iteration, estimate, residual });
    }

    fn finish(
        self,
        (root, f_root): (f64, f64),
        iterations: usize,
        termination_reason: TerminationReason,
        tolerance_satisfied: ToleranceSatisfied,
        previous: f64,
    ) -> RootFindingReport {
        RootFindingReport {
            root,
            f_root,
            iterations,
            evaluations    : self.evals,
            termination_reason,
            tolerance_satisfied,
            stencil        : Stencil::singleton(previous),
            algorithm_name : ALGORITHM.algorithm_name(),
            history        : self.history,
        }
    }
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
///
/// ┌ `func`  - function whose root is sought
/// ├ `dfunc` - analytic derivative, or `None` for a central difference
/// ├ `x0`    - finite initial guess
/// └ `cfg`   - [`NewtonCfg`]
///
/// # Returns
///
/// [`RootFindingReport`] with:
/// ├ `root`                : last accepted iterate
/// ├ `f_root`              : function value at `root`
/// ├ `iterations`          : Newton steps taken, 0 if `x0` is already a root
/// ├ `evaluations`         : calls to `func` and `dfunc` combined
/// ├ `termination_reason`  : `ToleranceReached`, `MachinePrecisionReached` or `IterationLimit`
/// ├ `tolerance_satisfied` : `AbsFxReached`, `StepSizeReached` or `ToleranceNotReached`
/// ├ `stencil`             : the iterate the last step started from
/// ├ `algorithm_name`      : "newton"
/// └ `history`             : `x0` as iteration 0, then every accepted iterate
///
/// # Errors
///
/// ┌ [`NewtonError::InvalidGuess`]        - `x0` NaN/inf
/// ├ [`NewtonError::DerivativeTooSmall`]  - `|f'(x)| < min_derivative`
/// ├ [`NewtonError::DerivativeNotFinite`] - `f'(x)` NaN/inf
/// ├ [`NewtonError::StepNotFinite`]       - next iterate or difference stencil leaves the finite range
/// │
/// ├ Propagated via [`NewtonError::RootFinding`]
/// │  └ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN/inf
/// └ Propagated via [`NewtonError::Tolerance`]
///    └ [`ToleranceError::InvalidTolerance`]       - computed step tolerance <= 0 or non-finite
///
/// # Notes
/// ├ A step that leaves `x` unchanged ends the run with `MachinePrecisionReached`.
/// └ Convergence is local: a poor `x0` may diverge or cycle, which surfaces as
///   `IterationLimit`. Use a bracketing method when a sign change is known.
pub fn newton<F, G>(
    mut func: F,
    dfunc: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let abs_fx   = cfg.common.abs_fx();
    let num_iter = cfg.common.resolve_max_iter(
        ALGORITHM.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK)
    );
    let mut slope = match dfunc {
        Some(df) => Slope::Analytic(df),
        None     => Slope::CentralDifference,
    };

    let mut trace = Trace { evals: 0, history: Vec::with_capacity(num_iter + 1) };
    let mut x  = x0;
    let mut fx = eval_checked(&mut func, x, &mut trace.evals)?;
    trace.record(0, x, fx);
    if fx.abs() <= abs_fx {
        return Ok(trace.finish(
            (x, fx), 0,
            TerminationReason::ToleranceReached, ToleranceSatisfied::AbsFxReached, x
        ));
    }

    let mut prev_x = x;
    for iter in 1..=num_iter {
        let dfx    = slope.at(&mut func, x, &mut trace.evals)?;
        let x_next = newton_step(x, fx, dfx, &cfg)?;
        if x_next == x {
            return Ok(trace.finish(
                (x, fx), iter,
                TerminationReason::MachinePrecisionReached, ToleranceSatisfied::StepSizeReached, x
            ));
        }

        let fx_next = eval_checked(&mut func, x_next, &mut trace.evals)?;
        trace.record(iter, x_next, fx_next);

        let step_tol = ALGORITHM.calculate_tolerance(
            &DynamicTolerance::step(x, x_next),
            cfg.common.abs_x(),
            cfg.common.rel_x()
        )?;
        let satisfied = if fx_next.abs() <= abs_fx {
            Some(ToleranceSatisfied::AbsFxReached)
        } else if (x_next - x).abs() <= step_tol {
            Some(ToleranceSatisfied::StepSizeReached)
        } else {
            None
        };
        if let Some(satisfied) = satisfied {
            return Ok(trace.finish(
                (x_next, fx_next), iter, TerminationReason::ToleranceReached, satisfied, x
            ));
        }

        prev_x = x;
        x      = x_next;
        fx     = fx_next;
    }

    Ok(trace.finish(
        (x, fx), num_iter,
        TerminationReason::IterationLimit, ToleranceSatisfied::ToleranceNotReached, prev_x
    ))
}
