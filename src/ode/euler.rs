//! Euler and modified Euler methods
//!
//! ```text
//! euler           : y_{n+1} = y_n + h f(t_n, y_n)
//! modified euler  : p       = y_n + h f(t_n, y_n)
//!                   y_{n+1} = y_n + h/2 [f(t_n, y_n) + f(t_{n+1}, p)]
//! ```

use crate::ode::algorithms::Method;
use crate::ode::config::IvpCfg;
use crate::ode::errors::OdeError;
use crate::ode::trajectory::{slope, Trajectory};


#[inline]
pub(crate) fn euler_step<F>(
    f: &F, t: f64, y: f64, h: f64, evals: &mut usize
) -> Result<f64, OdeError> where F: Fn(f64, f64) -> f64 {
    let k1 = slope(f, t, y, evals)?;
    Ok(y + h * k1)
}

#[inline]
pub(crate) fn modified_euler_step<F>(
    f: &F, t: f64, y: f64, h: f64, evals: &mut usize
) -> Result<f64, OdeError> where F: Fn(f64, f64) -> f64 {
    let k1 = slope(f, t, y, evals)?;
    let predictor = y + h * k1;
    let k2 = slope(f, t + h, predictor, evals)?;
    Ok(y + 0.5 * h * (k1 + k2))
}


/// Solves `y' = f(t, y)` with the
/// [explicit Euler method](https://en.wikipedia.org/wiki/Euler_method).
///
/// ┌ `f`   - right-hand side `f(t, y)`
/// └ `cfg` - [`IvpCfg`] with `t0`, `y0`, `h`, `steps`
///
/// Returns a lazy [`Trajectory`]; first order, one evaluation per step.
pub fn euler<F>(f: F, cfg: IvpCfg) -> Trajectory<F>
where F: Fn(f64, f64) -> f64 {
    Trajectory::new(f, cfg, Method::Euler)
}

/// Solves `y' = f(t, y)` with Euler predictor and trapezoidal corrector.
///
/// Second order, two evaluations per step.
pub fn modified_euler<F>(f: F, cfg: IvpCfg) -> Trajectory<F>
where F: Fn(f64, f64) -> f64 {
    Trajectory::new(f, cfg, Method::ModifiedEuler)
}
