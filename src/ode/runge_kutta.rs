//! Explicit Runge–Kutta methods (two- and four-stage).

use crate::ode::algorithms::{Method, Rk2Variant};
use crate::ode::config::IvpCfg;
use crate::ode::errors::OdeError;
use crate::ode::trajectory::{slope, Trajectory};


#[inline]
pub(crate) fn rk2_step<F>(
    variant: Rk2Variant, f: &F, t: f64, y: f64, h: f64, evals: &mut usize
) -> Result<f64, OdeError> where F: Fn(f64, f64) -> f64 {
    let (c2, b1, b2) = variant.tableau();

    let k1 = slope(f, t, y, evals)?;
    let k2 = slope(f, t + c2 * h, y + c2 * h * k1, evals)?;

    Ok(y + h * (b1 * k1 + b2 * k2))
}

#[inline]
pub(crate) fn rk4_step<F>(
    f: &F, t: f64, y: f64, h: f64, evals: &mut usize
) -> Result<f64, OdeError> where F: Fn(f64, f64) -> f64 {
    let k1 = slope(f, t,          y,                evals)?;
    let k2 = slope(f, t + C2 * h, y + h * A21 * k1, evals)?;
    let k3 = slope(f, t + C3 * h, y + h * A32 * k2, evals)?;
    let k4 = slope(f, t + C4 * h, y + h * A43 * k3, evals)?;

    Ok(y + h * (B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4))
}


/// Solves `y' = f(t, y)` with a two-stage
/// [Runge–Kutta method](https://en.wikipedia.org/wiki/Runge%E2%80%93Kutta_methods#Second-order_methods_with_two_stages).
///
/// ┌ `f`       - right-hand side `f(t, y)`
/// ├ `cfg`     - [`IvpCfg`]
/// └ `variant` - [`Rk2Variant::Heun`], [`Rk2Variant::Midpoint`] or [`Rk2Variant::Ralston`]
pub fn rk2<F>(f: F, cfg: IvpCfg, variant: Rk2Variant) -> Trajectory<F>
where F: Fn(f64, f64) -> f64 {
    Trajectory::new(f, cfg, Method::Rk2(variant))
}

/// Solves `y' = f(t, y)` with the classical fourth-order Runge–Kutta method.
pub fn rk4<F>(f: F, cfg: IvpCfg) -> Trajectory<F>
where F: Fn(f64, f64) -> f64 {
    Trajectory::new(f, cfg, Method::Rk4)
}


// Classical RK4 coefficients
const C2: f64 = 0.5;
const C3: f64 = 0.5;
const C4: f64 = 1.0;
const A21: f64 = 0.5;
const A32: f64 = 0.5;
const A43: f64 = 1.0;
const B1: f64 = 1.0 / 6.0;
const B2: f64 = 1.0 / 3.0;
const B3: f64 = 1.0 / 3.0;
const B4: f64 = 1.0 / 6.0;
