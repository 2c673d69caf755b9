//! Lazy, restartable trajectories.
//!
//! A [`Trajectory`] owns the right-hand side and the [`IvpCfg`]; nothing is
//! evaluated until it is iterated. Each call to [`Trajectory::iter`] starts a
//! fresh pass from `(t0, y0)`.

use std::iter::FusedIterator;

use crate::ode::algorithms::Method;
use crate::ode::config::IvpCfg;
use crate::ode::errors::OdeError;
use crate::ode::report::{OdePoint, OdeReport};
use crate::ode::{euler, runge_kutta};


/// Evaluates `f(t, y)` and rejects NaN/inf slopes.
#[inline]
pub(crate) fn slope<F>(
    f: &F,
    t: f64,
    y: f64,
    evals: &mut usize
) -> Result<f64, OdeError> where F: Fn(f64, f64) -> f64 {
    let value = { *evals += 1; f(t, y) };
    if !value.is_finite() {
        return Err(OdeError::NonFiniteEvaluation { t, y, value });
    }

    Ok(value)
}

/// One step of `method` from `(t, y)`.
fn advance<F>(
    method: Method,
    f: &F,
    t: f64,
    y: f64,
    h: f64,
    evals: &mut usize
) -> Result<f64, OdeError> where F: Fn(f64, f64) -> f64 {
    match method {
        Method::Euler         => euler::euler_step(f, t, y, h, evals),
        Method::ModifiedEuler => euler::modified_euler_step(f, t, y, h, evals),
        Method::Rk2(variant)  => runge_kutta::rk2_step(variant, f, t, y, h, evals),
        Method::Rk4           => runge_kutta::rk4_step(f, t, y, h, evals),
    }
}


/// Integration of `y' = f(t, y)` with a fixed step.
///
/// Built by [`euler`](crate::ode::euler()), [`modified_euler`](crate::ode::modified_euler()),
/// [`rk2`](crate::ode::rk2()) or [`rk4`](crate::ode::rk4()).
#[derive(Debug, Clone)]
pub struct Trajectory<F> {
    f      : F,
    cfg    : IvpCfg,
    method : Method,
}

impl<F> Trajectory<F>
where F: Fn(f64, f64) -> f64 {
    pub(crate) fn new(f: F, cfg: IvpCfg, method: Method) -> Self {
        Self { f, cfg, method }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn config(&self) -> IvpCfg { self.cfg }

    /// Fresh pass over the trajectory, starting at `(t0, y0)`.
    pub fn iter(&self) -> Steps<'_, F> {
        Steps {
            f           : &self.f,
            method      : self.method,
            cfg         : self.cfg,
            emitted     : 0,
            y           : self.cfg.y0(),
            evaluations : 0,
            done        : false,
        }
    }

    /// Evaluates every point and collects them.
    ///
    /// # Errors
    /// The first error produced by the pass, see [`Steps`].
    pub fn solve(&self) -> Result<OdeReport, OdeError> {
        let n = self.cfg.steps() + 1;
        let mut t = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);

        let mut steps = self.iter();
        for point in steps.by_ref() {
            let point = point?;
            t.push(point.t);
            y.push(point.y);
        }

        Ok(OdeReport {
            algorithm_name : self.method.algorithm_name(),
            t,
            y,
            evaluations    : steps.evaluations(),
        })
    }
}

impl<'a, F> IntoIterator for &'a Trajectory<F>
where F: Fn(f64, f64) -> f64 {
    type Item = Result<OdePoint, OdeError>;
    type IntoIter = Steps<'a, F>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}


/// Iterator over one pass of a [`Trajectory`].
///
/// Yields `steps + 1` points when every evaluation is finite. On a NaN/inf
/// slope ([`OdeError::NonFiniteEvaluation`]) or state
/// ([`OdeError::NonFiniteState`]) it yields that error once and then ends.
#[derive(Debug)]
pub struct Steps<'a, F> {
    f           : &'a F,
    method      : Method,
    cfg         : IvpCfg,
    emitted     : usize,
    y           : f64,
    evaluations : usize,
    done        : bool,
}

impl<F> Steps<'_, F> {
    /// Right-hand side calls made so far in this pass.
    pub fn evaluations(&self) -> usize { self.evaluations }

    // t_n is recomputed from t0 so rounding does not accumulate over steps
    #[inline]
    fn time_at(&self, n: usize) -> f64 {
        self.cfg.t0() + n as f64 * self.cfg.h()
    }
}

impl<F> Iterator for Steps<'_, F>
where F: Fn(f64, f64) -> f64 {
    type Item = Result<OdePoint, OdeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.emitted == 0 {
            self.emitted = 1;
            return Some(Ok(OdePoint { t: self.cfg.t0(), y: self.y }));
        }

        if self.emitted > self.cfg.steps() {
            self.done = true;
            return None;
        }

        let t = self.time_at(self.emitted - 1);
        let y_next = match advance(
            self.method, self.f, t, self.y, self.cfg.h(), &mut self.evaluations
        ) {
            Ok(v)  => v,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        let t_next = self.time_at(self.emitted);
        if !y_next.is_finite() {
            self.done = true;
            return Some(Err(OdeError::NonFiniteState { t: t_next, y: y_next }));
        }

        self.y = y_next;
        self.emitted += 1;
        Some(Ok(OdePoint { t: t_next, y: y_next }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = self.cfg.steps() + 1 - self.emitted;
        (remaining.min(1), Some(remaining))
    }
}

impl<F> FusedIterator for Steps<'_, F> where F: Fn(f64, f64) -> f64 {}
