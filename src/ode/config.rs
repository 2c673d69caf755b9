//! Initial value problem configuration.
//!
//! [`IvpCfg`]
//! - `t0`    : initial time
//! - `y0`    : initial value `y(t0)`
//! - `h`     : fixed step, may be negative to integrate backwards
//! - `steps` : number of steps; trajectories hold `steps + 1` points
//!
//! [`IvpCfg::new`] starts from `t0 = 0`, `y0 = 0`, [`DEFAULT_STEP`], zero steps.

use crate::ode::errors::OdeError;

pub const DEFAULT_STEP: f64 = 0.01;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IvpCfg {
    t0    : f64,
    y0    : f64,
    h     : f64,
    steps : usize,
}

impl Default for IvpCfg {
    fn default() -> Self { Self::new() }
}

impl IvpCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { t0: 0.0, y0: 0.0, h: DEFAULT_STEP, steps: 0 }
    }

    pub fn set_t0(mut self, v: f64) -> Result<Self, OdeError> {
        if !v.is_finite() {
            return Err(OdeError::InvalidInitialTime { got: v });
        }
        self.t0 = v;
        Ok(self)
    }

    pub fn set_y0(mut self, v: f64) -> Result<Self, OdeError> {
        if !v.is_finite() {
            return Err(OdeError::InvalidInitialValue { got: v });
        }
        self.y0 = v;
        Ok(self)
    }

    pub fn set_h(mut self, v: f64) -> Result<Self, OdeError> {
        if !v.is_finite() || v == 0.0 {
            return Err(OdeError::InvalidStepSize { got: v });
        }
        self.h = v;
        Ok(self)
    }

    pub fn set_steps(mut self, v: usize) -> Self {
        self.steps = v;
        self
    }

    // getters
    pub fn t0(&self)    -> f64   { self.t0 }
    pub fn y0(&self)    -> f64   { self.y0 }
    pub fn h(&self)     -> f64   { self.h }
    pub fn steps(&self) -> usize { self.steps }

    /// Time of the last trajectory point, `t0 + steps * h`.
    pub fn t_end(&self) -> f64 {
        self.t0 + self.steps as f64 * self.h
    }
}
