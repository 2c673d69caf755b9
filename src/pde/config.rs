//! Time-stepping configuration for the 1-D PDE solvers.
//!
//! [`HeatCfg`] (`u_t = alpha u_xx`) and [`WaveCfg`] (`u_tt = c² u_xx`) share
//! the grid fields below through [`GridCfg`], injected by `impl_grid_cfg!`.
//!
//! [`GridCfg`]
//! - `dx`    : spatial step, finite and > 0
//! - `dt`    : time step, finite and > 0
//! - `steps` : number of time steps; reports hold `steps + 1` levels

use crate::pde::errors::PdeError;

/// Largest `r = alpha dt / dx²` accepted by the FTCS scheme.
pub const FTCS_STABILITY_LIMIT: f64 = 0.5;

/// Largest Courant number `C = c dt / dx` accepted by the explicit wave scheme.
pub const CFL_LIMIT: f64 = 1.0;

pub const DEFAULT_DX: f64 = 0.01;
pub const DEFAULT_DT: f64 = 1e-5;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridCfg {
    dx    : f64,
    dt    : f64,
    steps : usize,
}

impl Default for GridCfg {
    fn default() -> Self { Self::new() }
}

impl GridCfg {
    pub fn new() -> Self {
        Self { dx: DEFAULT_DX, dt: DEFAULT_DT, steps: 0 }
    }

    // getters
    pub fn dx(&self)    -> f64   { self.dx }
    pub fn dt(&self)    -> f64   { self.dt }
    pub fn steps(&self) -> usize { self.steps }

    // setters
    pub(crate) fn with_dx(&mut self, v: f64) { self.dx = v; }
    pub(crate) fn with_dt(&mut self, v: f64) { self.dt = v; }
    pub(crate) fn with_steps(&mut self, v: usize) { self.steps = v; }
}

pub(crate) fn check_step(name: &'static str, v: f64) -> Result<f64, PdeError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(PdeError::InvalidStep { name, got: v });
    }
    Ok(v)
}

pub(crate) fn check_coefficient(name: &'static str, v: f64) -> Result<f64, PdeError> {
    if !v.is_finite() || v < 0.0 {
        return Err(PdeError::InvalidCoefficient { name, got: v });
    }
    Ok(v)
}

macro_rules! impl_grid_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_dx(mut self, v: f64) -> Result<Self, $crate::pde::errors::PdeError> {
                let v = $crate::pde::config::check_step("dx", v)?;
                self.grid.with_dx(v);
                Ok(self)
            }

            pub fn set_dt(mut self, v: f64) -> Result<Self, $crate::pde::errors::PdeError> {
                let v = $crate::pde::config::check_step("dt", v)?;
                self.grid.with_dt(v);
                Ok(self)
            }

            pub fn set_steps(mut self, v: usize) -> Self {
                self.grid.with_steps(v);
                self
            }

            pub fn dx(&self)    -> f64   { self.grid.dx() }
            pub fn dt(&self)    -> f64   { self.grid.dt() }
            pub fn steps(&self) -> usize { self.grid.steps() }
        }
    };
}


/// Heat equation configuration.
///
/// # Construction
/// - [`HeatCfg::new`] then `set_alpha`, `set_dx`, `set_dt`, `set_steps`.
///
/// # Defaults
/// - `alpha = 1`, `dx = `[`DEFAULT_DX`], `dt = `[`DEFAULT_DT`], `steps = 0`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeatCfg {
    grid  : GridCfg,
    alpha : f64,
}

impl Default for HeatCfg {
    fn default() -> Self { Self::new() }
}

impl HeatCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { grid: GridCfg::new(), alpha: 1.0 }
    }

    pub fn set_alpha(mut self, v: f64) -> Result<Self, PdeError> {
        self.alpha = check_coefficient("alpha", v)?;
        Ok(self)
    }

    pub fn alpha(&self) -> f64 { self.alpha }

    /// Diffusion number `r = alpha dt / dx²`.
    pub fn diffusion_number(&self) -> f64 {
        self.alpha * self.grid.dt() / (self.grid.dx() * self.grid.dx())
    }
}
impl_grid_cfg!(HeatCfg);


/// Wave equation configuration.
///
/// # Defaults
/// - `c = 1`, `dx = `[`DEFAULT_DX`], `dt = `[`DEFAULT_DT`], `steps = 0`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WaveCfg {
    grid : GridCfg,
    c    : f64,
}

impl Default for WaveCfg {
    fn default() -> Self { Self::new() }
}

impl WaveCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { grid: GridCfg::new(), c: 1.0 }
    }

    pub fn set_c(mut self, v: f64) -> Result<Self, PdeError> {
        self.c = check_coefficient("c", v)?;
        Ok(self)
    }

    pub fn c(&self) -> f64 { self.c }

    /// Courant number `C = c dt / dx`.
    pub fn courant_number(&self) -> f64 {
        self.c * self.grid.dt() / self.grid.dx()
    }
}
impl_grid_cfg!(WaveCfg);
