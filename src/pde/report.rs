//! Output types of the finite-difference discretizers.

/// Boundary value problem solution on a uniform grid.
///
/// [`BvpReport`]
/// - `algorithm_name` : `"finite_difference_bvp"`
/// - `h`              : grid spacing `(b - a) / (n + 1)`
/// - `x`              : `n + 2` grid points including both boundaries
/// - `y`              : solution at `x`, boundary values included
#[derive(Debug, Clone, PartialEq)]
pub struct BvpReport {
    pub algorithm_name : &'static str,
    pub h              : f64,
    pub x              : Vec<f64>,
    pub y              : Vec<f64>,
}

impl BvpReport {
    /// Solution at the `n` interior nodes.
    pub fn interior(&self) -> &[f64] {
        let n = self.y.len();
        &self.y[1..n - 1]
    }
}


/// Time levels of a 1-D time-stepped solve.
///
/// [`TimeSeriesReport`]
/// - `algorithm_name`   : `"heat_ftcs"`, `"heat_crank_nicolson"` or `"wave_explicit"`
/// - `x`                : grid points `i * dx`
/// - `dt`               : time step
/// - `levels`           : `levels[k]` is the profile at `t = k * dt`, `steps + 1` entries
/// - `stability_number` : `r = alpha dt / dx²` for heat, `C = c dt / dx` for wave
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesReport {
    pub algorithm_name   : &'static str,
    pub x                : Vec<f64>,
    pub dt               : f64,
    pub levels           : Vec<Vec<f64>>,
    pub stability_number : f64,
}

impl TimeSeriesReport {
    /// Profile after the last step. Level 0 is the initial profile, so this
    /// is never empty.
    pub fn final_level(&self) -> &[f64] {
        self.levels.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn level(&self, k: usize) -> Option<&[f64]> {
        self.levels.get(k).map(Vec::as_slice)
    }

    pub fn time_at(&self, k: usize) -> f64 {
        k as f64 * self.dt
    }

    pub fn steps(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }
}
