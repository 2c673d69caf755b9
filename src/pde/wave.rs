//! Explicit central-difference scheme for `u_tt = c² u_xx` with fixed ends.
//!
//! ```text
//! u_i^{n+1} = 2 u_i^n - u_i^{n-1} + C² (u_{i+1}^n - 2 u_i^n + u_{i-1}^n),   C = c dt / dx
//! ```
//!
//! The scheme is stable for `C <= 1` and exact at the nodes for `C = 1`.

use crate::pde::config::{WaveCfg, CFL_LIMIT};
use crate::pde::errors::PdeError;
use crate::pde::report::TimeSeriesReport;
use crate::pde::stencil::{check_companion, check_profile, grid, second_difference};


/// How the second time level `u¹` is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveStart<'a> {
    /// Zero initial velocity.
    AtRest,
    /// Initial velocity `u_t(x, 0)` at every grid point.
    Velocity(&'a [f64]),
    /// `u¹` given explicitly. Its end values are replaced by those of the
    /// initial profile.
    SecondLevel(&'a [f64]),
}


/// First step from `u⁰` and `u_t(x, 0) = v` (Taylor expansion to second order):
/// `u¹_i = u⁰_i + dt v_i + C²/2 δ²u⁰_i`.
fn bootstrap(u0: &[f64], velocity: Option<&[f64]>, dt: f64, c2: f64) -> Vec<f64> {
    let mut u1 = u0.to_vec();
    for i in 1..u0.len() - 1 {
        let v = velocity.map_or(0.0, |v| v[i]);
        u1[i] = u0[i] + dt * v + 0.5 * c2 * second_difference(u0, i);
    }
    u1
}


/// Solves the 1-D wave equation by explicit leapfrog.
///
/// # Arguments
///
/// ┌ `initial_profile` - `u(x, 0)` on `x_i = i dx`; its ends hold on every level
/// ├ `start`           - [`WaveStart`]
/// └ `cfg`             - [`WaveCfg`]
///
/// # Returns
///
/// [`TimeSeriesReport`] with `stability_number = C`.
///
/// # Errors
///
/// ┌ [`PdeError::InvalidGridSize`]  - fewer than 3 profile points
/// ├ [`PdeError::NonFiniteProfile`] - NaN/inf in the profile, velocity or second level
/// ├ [`PdeError::LengthMismatch`]   - velocity / second level length differs from the profile
/// └ [`PdeError::Unstable`]         - `C > `[`CFL_LIMIT`]; raised before stepping
pub fn wave_explicit(
    initial_profile: &[f64],
    start: WaveStart<'_>,
    cfg: WaveCfg
) -> Result<TimeSeriesReport, PdeError> {
    check_profile(initial_profile)?;
    match start {
        WaveStart::AtRest => {},
        WaveStart::Velocity(v) | WaveStart::SecondLevel(v) => check_companion(initial_profile, v)?,
    }

    let courant = cfg.courant_number();
    if courant > CFL_LIMIT {
        return Err(PdeError::Unstable {
            scheme : "wave_explicit",
            number : courant,
            limit  : CFL_LIMIT,
        });
    }
    let c2 = courant * courant;

    let nx    = initial_profile.len();
    let steps = cfg.steps();
    let mut levels = Vec::with_capacity(steps + 1);
    levels.push(initial_profile.to_vec());

    if steps >= 1 {
        let u1 = match start {
            WaveStart::AtRest         => bootstrap(initial_profile, None, cfg.dt(), c2),
            WaveStart::Velocity(v)    => bootstrap(initial_profile, Some(v), cfg.dt(), c2),
            WaveStart::SecondLevel(u) => {
                let mut u1 = u.to_vec();
                u1[0]      = initial_profile[0];
                u1[nx - 1] = initial_profile[nx - 1];
                u1
            },
        };
        levels.push(u1);
    }

    let mut prev = initial_profile.to_vec();
    let mut curr = levels.last().cloned().unwrap_or_default();
    let mut next = curr.clone();
    for _ in 1..steps {
        for i in 1..nx - 1 {
            next[i] = 2.0 * curr[i] - prev[i] + c2 * second_difference(&curr, i);
        }
        // ends stay at the current level's values
        next[0]      = curr[0];
        next[nx - 1] = curr[nx - 1];

        levels.push(next.clone());
        std::mem::swap(&mut prev, &mut curr);
        std::mem::swap(&mut curr, &mut next);
    }

    Ok(TimeSeriesReport {
        algorithm_name   : "wave_explicit",
        x                : grid(nx, cfg.dx()),
        dt               : cfg.dt(),
        levels,
        stability_number : courant,
    })
}
