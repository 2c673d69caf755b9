//! 1-D heat equation `u_t = alpha u_xx` with fixed (Dirichlet) ends.
//!
//! ┌ [`heat_ftcs`]           : explicit, forward time / central space, needs `r <= 1/2`
//! └ [`heat_crank_nicolson`] : implicit trapezoid in time, unconditionally stable
//!
//! `r = alpha dt / dx²` throughout. The end values of the initial profile
//! are held for every time level.

use crate::linalg::thomas_solve;
use crate::pde::config::{HeatCfg, FTCS_STABILITY_LIMIT};
use crate::pde::errors::PdeError;
use crate::pde::report::TimeSeriesReport;
use crate::pde::stencil::{check_profile, grid, second_difference};


/// Explicit FTCS scheme.
///
/// ```text
/// u_i^{n+1} = u_i^n + r (u_{i+1}^n - 2 u_i^n + u_{i-1}^n)
/// ```
///
/// # Errors
///
/// ┌ [`PdeError::InvalidGridSize`]  - fewer than 3 profile points
/// ├ [`PdeError::NonFiniteProfile`] - NaN/inf in `initial_profile`
/// └ [`PdeError::Unstable`]         - `r > `[`FTCS_STABILITY_LIMIT`]; raised
///                                    before any time step is taken
pub fn heat_ftcs(
    initial_profile: &[f64],
    cfg: HeatCfg
) -> Result<TimeSeriesReport, PdeError> {
    check_profile(initial_profile)?;

    let r = cfg.diffusion_number();
    if r > FTCS_STABILITY_LIMIT {
        return Err(PdeError::Unstable {
            scheme : "heat_ftcs",
            number : r,
            limit  : FTCS_STABILITY_LIMIT,
        });
    }

    let nx = initial_profile.len();
    let mut levels = Vec::with_capacity(cfg.steps() + 1);
    levels.push(initial_profile.to_vec());

    let mut u = initial_profile.to_vec();
    let mut next = u.clone();
    for _ in 0..cfg.steps() {
        for i in 1..nx - 1 {
            next[i] = u[i] + r * second_difference(&u, i);
        }
        std::mem::swap(&mut u, &mut next);
        levels.push(u.clone());
    }

    Ok(TimeSeriesReport {
        algorithm_name   : "heat_ftcs",
        x                : grid(nx, cfg.dx()),
        dt               : cfg.dt(),
        levels,
        stability_number : r,
    })
}


/// Crank–Nicolson scheme.
///
/// Each step solves, for the interior nodes,
///
/// ```text
/// -r/2 u_{i-1}^{n+1} + (1 + r) u_i^{n+1} - r/2 u_{i+1}^{n+1}
///     = r/2 u_{i-1}^n + (1 - r) u_i^n + r/2 u_{i+1}^n
/// ```
///
/// with [`thomas_solve`]. The fixed end values contribute `r u_b` to the
/// first and last right-hand side rows.
///
/// # Errors
///
/// ┌ [`PdeError::InvalidGridSize`]  - fewer than 3 profile points
/// ├ [`PdeError::NonFiniteProfile`] - NaN/inf in `initial_profile`
/// └ [`PdeError::Linear`]           - zero pivot (cannot occur for `r >= 0`)
pub fn heat_crank_nicolson(
    initial_profile: &[f64],
    cfg: HeatCfg
) -> Result<TimeSeriesReport, PdeError> {
    check_profile(initial_profile)?;

    let r  = cfg.diffusion_number();
    let nx = initial_profile.len();
    let m  = nx - 2;

    // A = tridiag(-r/2, 1 + r, -r/2), fixed over all steps
    let sub  = vec![-0.5 * r; m];
    let diag = vec![1.0 + r; m];
    let sup  = vec![-0.5 * r; m];
    let mut rhs = vec![0.0; m];

    let left  = initial_profile[0];
    let right = initial_profile[nx - 1];

    let mut levels = Vec::with_capacity(cfg.steps() + 1);
    levels.push(initial_profile.to_vec());

    let mut u = initial_profile.to_vec();
    for _ in 0..cfg.steps() {
        // B u^n
        for k in 0..m {
            let i = k + 1;
            rhs[k] = 0.5 * r * u[i - 1] + (1.0 - r) * u[i] + 0.5 * r * u[i + 1];
        }
        // implicit boundary terms
        rhs[0]     += 0.5 * r * left;
        rhs[m - 1] += 0.5 * r * right;

        let interior = thomas_solve(&sub, &diag, &sup, &rhs)?;
        u[1..nx - 1].copy_from_slice(&interior);
        levels.push(u.clone());
    }

    Ok(TimeSeriesReport {
        algorithm_name   : "heat_crank_nicolson",
        x                : grid(nx, cfg.dx()),
        dt               : cfg.dt(),
        levels,
        stability_number : r,
    })
}
