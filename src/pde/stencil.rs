//! Profile validation and the three-point Laplacian shared by the time steppers.

use crate::pde::errors::PdeError;

/// Fewest grid points a time-stepped profile may have: two boundaries and
/// one interior node.
pub(crate) const MIN_PROFILE_LEN: usize = 3;

pub(crate) fn check_profile(profile: &[f64]) -> Result<(), PdeError> {
    if profile.len() < MIN_PROFILE_LEN {
        return Err(PdeError::InvalidGridSize { got: profile.len(), min: MIN_PROFILE_LEN });
    }
    if let Some(idx) = profile.iter().position(|v| !v.is_finite()) {
        return Err(PdeError::NonFiniteProfile { idx });
    }
    Ok(())
}

/// Same-length, finite companion array (velocity, second level).
pub(crate) fn check_companion(profile: &[f64], other: &[f64]) -> Result<(), PdeError> {
    if other.len() != profile.len() {
        return Err(PdeError::LengthMismatch { expected: profile.len(), got: other.len() });
    }
    if let Some(idx) = other.iter().position(|v| !v.is_finite()) {
        return Err(PdeError::NonFiniteProfile { idx });
    }
    Ok(())
}

/// `u[i+1] - 2 u[i] + u[i-1]`, interior `i` only.
#[inline]
pub(crate) fn second_difference(u: &[f64], i: usize) -> f64 {
    u[i + 1] - 2.0 * u[i] + u[i - 1]
}

pub(crate) fn grid(n: usize, dx: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * dx).collect()
}
