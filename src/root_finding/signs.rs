//! Sign utilities for root-finding algorithms.
//! - `opposite_sign` : `true` if values have opposite sign  

/// Returns `true` if `x` and `y` have opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}
