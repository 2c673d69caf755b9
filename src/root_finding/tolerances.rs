//! Tolerance utilities for root-finding algorithms.
//!
//! Provides types and helpers for computing stopping tolerances
//! consistently across algorithm categories.
//!
//! `DynamicTolerance` : method-specific per-iteration tolerance  
//! - `WidthTol(a, b)` : bracketing methods  
//! - `StepTol(x)`     : open methods  
//!
//! Each [`Algorithm`] variant enforces that only the correct dynamic
//! tolerance type is used via `calculate_tolerance`.


use crate::root_finding::errors::ToleranceError;  
use crate::root_finding::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK};


/// Bracketing methods use DynamicTolerance::WidthTol 
/// Open methods       use DynamicTolerance::StepTol
#[derive(Debug, Copy, Clone)]
pub(crate) enum DynamicTolerance { 
    WidthTol { a: f64, b: f64 }, 
    StepTol  { x: [f64; 2] } 
}
impl DynamicTolerance { 
    pub fn step(x_prev: f64, x_next: f64) -> Self { 
        DynamicTolerance::StepTol { x: [x_prev, x_next] }
    }
    pub fn width(a: f64, b: f64) -> Self { 
        DynamicTolerance::WidthTol { a, b }
    }
}


impl Algorithm {
    /// Compute the method-specific dynamic tolerance for an algorithm.
    /// - [`Algorithm::Bracket`] methods ([`DynamicTolerance::WidthTol`]):  
    ///   `abs_x + rel_x * max(|a|, |b|, 1.0)`
    /// - [`Algorithm::Open`] methods ([`DynamicTolerance::StepTol`]): 
    ///   `abs_x + rel_x * max(|x|, 1.0)` 
    ///
    /// # Notes 
    /// - For open methods `|x|` is the larger of the two consecutive estimates. 
    ///
    /// # Errors 
    /// - Returns a [`ToleranceError`] if the tolerance type does not 
    ///   match the algorithm type (e.g. width tolerance for an open method) 
    ///   or if the result is invalid (non-finite or <= 0).
    pub(crate) fn calculate_tolerance( 
        &self, 
        dynamic_tol : &DynamicTolerance, 
        abs_x   : f64, 
        rel_x   : f64 
    ) -> Result<f64, ToleranceError> {

        let calculated_tol = match (self, dynamic_tol) { 
            (
                Algorithm::Bracket(..), 
                DynamicTolerance::WidthTol { a, b }
            ) 
            => abs_x + rel_x * a.abs().max(b.abs()).max(1.0), 

            (
                Algorithm::Open(..), 
                DynamicTolerance::StepTol { x }
            )
            => { 
                let max_abs = x[0].abs().max(x[1].abs());

                abs_x + rel_x * max_abs.max(1.0)
            },

            (_, DynamicTolerance::WidthTol { .. }) 
            => return Err(ToleranceError::WidthTolNotApplicable { algorithm: *self }), 

            (_, DynamicTolerance::StepTol { .. })
            => return Err(ToleranceError::StepTolNotApplicable { algorithm: *self }),
        };

        if calculated_tol <= 0.0 || !calculated_tol.is_finite() {
            return Err(ToleranceError::InvalidTolerance { got: calculated_tol });
        }

        Ok(calculated_tol)
    }   
}


/// Lower bound of the bracket width tolerance over every bracket.
///
/// `max(|a|, |b|, 1.0) >= 1.0`, so `abs_x + rel_x` never exceeds any
/// tolerance computed by [`Algorithm::calculate_tolerance`] for a bracket.
/// Used to size the theoretical bisection iteration count.
#[inline]
pub(crate) fn min_width_tol(abs_x: f64, rel_x: f64) -> f64 { 
    abs_x + rel_x
}


/// Midpoint of `[a, b]`, finite for every finite bracket.
#[inline]
pub(crate) fn bracket_midpoint(a: f64, b: f64) -> f64 {
    0.5 * a + 0.5 * b
}

/// Half of `b - a` without forming `b - a`, which overflows once the
/// bracket spans more than `f64::MAX`.
#[inline]
pub(crate) fn bracket_half_width(a: f64, b: f64) -> f64 {
    0.5 * b - 0.5 * a
}


/// Theoretical number of halvings until `(b - a) / 2 <= width_tol`.
///
/// At iteration `k` the bracket has half-width `h0 / 2^(k-1)` with
/// `h0 = (b - a) / 2`, so the midpoint test fires once `h0 / 2^(k-1) <= width_tol`.
/// Always at least one iteration; a count too large to represent resolves
/// to [`GLOBAL_MAX_ITER_FALLBACK`].
pub(crate) fn bisection_theoretical_iter(
    a: f64, 
    b: f64, 
    width_tol: f64
) -> Result<usize, ToleranceError> { 
    if !(width_tol.is_finite() && width_tol > 0.0) {
        return Err(ToleranceError::InvalidTolerance { got: width_tol });
    }

    let iters = (bracket_half_width(a, b) / width_tol).log2().ceil() + 1.0; 
    if !iters.is_finite() {
        return Ok(GLOBAL_MAX_ITER_FALLBACK);
    }
    if iters < 1.0 { 
        return Ok(1); 
    }

    Ok(iters as usize)
}
