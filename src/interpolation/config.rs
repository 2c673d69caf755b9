//! Shared configuration for interpolation algorithms.
//!
//! Provides [`CommonCfg`] with default minimum allowed spacing between any
//! two `x` nodes; [`DEFAULT_X_TOL`]. Shared by all interpolation algorithms.
//!
//! [`CommonCfg`] : universal fields
//! - `x`           : x values provided (any order, pairwise distinct)
//! - `y`           : y values provided
//! - `x_eval`      : x values to evaluate
//! - `x_min_spacing` : nodes closer than this count as duplicates
//! - `extrapolate` : allow evaluation outside `[min x, max x]`
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.


use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
    pub(crate) extrapolate: bool,
}

impl Default for CommonCfg<'_> {
    fn default() -> Self { Self::new() }
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
            extrapolate: true,
        }
    }

    /// Full consistency check run before evaluation.
    ///
    /// Setters check eagerly, but `set_x_tol` may tighten the duplicate
    /// test after `set_x`, and `y` may never have been set.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if let Some((x1, x2)) = first_duplicate(x, self.x_min_spacing) {
            return Err(InterpolationError::DuplicateX { x1, x2 });
        }
        Ok(())
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self)  -> f64 { self.x_min_spacing }
    pub fn extrapolate(&self) -> bool { self.extrapolate }

    /// `(min x, max x)` of the nodes.
    pub fn x_range(&self) -> (f64, f64) {
        self.x.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &xi| (lo.min(xi), hi.max(xi))
        )
    }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a[f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a[f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a[f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
    pub(crate) fn with_extrapolate(&mut self, v: bool) { self.extrapolate = v; }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// First pair of nodes that coincide or lie closer than `min_spacing`,
/// in index order. `min_spacing = 0` tests exact equality only.
pub(crate) fn first_duplicate(xs: &[f64], min_spacing: f64) -> Option<(f64, f64)> {
    for i in 0..xs.len() {
        for j in (i + 1)..xs.len() {
            if xs[i] == xs[j] || (xs[j] - xs[i]).abs() < min_spacing {
                return Some((xs[i], xs[j]));
            }
        }
    }
    None
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                if let Some((x1, x2)) = $crate::interpolation::config::first_duplicate(
                    v, self.common.x_min_spacing
                ) {
                    return Err(InterpolationError::DuplicateX { x1, x2 });
                }

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }

            pub fn set_extrapolate(mut self, v: bool) -> Self {
                self.common.with_extrapolate(v);
                self
            }
        }
    };
}
pub(crate) use impl_common_cfg;
