//! Defines the [`RootFindingReport`] struct returned by all 
//! root-finding algorithms. 

use super::errors::RootFindingError;

/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)] 
pub enum TerminationReason { 
    ToleranceReached, 
    IterationLimit,
    MachinePrecisionReached, 
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]    
///     - All methods 
///     - |f(x)| <= tol
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bracketing methods 
///     - [a, b] -> (b - a).abs() <= tol 
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - open methods, and regula falsi between consecutive estimates 
///     - x_n - x_{n - 1} <= tol 
/// - [`ToleranceSatisfied::ToleranceNotReached`] 
///     - All methods 
///     - Tolerance not reached, usually with [`TerminationReason::IterationLimit`] 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied { 
    AbsFxReached, 
    WidthTolReached, 
    StepSizeReached, 
    ToleranceNotReached
}


/// Method-specific data returned by a solver. 
/// Contains the last set of points used in the update formula. 
/// - [`Stencil::Bracket`] : bracketing methods  
///     - `left`, `right` bounds of the final interval  
/// - [`Stencil::Open`]    : open methods  
///     - `x` = last iterate used to compute the root  
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil { 
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 1] }, 
}
impl Stencil { 
    pub fn stencil(&self) -> &[f64] { 
        match self { 
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x }         => &x[..],
        }
    }
    pub fn bracket(a: f64, b: f64) -> Self { 
        Stencil::Bracket { bounds: [a, b] }
    }
    pub fn singleton(x: f64) -> Self { 
        Stencil::Open { x: [x] }
    }
}


/// One entry of the iteration history.
/// - `iteration` : iteration index (0 = starting point) 
/// - `estimate`  : root estimate produced by this iteration 
/// - `residual`  : f(estimate)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationRecord { 
    pub iteration : usize, 
    pub estimate  : f64, 
    pub residual  : f64, 
}


/// Final report returned by all root-finding algorithms.  
/// 
/// [`RootFindingReport`]
/// - `root`                : best root estimate  
/// - `f_root`              : function value at `root`  
/// - `iterations`          : total iterations  
/// - `evaluations`         : total function evaluations  
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])  
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`]) 
/// - `stencil`             : last set of points used in update formula    
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)  
/// - `history`             : every estimate in order ([`IterationRecord`])
#[derive(Debug, Clone)] 
pub struct RootFindingReport {
    pub root                : f64, 
    pub f_root              : f64, 
    pub iterations          : usize, 
    pub evaluations         : usize, 
    pub termination_reason  : TerminationReason, 
    pub tolerance_satisfied : ToleranceSatisfied, 
    pub stencil             : Stencil, 
    pub algorithm_name      : &'static str, 
    pub history             : Vec<IterationRecord>,
}

impl RootFindingReport { 
    /// `false` only when the iteration cap was hit before any tolerance.
    pub fn is_converged(&self) -> bool { 
        self.termination_reason != TerminationReason::IterationLimit
    }

    /// Promotes a non-converged report to [`RootFindingError::NotConverged`].
    ///
    /// Hitting `max_iter` is reported as a status by every solver; use this 
    /// when the caller wants it as a hard failure instead. 
    pub fn into_converged(self) -> Result<Self, RootFindingError> { 
        if self.is_converged() { 
            return Ok(self); 
        }

        Err(RootFindingError::NotConverged { 
            algorithm  : self.algorithm_name, 
            iterations : self.iterations, 
            root       : self.root, 
            f_root     : self.f_root, 
        })
    }
}
