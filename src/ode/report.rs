//! Output types of the fixed-step integrators.

/// One trajectory sample `(t, y)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OdePoint {
    pub t: f64,
    pub y: f64,
}

/// Fully evaluated trajectory.
///
/// [`OdeReport`]
/// - `algorithm_name` : integrator used (e.g. `"rk4"`)
/// - `t`              : sample times, `t[0] = t0`
/// - `y`              : values at `t`, `y[0] = y0`
/// - `evaluations`    : right-hand side calls made
#[derive(Debug, Clone, PartialEq)]
pub struct OdeReport {
    pub algorithm_name : &'static str,
    pub t              : Vec<f64>,
    pub y              : Vec<f64>,
    pub evaluations    : usize,
}

impl OdeReport {
    pub fn len(&self) -> usize { self.t.len() }
    pub fn is_empty(&self) -> bool { self.t.is_empty() }

    pub fn final_point(&self) -> Option<OdePoint> {
        Some(OdePoint { t: *self.t.last()?, y: *self.y.last()? })
    }

    pub fn points(&self) -> impl Iterator<Item = OdePoint> + '_ {
        self.t.iter().zip(self.y.iter()).map(|(&t, &y)| OdePoint { t, y })
    }
}
