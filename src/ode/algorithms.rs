//! Fixed-step integrators and their identifiers.
//!
//! ┌ [`Method::Euler`]         : one stage, first order
//! ├ [`Method::ModifiedEuler`] : Euler predictor + trapezoidal corrector, second order
//! ├ [`Method::Rk2`]           : two-stage Runge–Kutta, second order, see [`Rk2Variant`]
//! └ [`Method::Rk4`]           : classical four-stage Runge–Kutta, fourth order


/// Two-stage explicit Runge–Kutta schemes.
///
/// Tableau shape (`a21 = c2`):
///
/// ```text
///  0  |
///  c2 | c2
/// ----+---------
///     | b1   b2
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rk2Variant {
    /// `c2 = 1`, `b = (1/2, 1/2)`
    Heun,
    /// `c2 = 1/2`, `b = (0, 1)`
    Midpoint,
    /// `c2 = 2/3`, `b = (1/4, 3/4)`, minimal truncation error bound
    Ralston,
}

impl Rk2Variant {
    /// `(c2, b1, b2)`
    pub const fn tableau(self) -> (f64, f64, f64) {
        match self {
            Rk2Variant::Heun     => (1.0, 0.5, 0.5),
            Rk2Variant::Midpoint => (0.5, 0.0, 1.0),
            Rk2Variant::Ralston  => (2.0 / 3.0, 0.25, 0.75),
        }
    }
}


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Euler,
    ModifiedEuler,
    Rk2(Rk2Variant),
    Rk4,
}

impl Method {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Method::Euler                      => "euler",
            Method::ModifiedEuler              => "modified_euler",
            Method::Rk2(Rk2Variant::Heun)      => "rk2_heun",
            Method::Rk2(Rk2Variant::Midpoint)  => "rk2_midpoint",
            Method::Rk2(Rk2Variant::Ralston)   => "rk2_ralston",
            Method::Rk4                        => "rk4",
        }
    }

    /// Right-hand side evaluations per step.
    pub const fn stages(self) -> usize {
        match self {
            Method::Euler         => 1,
            Method::ModifiedEuler
            | Method::Rk2(_)      => 2,
            Method::Rk4           => 4,
        }
    }

    /// Global order of accuracy.
    pub const fn order(self) -> u32 {
        match self {
            Method::Euler         => 1,
            Method::ModifiedEuler
            | Method::Rk2(_)      => 2,
            Method::Rk4           => 4,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
