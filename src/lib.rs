//! Numerical solver core.
//!
//! ┌ [`root_finding`]  : bisection, regula falsi, Newton–Raphson
//! ├ [`interpolation`] : Lagrange polynomial interpolation
//! ├ [`ode`]           : fixed-step Euler / modified Euler / RK2 / RK4 trajectories
//! ├ [`linalg`]        : tridiagonal (Thomas) solver
//! └ [`pde`]           : finite-difference BVP, heat (FTCS, Crank–Nicolson), wave
//!
//! Every solver takes caller-supplied closures plus a validated `*Cfg`
//! and returns a report (or a lazy trajectory). Failures are typed per
//! family and classified through [`errors::ErrorKind`].

pub mod errors;

pub mod root_finding;
pub mod interpolation;
pub mod ode;
pub mod linalg;
pub mod pde;
