use thiserror::Error;
use crate::errors::ErrorKind;
use crate::linalg::TridiagonalError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PdeError {
    #[error(transparent)]
    Linear(#[from] TridiagonalError),

    #[error("invalid grid size {got}, need at least {min}")]
    InvalidGridSize { got: usize, min: usize },

    #[error("invalid domain [{a}, {b}]: ends must be finite with a < b")]
    InvalidDomain { a: f64, b: f64 },

    #[error("invalid {name} = {got}, must be finite and > 0")]
    InvalidStep { name: &'static str, got: f64 },

    #[error("invalid {name} = {got}, must be finite and >= 0")]
    InvalidCoefficient { name: &'static str, got: f64 },

    #[error("length mismatch: expected {expected} values, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("non-finite value in profile at index {idx}")]
    NonFiniteProfile { idx: usize },

    #[error("non-finite boundary value {got}")]
    NonFiniteBoundary { got: f64 },

    #[error("coefficient function returned {value} at x = {x}")]
    NonFiniteEvaluation { x: f64, value: f64 },

    #[error("{scheme} unstable: stability number {number} exceeds limit {limit}")]
    Unstable { scheme: &'static str, number: f64, limit: f64 },
}

impl PdeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PdeError::Linear(e) => e.kind(),
            PdeError::InvalidGridSize { .. }
            | PdeError::InvalidDomain { .. }
            | PdeError::LengthMismatch { .. }
            | PdeError::NonFiniteProfile { .. }
            | PdeError::NonFiniteBoundary { .. } => ErrorKind::Domain,
            PdeError::InvalidStep { .. }
            | PdeError::InvalidCoefficient { .. } => ErrorKind::Configuration,
            PdeError::NonFiniteEvaluation { .. } => ErrorKind::Evaluation,
            PdeError::Unstable { .. }            => ErrorKind::Stability,
        }
    }
}
