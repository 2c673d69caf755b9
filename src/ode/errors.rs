use thiserror::Error;
use crate::errors::ErrorKind;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OdeError {
    #[error("invalid initial time t0 = {got}, must be finite")]
    InvalidInitialTime { got: f64 },

    #[error("invalid initial value y0 = {got}, must be finite")]
    InvalidInitialValue { got: f64 },

    #[error("invalid step size h = {got}, must be finite and non-zero")]
    InvalidStepSize { got: f64 },

    #[error("right-hand side returned {value} at (t = {t}, y = {y})")]
    NonFiniteEvaluation { t: f64, y: f64, value: f64 },

    #[error("solution left the representable range at t = {t} (y = {y})")]
    NonFiniteState { t: f64, y: f64 },
}

impl OdeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OdeError::InvalidInitialTime { .. }
            | OdeError::InvalidInitialValue { .. }
            | OdeError::InvalidStepSize { .. }     => ErrorKind::Configuration,
            OdeError::NonFiniteEvaluation { .. }   => ErrorKind::Evaluation,
            OdeError::NonFiniteState { .. }        => ErrorKind::Stability,
        }
    }
}
