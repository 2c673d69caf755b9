// common helpers 
pub mod algorithms; 
pub mod report; 
pub mod errors; 
pub(crate) mod config;
pub(crate) mod signs; 
pub(crate) mod tolerances; 

// algorithms 
pub mod bisection;
pub mod regula_falsi;
pub mod newton;

pub use config::{DEFAULT_ABS_FX, DEFAULT_ABS_X, DEFAULT_REL_X};
