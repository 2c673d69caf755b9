pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod trajectory;

pub mod euler;
pub mod runge_kutta;

pub use algorithms::{Method, Rk2Variant};
pub use config::IvpCfg;
pub use errors::OdeError;
pub use report::{OdePoint, OdeReport};
pub use trajectory::{Steps, Trajectory};
pub use euler::{euler, modified_euler};
pub use runge_kutta::{rk2, rk4};
