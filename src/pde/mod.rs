pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod stencil;

pub mod bvp;
pub mod heat;
pub mod wave;

pub use config::{HeatCfg, WaveCfg, CFL_LIMIT, FTCS_STABILITY_LIMIT};
pub use errors::PdeError;
pub use report::{BvpReport, TimeSeriesReport};
pub use bvp::{finite_difference_bvp, Boundary, LinearBvp};
pub use heat::{heat_crank_nicolson, heat_ftcs};
pub use wave::{wave_explicit, WaveStart};
